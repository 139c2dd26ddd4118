// BSL 1.0 License

//! Geometry primitives used by `chalkboard-clip`. Everything in this crate is built around 64-bit floating
//! point coordinates, where the X axis runs from left to right and the Y axis runs from top to bottom.
//!
//! The centerpiece is the [`EdgeClipper`], which confines lines and bezier curves to an axis-aligned
//! rectangle. The polynomial solvers it relies on are exported as well, since they are useful on their own.

#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names, clippy::similar_names)]

extern crate alloc;

mod edge_clip;
pub use edge_clip::*;

mod path;
pub use path::*;

mod point;
pub use point::*;

mod rect;
pub use rect::*;

mod roots;
pub use roots::*;

mod segment;
pub use segment::*;

pub(crate) mod util;

pub use lyon_geom;
pub use lyon_path;

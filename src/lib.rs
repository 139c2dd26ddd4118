// MIT/Apache2 License

//! Clipping and masking for chalkboard.
//!
//! A [`ClipStack`] tracks the clip regions pushed onto a drawing surface, and answers, for any pixel, whether
//! it is visible and how much of it is visible. Rectangular clips only shrink the visible bounds; path clips
//! are rasterized into a [`MaskClipper`], whose coverage is multiplied into every query.
//!
//! The geometry underneath, including the [`EdgeClipper`] for confining lines and curves to a rectangle, is
//! re-exported from `chalkboard-clip-geometry`.

#![forbid(unsafe_code)]

mod error;
mod mask;
mod stack;

pub use chalkboard_clip_geometry::*;
pub use error::*;
pub use mask::{FillRule, MaskClipper, CUBIC_SEGMENTS, FULL_COVERAGE, QUAD_SEGMENTS};
pub use stack::*;

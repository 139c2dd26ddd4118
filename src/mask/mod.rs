// MIT/Apache2 License

//! Coverage masks rasterized from arbitrary paths.

mod edge;
mod flatten;

pub use flatten::{CUBIC_SEGMENTS, QUAD_SEGMENTS};

use crate::{Error, PathElement, Point, Rect};
use edge::{build_edges, Edge};
use ordered_float::OrderedFloat;
use tinyvec::TinyVec;

/// Coverage value for a pixel entirely inside of a mask.
pub const FULL_COVERAGE: u8 = u8::MAX;

/// The rule used to decide which areas enclosed by a path are inside of it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the path an odd number of times.
    EvenOdd,
    /// A point is inside if the path winds around it a nonzero number of times.
    NonZero,
}

impl Default for FillRule {
    #[inline]
    fn default() -> FillRule {
        FillRule::EvenOdd
    }
}

/// A path rasterized into an 8-bit coverage buffer over a rectangular area.
///
/// Every pixel whose center is inside of the path has full coverage and every other pixel has none.
/// Queries take the nearest pixel, rather than interpolating between pixels.
#[derive(Clone)]
pub struct MaskClipper {
    bounds: Rect,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
    anti_alias: bool,
    fill_rule: FillRule,
}

/// Where a scanline crosses an edge.
#[derive(Debug, Copy, Clone, Default)]
struct Crossing {
    x: f64,
    winding: i32,
}

impl MaskClipper {
    /// Rasterize `elements` over `bounds` with the even-odd fill rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` does not contain any pixels.
    #[inline]
    pub fn new(elements: &[PathElement], bounds: Rect, anti_alias: bool) -> crate::Result<Self> {
        Self::with_fill_rule(elements, bounds, anti_alias, FillRule::EvenOdd)
    }

    /// Rasterize `elements` over `bounds` with the given fill rule.
    ///
    /// # Errors
    ///
    /// Returns an error if `bounds` does not contain any pixels.
    pub fn with_fill_rule(
        elements: &[PathElement],
        bounds: Rect,
        anti_alias: bool,
        fill_rule: FillRule,
    ) -> crate::Result<Self> {
        if bounds.is_empty() || !bounds.width.is_finite() || !bounds.height.is_finite() {
            return Err(Error::invalid_dimensions(bounds.width, bounds.height));
        }

        let width = bounds.width.ceil();
        let height = bounds.height.ceil();
        if width < 1.0 || height < 1.0 || !bounds.x.is_finite() || !bounds.y.is_finite() {
            return Err(Error::invalid_dimensions(bounds.width, bounds.height));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (width as usize, height as usize);

        // the buffer has to be addressable and allocatable
        let mut coverage = Vec::new();
        let len = width
            .checked_mul(height)
            .ok_or_else(|| Error::invalid_dimensions(bounds.width, bounds.height))?;
        if coverage.try_reserve_exact(len).is_err() {
            return Err(Error::invalid_dimensions(bounds.width, bounds.height));
        }
        coverage.resize(len, 0);

        let mut mask = MaskClipper {
            bounds,
            width,
            height,
            coverage,
            anti_alias,
            fill_rule,
        };

        let edges = build_edges(&flatten::flatten(elements));
        log::debug!(
            "Rasterizing {}x{} clip mask from {} path elements ({} edges)",
            width,
            height,
            elements.len(),
            edges.len()
        );
        if anti_alias {
            log::debug!("Anti-aliased clip requested; mask coverage will be binary");
        }

        mask.rasterize(&edges);
        Ok(mask)
    }

    /// Fill every row of the buffer by sampling the edges at the row's vertical center.
    fn rasterize(&mut self, edges: &[Edge]) {
        let mut crossings: TinyVec<[Crossing; 16]> = TinyVec::new();

        for row in 0..self.height {
            #[allow(clippy::cast_precision_loss)]
            let y = self.bounds.y + row as f64 + 0.5;

            crossings.clear();
            crossings.extend(edges.iter().filter_map(|edge| {
                edge.crossing(y).map(|x| Crossing {
                    x,
                    winding: edge.winding(),
                })
            }));
            crossings.sort_unstable_by_key(|crossing| OrderedFloat(crossing.x));

            match self.fill_rule {
                FillRule::EvenOdd => {
                    for pair in crossings.chunks_exact(2) {
                        self.fill_span(row, pair[0].x, pair[1].x);
                    }
                }
                FillRule::NonZero => {
                    let mut winding = 0;
                    let mut span_start = 0.0;
                    for crossing in crossings.iter() {
                        let previous = winding;
                        winding += crossing.winding;
                        if previous == 0 && winding != 0 {
                            span_start = crossing.x;
                        } else if previous != 0 && winding == 0 {
                            self.fill_span(row, span_start, crossing.x);
                        }
                    }
                }
            }
        }
    }

    /// Give full coverage to every pixel in `row` whose center lies in `[x0, x1)`.
    fn fill_span(&mut self, row: usize, x0: f64, x1: f64) {
        let start = self.column_at_or_after(x0);
        let end = self.column_at_or_after(x1);
        if start >= end {
            return;
        }

        let offset = row * self.width;
        for px in &mut self.coverage[offset + start..offset + end] {
            *px = FULL_COVERAGE;
        }
    }

    /// The index of the first column whose center is at or right of `x`, clamped to the buffer.
    #[inline]
    fn column_at_or_after(&self, x: f64) -> usize {
        let column = (x - self.bounds.x - 0.5).ceil();
        if column <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let column = column as usize;
            column.min(self.width)
        }
    }

    /// The coverage of the pixel nearest to `(x, y)`, or zero if the point is outside of the mask.
    #[must_use]
    pub fn coverage(&self, x: f64, y: f64) -> u8 {
        let local = Point::new(x - self.bounds.x, y - self.bounds.y);

        #[allow(clippy::cast_precision_loss)]
        let in_buffer = local.x >= 0.0
            && local.y >= 0.0
            && local.x <= self.width as f64
            && local.y <= self.height as f64;
        if !in_buffer {
            return 0;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (column, row) = (local.x.floor() as usize, local.y.floor() as usize);
        let column = column.min(self.width - 1);
        let row = row.min(self.height - 1);

        self.coverage[row * self.width + column]
    }

    /// Scale `src_alpha` by the coverage at `(x, y)`.
    #[must_use]
    pub fn apply_coverage(&self, x: f64, y: f64, src_alpha: u8) -> u8 {
        scale_alpha(src_alpha, self.coverage(x, y))
    }

    /// The area covered by this mask.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The width of the coverage buffer, in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the coverage buffer, in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw coverage buffer, in rows from top to bottom.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.coverage
    }

    /// The fill rule this mask was rasterized with.
    #[inline]
    #[must_use]
    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    /// Whether anti-aliasing was requested for this mask.
    #[inline]
    #[must_use]
    pub fn is_anti_aliased(&self) -> bool {
        self.anti_alias
    }
}

impl std::fmt::Debug for MaskClipper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the buffer is far too large to be worth printing
        f.debug_struct("MaskClipper")
            .field("bounds", &self.bounds)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("anti_alias", &self.anti_alias)
            .field("fill_rule", &self.fill_rule)
            .finish()
    }
}

/// Scale an alpha value by a coverage value, where both use 255 as "all".
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub(crate) fn scale_alpha(src_alpha: u8, coverage: u8) -> u8 {
    match coverage {
        0 => 0,
        FULL_COVERAGE => src_alpha,
        coverage => (u16::from(src_alpha) * u16::from(coverage) / u16::from(FULL_COVERAGE)) as u8,
    }
}

// BSL 1.0 License

use super::Point;

#[cfg(not(test))]
use num_traits::Float;

/// An axis-aligned rectangle, described by its top-left corner and its size.
///
/// A rectangle with a zero or negative width or height is empty. Empty rectangles contain no points, and
/// intersecting anything with an empty rectangle yields [`Rect::EMPTY`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: f64,
    /// Y coordinate of the top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its left, top, right and bottom edges.
    #[inline]
    #[must_use]
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(left, top, right - left, bottom - top)
    }

    /// The smallest rectangle containing every point in `points`, or `None` if there are no points.
    #[must_use]
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Rect> {
        let mut points = points.into_iter();
        let first = points.next()?;

        let (mut left, mut top, mut right, mut bottom) = (first.x, first.y, first.x, first.y);
        for pt in points {
            left = left.min(pt.x);
            top = top.min(pt.y);
            right = right.max(pt.x);
            bottom = bottom.max(pt.y);
        }

        Some(Rect::from_ltrb(left, top, right, bottom))
    }

    /// X coordinate of the right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether this rectangle covers no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether `point` lies in this rectangle. Edges count as inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Whether `other` lies entirely within this rectangle. Every rectangle contains the empty rectangle.
    #[inline]
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (!self.is_empty()
                && other.x >= self.x
                && other.right() <= self.right()
                && other.y >= self.y
                && other.bottom() <= self.bottom())
    }

    /// Whether the closed areas of the two rectangles touch. Unlike [`Rect::intersect`], this treats a
    /// zero-sized rectangle as a line or point rather than as nothing, which makes it suitable for testing
    /// bounding boxes of flat curves.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// The area shared by both rectangles, or [`Rect::EMPTY`] if they do not share any.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::EMPTY;
        }

        match (
            overlap(self.x, self.width, other.x, other.width),
            overlap(self.y, self.height, other.y, other.height),
        ) {
            (Some((x, width)), Some((y, height))) => Rect::new(x, y, width, height),
            _ => Rect::EMPTY,
        }
    }
}

/// Overlap of two one-dimensional spans, as an origin and a length.
fn overlap(a: f64, a_len: f64, b: f64, b_len: f64) -> Option<(f64, f64)> {
    let (a_end, b_end) = (a + a_len, b + b_len);
    let start = a.max(b);
    let end = a_end.min(b_end);

    if !(end > start) {
        return None;
    }

    // when one span encloses the other, reuse its length verbatim so repeated intersection stays exact
    if start == b && end == b_end {
        Some((b, b_len))
    } else if start == a && end == a_end {
        Some((a, a_len))
    } else {
        Some((start, end - start))
    }
}

impl From<lyon_geom::Box2D<f64>> for Rect {
    #[inline]
    fn from(b: lyon_geom::Box2D<f64>) -> Rect {
        Rect::from_ltrb(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

impl From<Rect> for lyon_geom::Box2D<f64> {
    #[inline]
    fn from(r: Rect) -> lyon_geom::Box2D<f64> {
        lyon_geom::Box2D::new(
            lyon_geom::point(r.x, r.y),
            lyon_geom::point(r.right(), r.bottom()),
        )
    }
}

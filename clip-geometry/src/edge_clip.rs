// BSL 1.0 License

//! Clipping of individual lines and curves against an axis-aligned rectangle.

use super::{Axis, BezierSegment, CubicSeg, LineSeg, Point, QuadSeg, Rect};
use crate::{segment::split_at_parameters, util::approx_eq};
use ordered_float::OrderedFloat;
use tinyvec::{ArrayVec, TinyVec};

/// Bit set in an outcode when a point lies left of the clip rectangle.
pub const LEFT: u8 = 0b0001;
/// Bit set in an outcode when a point lies right of the clip rectangle.
pub const RIGHT: u8 = 0b0010;
/// Bit set in an outcode when a point lies above the clip rectangle.
pub const TOP: u8 = 0b0100;
/// Bit set in an outcode when a point lies below the clip rectangle.
pub const BOTTOM: u8 = 0b1000;

/// Each endpoint can violate at most two boundaries, so a line needs at most four intersection steps.
const MAX_LINE_STEPS: usize = 4;

/// Endpoints this close to a boundary they violate are moved straight onto it.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Crossing parameters closer together than this are considered the same crossing.
const CROSSING_EPSILON: f64 = 1e-9;

/// The pieces of a curve that survive clipping.
pub type Clipped<S> = TinyVec<[S; 4]>;

/// Clips lines and bezier curves against a single rectangle.
///
/// Lines are clipped exactly, using the Cohen-Sutherland algorithm. Curves are cut into pieces that are
/// monotonic along both axes, those pieces are cut wherever they cross an edge of the rectangle, and the
/// resulting pieces are kept if their midpoint lies inside.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeClipper {
    rect: Rect,
}

impl EdgeClipper {
    /// Create a new clipper for `rect`.
    #[inline]
    #[must_use]
    pub fn new(rect: Rect) -> EdgeClipper {
        EdgeClipper { rect }
    }

    /// The rectangle this clipper clips against.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Compute the Cohen-Sutherland outcode of `point`: a combination of [`LEFT`], [`RIGHT`], [`TOP`] and
    /// [`BOTTOM`], or zero if the point is inside.
    #[must_use]
    pub fn outcode(&self, point: Point) -> u8 {
        let mut code = 0;
        if point.x < self.rect.x {
            code |= LEFT;
        } else if point.x > self.rect.right() {
            code |= RIGHT;
        }
        if point.y < self.rect.y {
            code |= TOP;
        } else if point.y > self.rect.bottom() {
            code |= BOTTOM;
        }
        code
    }

    /// Clip the line from `p0` to `p1`, returning the part inside the rectangle, if any.
    #[must_use]
    pub fn clip_line(&self, mut p0: Point, mut p1: Point) -> Option<LineSeg> {
        if self.rect.is_empty() || !p0.is_finite() || !p1.is_finite() {
            return None;
        }

        let mut code0 = self.outcode(p0);
        let mut code1 = self.outcode(p1);

        for _ in 0..=MAX_LINE_STEPS {
            if code0 | code1 == 0 {
                return Some(LineSeg::new(p0, p1));
            }
            if code0 & code1 != 0 {
                return None;
            }

            // move whichever endpoint is outside onto the boundary it violates
            if code0 != 0 {
                p0 = self.boundary_intersection(p0, p1, code0)?;
                code0 = self.outcode(p0);
            } else {
                p1 = self.boundary_intersection(p1, p0, code1)?;
                code1 = self.outcode(p1);
            }
        }

        None
    }

    /// Intersect the line through `outside` and `other` with one of the boundaries named in `code`.
    fn boundary_intersection(&self, outside: Point, other: Point, code: u8) -> Option<Point> {
        let dx = other.x - outside.x;
        let dy = other.y - outside.y;

        let (axis, boundary) = if code & TOP != 0 {
            (Axis::Y, self.rect.y)
        } else if code & BOTTOM != 0 {
            (Axis::Y, self.rect.bottom())
        } else if code & LEFT != 0 {
            (Axis::X, self.rect.x)
        } else {
            (Axis::X, self.rect.right())
        };

        if approx_eq(axis.of(outside), boundary, BOUNDARY_EPSILON) {
            return Some(match axis {
                Axis::X => Point::new(boundary, outside.y),
                Axis::Y => Point::new(outside.x, boundary),
            });
        }

        match axis {
            Axis::X => {
                if dx == 0.0 {
                    return None;
                }
                let y = outside.y + dy * (boundary - outside.x) / dx;
                Some(Point::new(boundary, y))
            }
            Axis::Y => {
                if dy == 0.0 {
                    return None;
                }
                let x = outside.x + dx * (boundary - outside.y) / dy;
                Some(Point::new(x, boundary))
            }
        }
    }

    /// Clip a quadratic curve, returning the pieces inside the rectangle.
    #[must_use]
    pub fn clip_quadratic(&self, p0: Point, p1: Point, p2: Point) -> Clipped<QuadSeg> {
        self.clip_curve(QuadSeg::new(p0, p1, p2))
    }

    /// Clip a cubic curve, returning the pieces inside the rectangle.
    #[must_use]
    pub fn clip_cubic(&self, p0: Point, p1: Point, p2: Point, p3: Point) -> Clipped<CubicSeg> {
        self.clip_curve(CubicSeg::new(p0, p1, p2, p3))
    }

    /// Clip any bezier segment, returning the pieces inside the rectangle.
    pub fn clip_curve<S: BezierSegment>(&self, curve: S) -> Clipped<S> {
        let mut clipped = Clipped::new();

        if self.rect.is_empty() || !curve.control_points().iter().all(|pt| pt.is_finite()) {
            return clipped;
        }

        // the curve lies within the hull of its control points, so if they're all in, the curve is too
        if curve
            .control_points()
            .iter()
            .all(|&pt| self.rect.contains(pt))
        {
            clipped.push(curve);
            return clipped;
        }

        if !curve.bounds().overlaps(&self.rect) {
            return clipped;
        }

        for vertical in curve.monotonic_pieces(Axis::Y) {
            for piece in vertical.monotonic_pieces(Axis::X) {
                self.clip_monotonic(piece, &mut clipped);
            }
        }

        clipped
    }

    /// Clip a piece that is monotonic along both axes.
    fn clip_monotonic<S: BezierSegment>(&self, piece: S, clipped: &mut Clipped<S>) {
        let boundaries = [
            (Axis::X, self.rect.x),
            (Axis::X, self.rect.right()),
            (Axis::Y, self.rect.y),
            (Axis::Y, self.rect.bottom()),
        ];

        // at most three roots per boundary, even when rounding breaks monotonicity
        let mut crossings: ArrayVec<[f64; 12]> = ArrayVec::new();
        for &(axis, value) in boundaries.iter() {
            for t in piece.axis_crossings(axis, value) {
                if !crossings
                    .iter()
                    .any(|&existing| approx_eq(existing, t, CROSSING_EPSILON))
                {
                    crossings.push(t);
                }
            }
        }

        if crossings.is_empty() {
            if self.rect.contains(piece.start()) || self.rect.contains(piece.end()) {
                clipped.push(piece);
            }
            return;
        }

        crossings.sort_unstable_by_key(|&t| OrderedFloat(t));

        let pieces: ArrayVec<[S; 13]> = split_at_parameters(piece, &crossings);
        clipped.extend(
            pieces
                .into_iter()
                .filter(|sub| self.rect.contains(sub.eval(0.5))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn clipper() -> EdgeClipper {
        EdgeClipper::new(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    fn assert_inside<S: BezierSegment>(rect: Rect, pieces: &[S]) {
        let slack = Rect::new(
            rect.x - 1e-6,
            rect.y - 1e-6,
            rect.width + 2e-6,
            rect.height + 2e-6,
        );
        for piece in pieces {
            for i in 0..=16 {
                let pt = piece.eval(f64::from(i) / 16.0);
                assert!(slack.contains(pt), "{:?} escapes the clip", pt);
            }
        }
    }

    #[test]
    fn line_crossing_horizontally() {
        let seg = clipper()
            .clip_line(Point::new(-50.0, 50.0), Point::new(150.0, 50.0))
            .unwrap();
        assert_eq!(seg.from, Point::new(0.0, 50.0));
        assert_eq!(seg.to, Point::new(100.0, 50.0));
    }

    #[test]
    fn line_inside_is_unchanged() {
        let (a, b) = (Point::new(10.0, 20.0), Point::new(90.0, 70.0));
        assert_eq!(clipper().clip_line(a, b), Some(LineSeg::new(a, b)));
    }

    #[test]
    fn line_rejection() {
        let c = clipper();
        // both left
        assert_eq!(c.clip_line(Point::new(-10.0, 0.0), Point::new(-5.0, 100.0)), None);
        // both above
        assert_eq!(c.clip_line(Point::new(0.0, -10.0), Point::new(100.0, -1.0)), None);
        // both right
        assert_eq!(c.clip_line(Point::new(101.0, 0.0), Point::new(200.0, 50.0)), None);
        // both below
        assert_eq!(c.clip_line(Point::new(20.0, 150.0), Point::new(30.0, 101.0)), None);
        // cuts across the top-left corner region without entering
        assert_eq!(c.clip_line(Point::new(-10.0, 5.0), Point::new(5.0, -10.0)), None);
    }

    #[test]
    fn line_diagonal() {
        let seg = clipper()
            .clip_line(Point::new(-50.0, -50.0), Point::new(150.0, 150.0))
            .unwrap();
        assert_abs_diff_eq!(seg.from.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seg.from.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seg.to.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seg.to.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn line_vertical_and_degenerate() {
        let seg = clipper()
            .clip_line(Point::new(25.0, -40.0), Point::new(25.0, 40.0))
            .unwrap();
        assert_eq!(seg, LineSeg::new(Point::new(25.0, 0.0), Point::new(25.0, 40.0)));

        // a point is a zero-length line
        let pt = Point::new(50.0, 50.0);
        assert_eq!(clipper().clip_line(pt, pt), Some(LineSeg::new(pt, pt)));
        assert_eq!(clipper().clip_line(Point::new(-1.0, -1.0), Point::new(-1.0, -1.0)), None);
    }

    #[test]
    fn line_barely_outside_boundary() {
        // the outside endpoint is nudged onto the edge, the line is kept
        let seg = clipper()
            .clip_line(Point::new(-1e-20, 10.0), Point::new(0.0, 90.0))
            .unwrap();
        assert_eq!(seg, LineSeg::new(Point::new(0.0, 10.0), Point::new(0.0, 90.0)));

        let seg = clipper()
            .clip_line(Point::new(50.0, -1e-20), Point::new(60.0, 0.0))
            .unwrap();
        assert_eq!(seg, LineSeg::new(Point::new(50.0, 0.0), Point::new(60.0, 0.0)));

        let seg = clipper()
            .clip_line(Point::new(100.0 + 1e-12, 40.0), Point::new(50.0, 60.0))
            .unwrap();
        assert_eq!(seg, LineSeg::new(Point::new(100.0, 40.0), Point::new(50.0, 60.0)));

        // lines running just outside of an edge are still rejected
        assert_eq!(
            clipper().clip_line(Point::new(-1e-20, 10.0), Point::new(-1e-20, 90.0)),
            None
        );
    }

    #[test]
    fn empty_rect_clips_everything() {
        let c = EdgeClipper::new(Rect::EMPTY);
        assert_eq!(c.clip_line(Point::new(-5.0, 0.0), Point::new(5.0, 0.0)), None);
        assert!(c
            .clip_quadratic(Point::ORIGIN, Point::new(1.0, 1.0), Point::new(2.0, 0.0))
            .is_empty());
    }

    #[test]
    fn curve_inside_is_unchanged() {
        let q = QuadSeg::new(
            Point::new(10.0, 10.0),
            Point::new(50.0, 90.0),
            Point::new(90.0, 10.0),
        );
        let clipped = clipper().clip_quadratic(q.from, q.ctrl, q.to);
        assert_eq!(clipped.as_slice(), &[q]);
    }

    #[test]
    fn curve_outside_is_rejected() {
        let c = clipper();
        assert!(c
            .clip_quadratic(
                Point::new(150.0, 10.0),
                Point::new(200.0, 50.0),
                Point::new(150.0, 90.0)
            )
            .is_empty());
        assert!(c
            .clip_cubic(
                Point::new(-50.0, -50.0),
                Point::new(-10.0, -90.0),
                Point::new(-30.0, -10.0),
                Point::new(-80.0, -20.0)
            )
            .is_empty());
    }

    #[test]
    fn quadratic_through_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let q = QuadSeg::new(
            Point::new(-50.0, 50.0),
            Point::new(50.0, 10.0),
            Point::new(150.0, 50.0),
        );
        let clipped = clipper().clip_quadratic(q.from, q.ctrl, q.to);
        assert!(!clipped.is_empty());
        assert_inside(rect, clipped.as_slice());

        // the clipped pieces start and end on the left and right edges
        let first = clipped.first().unwrap();
        let last = clipped.last().unwrap();
        assert_abs_diff_eq!(first.from.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(last.to.x, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn flat_curve_is_not_rejected_by_its_bounding_box() {
        let clipped = clipper().clip_quadratic(
            Point::new(-50.0, 50.0),
            Point::new(50.0, 50.0),
            Point::new(150.0, 50.0),
        );
        assert!(!clipped.is_empty());
        assert_inside(Rect::new(0.0, 0.0, 100.0, 100.0), clipped.as_slice());
    }

    #[test]
    fn cubic_weaving_in_and_out() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        // dips below the bottom edge in the middle, so two separate pieces survive
        let clipped = clipper().clip_cubic(
            Point::new(10.0, 50.0),
            Point::new(30.0, 250.0),
            Point::new(70.0, 250.0),
            Point::new(90.0, 50.0),
        );
        assert!(clipped.len() >= 2);
        assert_inside(rect, clipped.as_slice());

        let top_of_dip = clipped
            .iter()
            .map(|piece| piece.to.y.max(piece.from.y))
            .fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(top_of_dip, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn cubic_s_curve() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let clipped = clipper().clip_cubic(
            Point::new(-50.0, -20.0),
            Point::new(250.0, 40.0),
            Point::new(-150.0, 60.0),
            Point::new(150.0, 120.0),
        );
        assert!(!clipped.is_empty());
        assert_inside(rect, clipped.as_slice());
    }

    #[test]
    fn outcodes() {
        let c = clipper();
        assert_eq!(c.outcode(Point::new(50.0, 50.0)), 0);
        assert_eq!(c.outcode(Point::new(-1.0, 50.0)), LEFT);
        assert_eq!(c.outcode(Point::new(101.0, -1.0)), RIGHT | TOP);
        assert_eq!(c.outcode(Point::new(50.0, 101.0)), BOTTOM);
        assert_eq!(c.outcode(Point::new(100.0, 0.0)), 0);
    }
}

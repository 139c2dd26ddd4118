// BSL 1.0 License

use super::{solve_cubic, solve_quadratic, Point, Rect, Roots};
use crate::util::in_unit_interval;
use core::iter::FusedIterator;
use tinyvec::ArrayVec;

#[cfg(not(test))]
use num_traits::Float;

/// One of the two coordinate axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Get the coordinate of `point` along this axis.
    #[inline]
    #[must_use]
    pub fn of(self, point: Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// A straight line between two points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LineSeg {
    /// The starting point.
    pub from: Point,
    /// The ending point.
    pub to: Point,
}

/// A quadratic bezier curve, with one control point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct QuadSeg {
    /// The starting point.
    pub from: Point,
    /// The control point.
    pub ctrl: Point,
    /// The ending point.
    pub to: Point,
}

/// A cubic bezier curve, with two control points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CubicSeg {
    /// The starting point.
    pub from: Point,
    /// The first control point.
    pub ctrl1: Point,
    /// The second control point.
    pub ctrl2: Point,
    /// The ending point.
    pub to: Point,
}

/// Behavior shared by the bezier segment types, which is what the edge clipper needs to work on them
/// generically.
pub trait BezierSegment: Copy + Default {
    /// The control points of the segment, in order, including both endpoints.
    fn control_points(&self) -> ArrayVec<[Point; 4]>;

    /// The point at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// Split the segment at `t` into two segments that exactly reproduce it.
    fn split(&self, t: f64) -> (Self, Self);

    /// The parameters in `(0, 1)` where the segment's coordinate along `axis` equals `value`.
    fn axis_crossings(&self, axis: Axis, value: f64) -> Roots;

    /// The parameters in `(0, 1)` where the segment changes direction along `axis`.
    fn extrema(&self, axis: Axis) -> Roots;

    /// The starting point.
    #[inline]
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The ending point.
    #[inline]
    fn end(&self) -> Point {
        self.eval(1.0)
    }

    /// A loose bounding box over the control points. It contains the curve, but is not tight.
    #[inline]
    fn bounds(&self) -> Rect {
        Rect::bounding(self.control_points()).unwrap_or(Rect::EMPTY)
    }

    /// Split the segment into pieces that are monotonic along `axis`.
    fn monotonic_pieces(&self, axis: Axis) -> ArrayVec<[Self; 3]> {
        split_at_parameters(*self, &self.extrema(axis))
    }

    /// Get an iterator over `segments` points evenly spaced in `t` along the curve. The starting point is not
    /// included, but the ending point is.
    #[inline]
    fn flattened(&self, segments: usize) -> Flattened<Self> {
        Flattened {
            segment: *self,
            count: segments,
            index: 0,
        }
    }
}

impl LineSeg {
    /// Create a new line segment.
    #[inline]
    #[must_use]
    pub const fn new(from: Point, to: Point) -> LineSeg {
        LineSeg { from, to }
    }

    /// The point at parameter `t`.
    #[inline]
    #[must_use]
    pub fn eval(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    /// The bounding box of the line.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_ltrb(
            self.from.x.min(self.to.x),
            self.from.y.min(self.to.y),
            self.from.x.max(self.to.x),
            self.from.y.max(self.to.y),
        )
    }

    /// The length of the line.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

impl QuadSeg {
    /// Create a new quadratic curve.
    #[inline]
    #[must_use]
    pub const fn new(from: Point, ctrl: Point, to: Point) -> QuadSeg {
        QuadSeg { from, ctrl, to }
    }

    /// Power-basis coefficients `(a, b, c)` of the curve along `axis`, such that the coordinate equals
    /// `a*t^2 + b*t + c`.
    #[inline]
    fn coefficients(&self, axis: Axis) -> (f64, f64, f64) {
        let (p0, p1, p2) = (axis.of(self.from), axis.of(self.ctrl), axis.of(self.to));
        (p0 - 2.0 * p1 + p2, 2.0 * (p1 - p0), p0)
    }
}

impl BezierSegment for QuadSeg {
    #[inline]
    fn control_points(&self) -> ArrayVec<[Point; 4]> {
        let mut points = ArrayVec::new();
        points.push(self.from);
        points.push(self.ctrl);
        points.push(self.to);
        points
    }

    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        self.from * (mt * mt) + self.ctrl * (2.0 * mt * t) + self.to * (t * t)
    }

    fn split(&self, t: f64) -> (QuadSeg, QuadSeg) {
        let p01 = self.from.lerp(self.ctrl, t);
        let p12 = self.ctrl.lerp(self.to, t);
        let mid = p01.lerp(p12, t);

        (
            QuadSeg::new(self.from, p01, mid),
            QuadSeg::new(mid, p12, self.to),
        )
    }

    #[inline]
    fn axis_crossings(&self, axis: Axis, value: f64) -> Roots {
        let (a, b, c) = self.coefficients(axis);
        solve_quadratic(a, b, c - value)
    }

    fn extrema(&self, axis: Axis) -> Roots {
        // the derivative 2a*t + b vanishes at t = -b / 2a
        let (a, b, _) = self.coefficients(axis);
        let mut roots = Roots::new();
        if a.abs() >= crate::ROOT_EPSILON {
            let t = -b / (2.0 * a);
            if in_unit_interval(t) {
                roots.push(t);
            }
        }
        roots
    }

    #[inline]
    fn start(&self) -> Point {
        self.from
    }

    #[inline]
    fn end(&self) -> Point {
        self.to
    }
}

impl CubicSeg {
    /// Create a new cubic curve.
    #[inline]
    #[must_use]
    pub const fn new(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> CubicSeg {
        CubicSeg {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Power-basis coefficients `(a, b, c, d)` of the curve along `axis`, such that the coordinate equals
    /// `a*t^3 + b*t^2 + c*t + d`.
    #[inline]
    fn coefficients(&self, axis: Axis) -> (f64, f64, f64, f64) {
        let (p0, p1, p2, p3) = (
            axis.of(self.from),
            axis.of(self.ctrl1),
            axis.of(self.ctrl2),
            axis.of(self.to),
        );
        (
            -p0 + 3.0 * p1 - 3.0 * p2 + p3,
            3.0 * p0 - 6.0 * p1 + 3.0 * p2,
            3.0 * (p1 - p0),
            p0,
        )
    }
}

impl BezierSegment for CubicSeg {
    #[inline]
    fn control_points(&self) -> ArrayVec<[Point; 4]> {
        ArrayVec::from([self.from, self.ctrl1, self.ctrl2, self.to])
    }

    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let (t2, mt2) = (t * t, mt * mt);
        self.from * (mt2 * mt)
            + self.ctrl1 * (3.0 * mt2 * t)
            + self.ctrl2 * (3.0 * mt * t2)
            + self.to * (t2 * t)
    }

    fn split(&self, t: f64) -> (CubicSeg, CubicSeg) {
        let p01 = self.from.lerp(self.ctrl1, t);
        let p12 = self.ctrl1.lerp(self.ctrl2, t);
        let p23 = self.ctrl2.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let mid = p012.lerp(p123, t);

        (
            CubicSeg::new(self.from, p01, p012, mid),
            CubicSeg::new(mid, p123, p23, self.to),
        )
    }

    #[inline]
    fn axis_crossings(&self, axis: Axis, value: f64) -> Roots {
        let (a, b, c, d) = self.coefficients(axis);
        solve_cubic(a, b, c, d - value)
    }

    #[inline]
    fn extrema(&self, axis: Axis) -> Roots {
        // derivative is 3a*t^2 + 2b*t + c
        let (a, b, c, _) = self.coefficients(axis);
        solve_quadratic(3.0 * a, 2.0 * b, c)
    }

    #[inline]
    fn start(&self) -> Point {
        self.from
    }

    #[inline]
    fn end(&self) -> Point {
        self.to
    }
}

/// Split `segment` at every parameter in `ts`, which must be sorted and lie in `(0, 1)`.
pub(crate) fn split_at_parameters<S: BezierSegment, A: tinyvec::Array<Item = S>>(
    segment: S,
    ts: &[f64],
) -> ArrayVec<A> {
    const MIN_PIECE: f64 = 1e-9;

    let mut pieces = ArrayVec::new();
    let mut rest = segment;
    let mut consumed = 0.0;

    for &t in ts {
        // the remainder covers [consumed, 1] of the original, so rescale t into its own parameter space
        let local = (t - consumed) / (1.0 - consumed);
        if !(local > MIN_PIECE && local < 1.0 - MIN_PIECE) {
            continue;
        }

        if pieces.len() + 1 >= A::CAPACITY {
            break;
        }

        let (head, tail) = rest.split(local);
        pieces.push(head);
        rest = tail;
        consumed = t;
    }

    pieces.push(rest);
    pieces
}

/// Iterator over evenly spaced points on a bezier segment, created by [`BezierSegment::flattened`].
#[derive(Debug, Clone)]
pub struct Flattened<S> {
    segment: S,
    count: usize,
    index: usize,
}

impl<S: BezierSegment> Iterator for Flattened<S> {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }

        self.index += 1;
        if self.index == self.count {
            // land on the endpoint exactly, so consecutive segments connect without gaps
            Some(self.segment.end())
        } else {
            #[allow(clippy::cast_precision_loss)]
            let t = self.index as f64 / self.count as f64;
            Some(self.segment.eval(t))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<S: BezierSegment> ExactSizeIterator for Flattened<S> {}

impl<S: BezierSegment> FusedIterator for Flattened<S> {}

impl From<lyon_geom::LineSegment<f64>> for LineSeg {
    #[inline]
    fn from(l: lyon_geom::LineSegment<f64>) -> LineSeg {
        LineSeg::new(l.from.into(), l.to.into())
    }
}

impl From<LineSeg> for lyon_geom::LineSegment<f64> {
    #[inline]
    fn from(l: LineSeg) -> lyon_geom::LineSegment<f64> {
        lyon_geom::LineSegment {
            from: l.from.into(),
            to: l.to.into(),
        }
    }
}

impl From<lyon_geom::QuadraticBezierSegment<f64>> for QuadSeg {
    #[inline]
    fn from(q: lyon_geom::QuadraticBezierSegment<f64>) -> QuadSeg {
        QuadSeg::new(q.from.into(), q.ctrl.into(), q.to.into())
    }
}

impl From<QuadSeg> for lyon_geom::QuadraticBezierSegment<f64> {
    #[inline]
    fn from(q: QuadSeg) -> lyon_geom::QuadraticBezierSegment<f64> {
        lyon_geom::QuadraticBezierSegment {
            from: q.from.into(),
            ctrl: q.ctrl.into(),
            to: q.to.into(),
        }
    }
}

impl From<lyon_geom::CubicBezierSegment<f64>> for CubicSeg {
    #[inline]
    fn from(c: lyon_geom::CubicBezierSegment<f64>) -> CubicSeg {
        CubicSeg::new(c.from.into(), c.ctrl1.into(), c.ctrl2.into(), c.to.into())
    }
}

impl From<CubicSeg> for lyon_geom::CubicBezierSegment<f64> {
    #[inline]
    fn from(c: CubicSeg) -> lyon_geom::CubicBezierSegment<f64> {
        lyon_geom::CubicBezierSegment {
            from: c.from.into(),
            ctrl1: c.ctrl1.into(),
            ctrl2: c.ctrl2.into(),
            to: c.to.into(),
        }
    }
}

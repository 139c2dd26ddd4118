// BSL 1.0 License

use core::ops;

#[cfg(not(test))]
use num_traits::Float;

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// The point at `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Linearly interpolate between this point and `other`. A `t` of zero yields this point, and a `t` of one
    /// yields `other`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Get the distance from this point to another point.
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// The Z component of the cross product of the two points, treated as vectors.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Whether both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl ops::Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl ops::Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl ops::Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, scale: f64) -> Point {
        Point::new(self.x * scale, self.y * scale)
    }
}

impl ops::Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<lyon_geom::Point<f64>> for Point {
    #[inline]
    fn from(pt: lyon_geom::Point<f64>) -> Point {
        Point::new(pt.x, pt.y)
    }
}

impl From<Point> for lyon_geom::Point<f64> {
    #[inline]
    fn from(pt: Point) -> lyon_geom::Point<f64> {
        lyon_geom::point(pt.x, pt.y)
    }
}

impl From<lyon_geom::Point<f32>> for Point {
    #[inline]
    fn from(pt: lyon_geom::Point<f32>) -> Point {
        Point::new(f64::from(pt.x), f64::from(pt.y))
    }
}

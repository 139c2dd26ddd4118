// BSL 1.0 License

use super::Point;
use alloc::vec::Vec;
use lyon_path::PathEvent;

/// One command in a path. A path is a sequence of these, usually produced by a path builder.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathElement {
    /// Begin a new subpath at `point`, without drawing anything.
    MoveTo {
        /// The new current point.
        point: Point,
    },
    /// A straight line from the current point to `point`.
    LineTo {
        /// The end of the line.
        point: Point,
    },
    /// A quadratic bezier curve from the current point to `point`.
    QuadTo {
        /// The control point.
        control: Point,
        /// The end of the curve.
        point: Point,
    },
    /// A cubic bezier curve from the current point to `point`.
    CubicTo {
        /// The first control point.
        control1: Point,
        /// The second control point.
        control2: Point,
        /// The end of the curve.
        point: Point,
    },
    /// Connect the current point back to the start of the subpath.
    Close,
}

impl PathElement {
    /// The point this element leaves the pen at, if it names one.
    #[inline]
    #[must_use]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathElement::MoveTo { point }
            | PathElement::LineTo { point }
            | PathElement::QuadTo { point, .. }
            | PathElement::CubicTo { point, .. } => Some(point),
            PathElement::Close => None,
        }
    }

    /// Build path elements from `lyon_path` events, such as those produced by iterating over a
    /// `lyon_path::Path`.
    ///
    /// Each `Begin` becomes a `MoveTo`, and each `End` that closes its subpath becomes a `Close`.
    pub fn from_events<I: IntoIterator<Item = PathEvent>>(events: I) -> Vec<PathElement> {
        events
            .into_iter()
            .filter_map(|event| match event {
                PathEvent::Begin { at } => Some(PathElement::MoveTo { point: at.into() }),
                PathEvent::Line { to, .. } => Some(PathElement::LineTo { point: to.into() }),
                PathEvent::Quadratic { ctrl, to, .. } => Some(PathElement::QuadTo {
                    control: ctrl.into(),
                    point: to.into(),
                }),
                PathEvent::Cubic {
                    ctrl1, ctrl2, to, ..
                } => Some(PathElement::CubicTo {
                    control1: ctrl1.into(),
                    control2: ctrl2.into(),
                    point: to.into(),
                }),
                PathEvent::End { close: true, .. } => Some(PathElement::Close),
                PathEvent::End { close: false, .. } => None,
            })
            .collect()
    }

    /// Convenience for building a closed rectangular path.
    #[must_use]
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Vec<PathElement> {
        alloc::vec![
            PathElement::MoveTo {
                point: Point::new(x, y)
            },
            PathElement::LineTo {
                point: Point::new(x + width, y)
            },
            PathElement::LineTo {
                point: Point::new(x + width, y + height)
            },
            PathElement::LineTo {
                point: Point::new(x, y + height)
            },
            PathElement::Close,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon_path::{math::point, Path};

    #[test]
    fn converts_lyon_events() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.quadratic_bezier_to(point(15.0, 5.0), point(10.0, 10.0));
        builder.cubic_bezier_to(point(8.0, 12.0), point(2.0, 12.0), point(0.0, 10.0));
        builder.end(true);
        builder.begin(point(20.0, 20.0));
        builder.line_to(point(30.0, 30.0));
        builder.end(false);
        let path = builder.build();

        let elements = PathElement::from_events(path.iter());
        assert_eq!(
            elements,
            alloc::vec![
                PathElement::MoveTo {
                    point: Point::new(0.0, 0.0)
                },
                PathElement::LineTo {
                    point: Point::new(10.0, 0.0)
                },
                PathElement::QuadTo {
                    control: Point::new(15.0, 5.0),
                    point: Point::new(10.0, 10.0)
                },
                PathElement::CubicTo {
                    control1: Point::new(8.0, 12.0),
                    control2: Point::new(2.0, 12.0),
                    point: Point::new(0.0, 10.0)
                },
                PathElement::Close,
                PathElement::MoveTo {
                    point: Point::new(20.0, 20.0)
                },
                PathElement::LineTo {
                    point: Point::new(30.0, 30.0)
                },
            ]
        );
    }

    #[test]
    fn end_points() {
        let elements = PathElement::rectangle(1.0, 2.0, 3.0, 4.0);
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[2].end_point(), Some(Point::new(4.0, 6.0)));
        assert_eq!(elements[4].end_point(), None);
    }
}

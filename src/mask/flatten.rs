// MIT/Apache2 License

use crate::{BezierSegment, CubicSeg, PathElement, Point, QuadSeg};

/// The number of lines every quadratic curve is broken into.
pub const QUAD_SEGMENTS: usize = 10;
/// The number of lines every cubic curve is broken into.
pub const CUBIC_SEGMENTS: usize = 16;

/// Flatten a path into one polyline per subpath.
///
/// Curves are evaluated at evenly spaced parameters, with no regard to their size on screen. Each polyline
/// starts at the subpath's first point; subpaths that never get past their first point are dropped.
pub(crate) fn flatten(elements: &[PathElement]) -> Vec<Vec<Point>> {
    let mut subpaths = vec![];
    let mut current: Vec<Point> = vec![];
    let mut pen = Point::ORIGIN;

    for element in elements {
        match *element {
            PathElement::MoveTo { point } => {
                finish_subpath(&mut subpaths, &mut current);
                current.push(point);
                pen = point;
            }
            PathElement::LineTo { point } => {
                begin_if_needed(&mut current, pen);
                current.push(point);
                pen = point;
            }
            PathElement::QuadTo { control, point } => {
                begin_if_needed(&mut current, pen);
                current.extend(QuadSeg::new(pen, control, point).flattened(QUAD_SEGMENTS));
                pen = point;
            }
            PathElement::CubicTo {
                control1,
                control2,
                point,
            } => {
                begin_if_needed(&mut current, pen);
                current.extend(
                    CubicSeg::new(pen, control1, control2, point).flattened(CUBIC_SEGMENTS),
                );
                pen = point;
            }
            PathElement::Close => {
                if let Some(&first) = current.first() {
                    if current.last() != Some(&first) {
                        current.push(first);
                    }
                    // drawing continues from where the closed subpath began
                    pen = first;
                }
                finish_subpath(&mut subpaths, &mut current);
            }
        }
    }

    finish_subpath(&mut subpaths, &mut current);
    subpaths
}

#[inline]
fn begin_if_needed(current: &mut Vec<Point>, pen: Point) {
    if current.is_empty() {
        current.push(pen);
    }
}

#[inline]
fn finish_subpath(subpaths: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        subpaths.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

// MIT/Apache2 License

use crate::Point;

/// A non-horizontal edge of a flattened path, oriented from top to bottom.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Edge {
    /// The highest point (lowest Y) on this edge.
    top: Point,
    /// The Y coordinate of the lowest point on this edge.
    bottom: f64,
    /// Change in X for every unit step down in Y.
    dx_dy: f64,
    /// The direction the path travelled along this edge.
    direction: Direction,
}

/// The direction that an `Edge` moves in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Direction {
    /// The path moved down the screen.
    Down,
    /// The path moved up the screen.
    Up,
}

impl Edge {
    /// Create a new `Edge` between two points. Returns `None` for horizontal edges, which never cross a
    /// scanline.
    pub(crate) fn new(p1: Point, p2: Point) -> Option<Edge> {
        if p1.y == p2.y || !p1.is_finite() || !p2.is_finite() {
            return None;
        }

        let (top, bottom, direction) = if p1.y < p2.y {
            (p1, p2, Direction::Down)
        } else {
            (p2, p1, Direction::Up)
        };

        Some(Edge {
            top,
            bottom: bottom.y,
            dx_dy: (bottom.x - top.x) / (bottom.y - top.y),
            direction,
        })
    }

    /// Where this edge crosses the horizontal line at `y`, if it does.
    ///
    /// The span is half-open, covering the top but not the bottom, so a scanline passing exactly through a
    /// vertex shared by two connected edges is counted once rather than twice.
    #[inline]
    pub(crate) fn crossing(&self, y: f64) -> Option<f64> {
        if y >= self.top.y && y < self.bottom {
            Some(self.top.x + (y - self.top.y) * self.dx_dy)
        } else {
            None
        }
    }

    /// The contribution of this edge to the winding number.
    #[inline]
    pub(crate) fn winding(&self) -> i32 {
        match self.direction {
            Direction::Down => 1,
            Direction::Up => -1,
        }
    }
}

/// Build the edge list for a set of flattened subpaths. Every subpath is treated as closed.
pub(crate) fn build_edges(subpaths: &[Vec<Point>]) -> Vec<Edge> {
    subpaths
        .iter()
        .flat_map(|points| {
            let closing = match (points.last(), points.first()) {
                (Some(&last), Some(&first)) => Edge::new(last, first),
                _ => None,
            };

            points
                .windows(2)
                .filter_map(|pair| Edge::new(pair[0], pair[1]))
                .chain(closing)
        })
        .collect()
}

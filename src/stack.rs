// MIT/Apache2 License

use crate::{
    mask::{scale_alpha, FULL_COVERAGE},
    FillRule, MaskClipper, PathElement, Point, Rect,
};

/// The stack of clip regions active on a drawing surface.
///
/// Pushing a clip narrows the visible area, and popping it restores the area that was visible before. The
/// stack is meant to be driven alongside a drawing context's save and restore operations; it is not
/// synchronized, so a surface that is shared between threads needs to guard its stack.
#[derive(Debug, Default)]
pub struct ClipStack {
    entries: Vec<ClipEntry>,
    bounds: Rect,
}

#[derive(Debug)]
struct ClipEntry {
    /// The bounds that were active before this entry was pushed.
    saved_bounds: Rect,
    /// The mask for this entry, if it was created from a path.
    mask: Option<MaskClipper>,
}

impl ClipStack {
    /// Create a new clip stack for a surface covering `bounds`.
    #[inline]
    #[must_use]
    pub fn new(bounds: Rect) -> ClipStack {
        ClipStack {
            entries: vec![],
            bounds,
        }
    }

    /// Clip to a rectangle.
    pub fn push_rect(&mut self, rect: Rect) {
        let saved_bounds = self.bounds;
        self.bounds = saved_bounds.intersect(&rect);
        self.entries.push(ClipEntry {
            saved_bounds,
            mask: None,
        });

        log::trace!(
            "Pushed rectangle clip, depth is now {}, bounds are {:?}",
            self.depth(),
            self.bounds
        );
        if self.bounds.is_empty() && !saved_bounds.is_empty() {
            log::debug!("Rectangle clip {:?} leaves nothing visible", rect);
        }
    }

    /// Clip to the inside of a path, using the even-odd fill rule.
    ///
    /// The path is only rasterized over the currently visible bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is currently visible. The stack is left unchanged in that case.
    #[inline]
    pub fn push_path(&mut self, elements: &[PathElement], anti_alias: bool) -> crate::Result {
        self.push_path_with_fill_rule(elements, anti_alias, FillRule::EvenOdd)
    }

    /// Clip to the inside of a path, using the given fill rule.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is currently visible. The stack is left unchanged in that case.
    pub fn push_path_with_fill_rule(
        &mut self,
        elements: &[PathElement],
        anti_alias: bool,
        fill_rule: FillRule,
    ) -> crate::Result {
        let mask = MaskClipper::with_fill_rule(elements, self.bounds, anti_alias, fill_rule)?;

        let saved_bounds = self.bounds;
        self.bounds = saved_bounds.intersect(&mask.bounds());
        self.entries.push(ClipEntry {
            saved_bounds,
            mask: Some(mask),
        });

        log::trace!(
            "Pushed path clip, depth is now {}, bounds are {:?}",
            self.depth(),
            self.bounds
        );
        Ok(())
    }

    /// Remove the most recently pushed clip. Does nothing if the stack is empty.
    pub fn pop(&mut self) {
        match self.entries.pop() {
            Some(entry) => {
                self.bounds = entry.saved_bounds;
                log::trace!(
                    "Popped clip, depth is now {}, bounds are {:?}",
                    self.depth(),
                    self.bounds
                );
            }
            None => log::trace!("Ignoring pop of an empty clip stack"),
        }
    }

    /// The area currently visible.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The number of clips currently pushed.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing at all is visible.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Remove every clip and start over with `bounds` as the visible area.
    pub fn reset(&mut self, bounds: Rect) {
        self.entries.clear();
        self.bounds = bounds;
    }

    /// Whether any part of the pixel at `(x, y)` is visible.
    #[must_use]
    pub fn is_visible(&self, x: f64, y: f64) -> bool {
        if !self.bounds.contains(Point::new(x, y)) {
            return false;
        }

        self.masks().all(|mask| mask.coverage(x, y) != 0)
    }

    /// How much of the pixel at `(x, y)` is visible, from zero for none of it to 255 for all of it.
    #[must_use]
    pub fn coverage(&self, x: f64, y: f64) -> u8 {
        if !self.bounds.contains(Point::new(x, y)) {
            return 0;
        }

        let mut coverage = FULL_COVERAGE;
        for mask in self.masks() {
            coverage = scale_alpha(coverage, mask.coverage(x, y));
            if coverage == 0 {
                break;
            }
        }
        coverage
    }

    /// Scale `src_alpha` by how much of the pixel at `(x, y)` is visible.
    #[inline]
    #[must_use]
    pub fn apply_coverage(&self, x: f64, y: f64, src_alpha: u8) -> u8 {
        scale_alpha(src_alpha, self.coverage(x, y))
    }

    /// The masks on the stack, from bottom to top.
    #[inline]
    fn masks(&self) -> impl Iterator<Item = &MaskClipper> + '_ {
        self.entries.iter().filter_map(|entry| entry.mask.as_ref())
    }
}

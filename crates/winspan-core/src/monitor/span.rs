//! Tallest-row selection over monitor work areas.
//!
//! The target region is the union of every work area that shares the largest
//! height seen. Shorter monitors never contribute, even when adjacent. This is
//! a horizontal heuristic: stacked layouts are not considered.

use crate::geometry::Rect;

/// Running state of the tallest-row fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanAccumulator {
    largest_height: Option<i32>,
    span: Rect,
}

impl SpanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one work area into the span.
    ///
    /// A strictly taller area restarts the span at its own bounds. An area of
    /// equal height (including the one that just restarted it) widens the span
    /// to cover its left and right edges.
    pub fn push(mut self, work_area: &Rect) -> Self {
        let height = work_area.height();

        let dominates = match self.largest_height {
            None => true,
            Some(largest) => height > largest,
        };
        if dominates {
            self.largest_height = Some(height);
            self.span = Rect::new(work_area.left, work_area.top, work_area.left, work_area.bottom);
        }

        if self.span.has_height(height) {
            self.span.extend_horizontally(work_area);
        }

        self
    }

    pub fn largest_height(&self) -> Option<i32> {
        self.largest_height
    }

    /// The finished span, or `None` if nothing was folded in.
    pub fn finish(self) -> Option<Rect> {
        self.largest_height.map(|_| self.span)
    }
}

/// Fold a sequence of work areas into the target region.
pub fn aggregate_work_areas<'a, I>(work_areas: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    work_areas
        .into_iter()
        .fold(SpanAccumulator::new(), SpanAccumulator::push)
        .finish()
}

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Progress, Rect, Viewport},
    scroll::offset::{Intersection, ScrollOffset},
};

/// What a tracker measures progress through.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollTarget {
    /// The whole scrollable document.
    Document,
    /// An element's bounds, in document coordinates.
    Element(Rect),
}

/// The measured inputs of one scroll or resize tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub document_height: f64,
}

impl ScrollState {
    pub fn new(scroll_y: f64, viewport: Viewport, document_height: f64) -> Self {
        Self {
            scroll_y,
            viewport,
            document_height,
        }
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

/// Maps scroll position to normalized progress through a target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollTracker {
    pub target: ScrollTarget,
    #[serde(default)]
    pub offset: ScrollOffset,
}

impl ScrollTracker {
    pub fn document() -> Self {
        Self {
            target: ScrollTarget::Document,
            offset: ScrollOffset::default(),
        }
    }

    pub fn element(bounds: Rect, offset: ScrollOffset) -> Self {
        Self {
            target: ScrollTarget::Element(bounds),
            offset,
        }
    }

    /// Scroll offsets at which progress reads `0` and `1`.
    pub fn extent(&self, state: &ScrollState) -> (f64, f64) {
        match self.target {
            ScrollTarget::Document => (0.0, state.document_height - state.viewport.height),
            ScrollTarget::Element(bounds) => (
                meet_offset(bounds, self.offset.enter, state.viewport),
                meet_offset(bounds, self.offset.exit, state.viewport),
            ),
        }
    }

    /// Progress at `state`, clamped into `[0, 1]`. A zero or inverted extent reads `0`.
    pub fn progress(&self, state: &ScrollState) -> Progress {
        let (start, end) = self.extent(state);
        let span = end - start;
        if !(span.is_finite() && span > 0.0) {
            return Progress::ZERO;
        }
        Progress::new((state.scroll_y - start) / span)
    }
}

// Scroll offset at which the element edge meets the viewport edge.
fn meet_offset(bounds: Rect, at: Intersection, viewport: Viewport) -> f64 {
    bounds.y0 + at.target.fraction() * bounds.height() - at.container.fraction() * viewport.height
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;

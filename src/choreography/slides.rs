use serde::{Deserialize, Serialize};

use crate::{
    choreography::{channel::Channel, stagger::Window, style::Property},
    foundation::{
        core::Progress,
        error::{CurtainError, CurtainResult},
    },
};

/// Equal, non-overlapping slide windows over a section's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    count: usize,
}

impl SlideDeck {
    pub fn new(count: usize) -> CurtainResult<Self> {
        if count == 0 {
            return Err(CurtainError::animation("slide deck needs at least one slide"));
        }
        Ok(Self { count })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Window of slide `index`; `None` past the end.
    pub fn window(&self, index: usize) -> Option<Window> {
        (index < self.count).then(|| {
            let n = self.count as f64;
            Window {
                start: index as f64 / n,
                end: (index + 1) as f64 / n,
            }
        })
    }

    /// `floor(progress * count)`, with progress `1` landing on the last slide.
    pub fn active_index(&self, progress: Progress) -> usize {
        let idx = (progress.get() * self.count as f64).floor() as usize;
        idx.min(self.count - 1)
    }

    /// Symmetric trapezoid opacity for slide `index`: fade in over the first quarter of its
    /// window, hold, fade out over the last quarter.
    pub fn opacity_channel(&self, index: usize) -> CurtainResult<Channel> {
        let window = self.window(index).ok_or_else(|| {
            CurtainError::animation(format!(
                "slide {index} out of range for a deck of {}",
                self.count
            ))
        })?;
        let stops = window.trapezoid(window.len() / 4.0);
        Channel::number(Property::Opacity, &stops, &[0.0, 1.0, 1.0, 0.0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/slides.rs"]
mod tests;

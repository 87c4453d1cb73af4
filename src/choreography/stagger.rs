use serde::{Deserialize, Serialize};

use crate::foundation::error::{CurtainError, CurtainResult};

/// How far apart consecutive children start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepRule {
    /// `step = span / count`.
    Span(f64),
    /// Constant step regardless of count.
    Fixed(f64),
}

/// Per-child progress windows for sequenced reveals.
///
/// Child `i` starts at `base + i * step` and stays active for `window`. A base outside `[0, 1]`
/// is pulled inside, and when the last window would spill past 1 the step shrinks so every
/// window keeps its length and the starts keep their order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base: f64,
    pub step: StepRule,
    pub window: f64,
}

/// A progress sub-range `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Stagger {
    pub const fn span(base: f64, span: f64, window: f64) -> Self {
        Self {
            base,
            step: StepRule::Span(span),
            window,
        }
    }

    pub const fn fixed(base: f64, step: f64, window: f64) -> Self {
        Self {
            base,
            step: StepRule::Fixed(step),
            window,
        }
    }

    pub fn step(&self, count: usize) -> f64 {
        match self.step {
            StepRule::Span(span) => span / count.max(1) as f64,
            StepRule::Fixed(step) => step,
        }
    }

    pub fn windows(&self, count: usize) -> CurtainResult<Vec<Window>> {
        if count == 0 {
            return Err(CurtainError::animation("stagger needs at least one child"));
        }
        let raw_step = match self.step {
            StepRule::Span(v) | StepRule::Fixed(v) => v,
        };
        if ![self.base, raw_step, self.window].iter().all(|v| v.is_finite()) {
            return Err(CurtainError::animation("stagger parameters must be finite"));
        }
        if self.window <= 0.0 {
            return Err(CurtainError::animation(format!(
                "stagger window must be > 0, got {}",
                self.window
            )));
        }
        if raw_step < 0.0 {
            return Err(CurtainError::animation("stagger step must be >= 0"));
        }

        let len = self.window.min(1.0);
        let base = self.base.clamp(0.0, 1.0 - len);
        let mut step = self.step(count);
        if count > 1 {
            let room = 1.0 - len - base;
            step = step.min(room / (count - 1) as f64);
        }
        Ok((0..count)
            .map(|i| {
                let start = (base + i as f64 * step).min(1.0 - len);
                Window {
                    start,
                    end: (start + len).min(1.0),
                }
            })
            .collect())
    }
}

impl Window {
    pub fn new(start: f64, end: f64) -> CurtainResult<Self> {
        if !(start.is_finite() && end.is_finite()) || start < 0.0 || end > 1.0 || end <= start {
            return Err(CurtainError::animation(format!(
                "window [{start}, {end}] must be a non-empty range inside [0, 1]"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, progress: f64) -> bool {
        progress >= self.start && progress <= self.end
    }

    /// `[start, end]`, for a rise from one value to another.
    pub fn ramp(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    /// `[start, start + r, end - r, end]` with `r` capped at half the window, for
    /// fade-in, hold, fade-out.
    pub fn trapezoid(&self, ramp: f64) -> [f64; 4] {
        let r = ramp.clamp(0.0, self.len() / 2.0);
        let rise = (self.start + r).min(self.end);
        let fall = (self.end - r).max(rise);
        [self.start, rise, fall, self.end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/stagger.rs"]
mod tests;

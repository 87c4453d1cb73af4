use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        ease::Ease,
        value::{Length, Lerp},
    },
    foundation::{
        core::Viewport,
        error::{CurtainError, CurtainResult},
        math::segment_fraction,
    },
};

/// A piecewise keyframe table over progress: `stops[i]` maps to `values[i]`.
///
/// Tables are validated on construction (and on deserialization), so sampling never fails:
/// at least two stops, one value per stop, stops finite, inside `[0, 1]` and sorted ascending.
/// Equal neighbouring stops are allowed and act as a discrete jump.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "KeyframesDef<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Keyframes<T> {
    stops: Vec<f64>,
    values: Vec<T>,
    ease: Ease,
}

#[derive(Deserialize)]
struct KeyframesDef<T> {
    stops: Vec<f64>,
    values: Vec<T>,
    #[serde(default)]
    ease: Ease,
}

impl<T> TryFrom<KeyframesDef<T>> for Keyframes<T> {
    type Error = CurtainError;

    fn try_from(def: KeyframesDef<T>) -> CurtainResult<Self> {
        Ok(Self::new(def.stops, def.values)?.with_ease(def.ease))
    }
}

/// Where a progress value falls inside a stop table.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Located {
    /// Exactly on (or clamped to) a stop's value.
    At(usize),
    /// Inside segment `[lo, lo + 1]` at eased fraction `t`.
    Between { lo: usize, t: f64 },
}

impl<T> Keyframes<T> {
    pub fn new(stops: Vec<f64>, values: Vec<T>) -> CurtainResult<Self> {
        validate_table(&stops, values.len())?;
        Ok(Self {
            stops,
            values,
            ease: Ease::Linear,
        })
    }

    /// Ease applied inside every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stops(&self) -> &[f64] {
        &self.stops
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Same stops with every value transformed.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Keyframes<U> {
        Keyframes {
            stops: self.stops.clone(),
            values: self.values.iter().map(f).collect(),
            ease: self.ease,
        }
    }

    fn locate(&self, progress: f64) -> Located {
        locate(&self.stops, progress, self.ease)
    }
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Sample at a raw progress value; values outside the table clamp to its ends.
    pub fn sample(&self, progress: f64) -> T {
        match self.locate(progress) {
            Located::At(i) => self.values[i].clone(),
            Located::Between { lo, t } => T::lerp(&self.values[lo], &self.values[lo + 1], t),
        }
    }
}

impl Keyframes<Length> {
    /// Sample at a raw progress value. A segment whose ends use different units is resolved to
    /// px against `viewport`.
    pub fn sample_in(&self, progress: f64, viewport: Viewport) -> Length {
        match self.locate(progress) {
            Located::At(i) => self.values[i],
            Located::Between { lo, t } => {
                Length::lerp_in(self.values[lo], self.values[lo + 1], t, viewport)
            }
        }
    }
}

/// Interpolate `outputs` over `breakpoints` at `progress`.
///
/// The table is checked on every call; prefer building a [`Keyframes`] once when the same table
/// is sampled every frame.
pub fn interpolate<T>(progress: f64, breakpoints: &[f64], outputs: &[T]) -> CurtainResult<T>
where
    T: Lerp + Clone,
{
    validate_table(breakpoints, outputs.len())?;
    Ok(match locate(breakpoints, progress, Ease::Linear) {
        Located::At(i) => outputs[i].clone(),
        Located::Between { lo, t } => T::lerp(&outputs[lo], &outputs[lo + 1], t),
    })
}

fn validate_table(stops: &[f64], value_count: usize) -> CurtainResult<()> {
    if stops.len() < 2 {
        return Err(CurtainError::animation(format!(
            "keyframes need at least 2 stops, got {}",
            stops.len()
        )));
    }
    if stops.len() != value_count {
        return Err(CurtainError::animation(format!(
            "keyframes have {} stops but {} values",
            stops.len(),
            value_count
        )));
    }
    if let Some(bad) = stops.iter().find(|s| !s.is_finite() || **s < 0.0 || **s > 1.0) {
        return Err(CurtainError::animation(format!(
            "keyframe stop {bad} is outside [0, 1]"
        )));
    }
    if !stops.windows(2).all(|w| w[0] <= w[1]) {
        return Err(CurtainError::animation(
            "keyframe stops must be sorted ascending",
        ));
    }
    Ok(())
}

fn locate(stops: &[f64], progress: f64, ease: Ease) -> Located {
    let last = stops.len() - 1;
    if progress.is_nan() || progress <= stops[0] {
        return Located::At(0);
    }
    if progress >= stops[last] {
        return Located::At(last);
    }

    // stops[0] < progress < stops[last], so 1 <= hi <= last.
    let hi = stops.partition_point(|s| *s <= progress);
    let lo = hi - 1;
    let t = segment_fraction(progress, stops[lo], stops[hi]);
    if t == 0.0 {
        return Located::At(lo);
    }
    Located::Between {
        lo,
        t: ease.apply(t),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;

use crate::{
    animation::ease::Ease,
    foundation::{core::Viewport, math::lerp},
};

/// Landing "start" jump duration.
pub const DEFAULT_DURATION_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
    ease: Ease,
}

impl Tween {
    fn t(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    fn sample(&self, now_ms: u64) -> f64 {
        if self.t(now_ms) >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(self.t(now_ms)))
    }
}

/// At most one in-flight scroll animation; starting another supersedes it.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroll {
    tween: Option<Tween>,
    duration_ms: u64,
    ease: Ease,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, Ease::OutExpo)
    }
}

impl SmoothScroll {
    pub fn new(duration_ms: u64, ease: Ease) -> Self {
        Self {
            tween: None,
            duration_ms: duration_ms.max(1),
            ease,
        }
    }

    /// Animate towards `to`. If a tween is running it is replaced, and the new one starts from
    /// wherever the old one was at `now_ms` rather than from `current_y`.
    pub fn start(&mut self, now_ms: u64, current_y: f64, to: f64) {
        let from = match &self.tween {
            Some(tween) => tween.sample(now_ms),
            None => current_y,
        };
        self.tween = Some(Tween {
            from,
            to,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
            ease: self.ease,
        });
    }

    /// Scroll one viewport down from the landing section.
    pub fn start_from_landing(&mut self, now_ms: u64, current_y: f64, viewport: Viewport) {
        self.start(now_ms, current_y, viewport.height);
    }

    /// Position at `now_ms`, or `None` when idle. A finished tween yields its target once and
    /// then goes idle.
    pub fn sample(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let y = tween.sample(now_ms);
        if tween.t(now_ms) >= 1.0 {
            self.tween = None;
        }
        Some(y)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.tween.is_none_or(|t| t.t(now_ms) >= 1.0)
    }

    pub fn target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/smooth_scroll.rs"]
mod tests;

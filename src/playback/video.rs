use crate::playback::media::{MediaElement, MediaHandle, PlaybackState};

/// Visible fraction below which a playing video pauses itself.
pub const MIN_VISIBLE_RATIO: f64 = 0.5;

/// Inline video controls: starts muted, pauses when scrolled mostly out of view.
#[derive(Debug)]
pub struct VideoPlayer<E> {
    media: MediaHandle<E>,
    state: PlaybackState,
    muted: bool,
    progress_pct: f64,
}

impl<E: MediaElement> VideoPlayer<E> {
    pub fn new(mut media: MediaHandle<E>, src: &str) -> Self {
        let el = media.element_mut();
        el.set_source(src);
        el.set_muted(true);
        Self {
            media,
            state: PlaybackState::Paused,
            muted: true,
            progress_pct: 0.0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Playback position in percent, as of the last time update.
    pub fn progress_pct(&self) -> f64 {
        self.progress_pct
    }

    pub fn element(&self) -> &E {
        self.media.element()
    }

    pub fn element_mut(&mut self) -> &mut E {
        self.media.element_mut()
    }

    pub fn toggle_play(&mut self) -> PlaybackState {
        self.state = self.state.toggle(self.media.element_mut());
        self.state
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.media.element_mut().set_muted(self.muted);
        self.muted
    }

    /// Recompute progress from the element clock; an unknown or zero duration reads `0`.
    pub fn on_time_update(&mut self) -> f64 {
        let el = self.media.element();
        self.progress_pct = match el.duration() {
            Some(d) if d.is_finite() && d > 0.0 => (el.current_time() / d * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        };
        self.progress_pct
    }

    pub fn on_ended(&mut self) {
        self.state = PlaybackState::Paused;
        self.progress_pct = 100.0;
    }

    /// Intersection update from the host.
    pub fn on_visibility(&mut self, visible_ratio: f64) {
        if self.state.is_playing() && visible_ratio < MIN_VISIBLE_RATIO {
            self.state = PlaybackState::stop(self.media.element_mut());
            tracing::debug!(visible_ratio, "video paused out of view");
        }
    }

    pub fn release(self) -> E {
        self.media.release()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/video.rs"]
mod tests;

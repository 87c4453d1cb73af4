use serde::{Deserialize, Serialize};

/// The host refused to start playback (typically an autoplay policy).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("playback rejected: {reason}")]
pub struct PlaybackRejected {
    pub reason: String,
}

impl PlaybackRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The subset of an audio/video element the playback controllers drive.
pub trait MediaElement {
    fn play(&mut self) -> Result<(), PlaybackRejected>;
    fn pause(&mut self);
    fn is_paused(&self) -> bool;

    fn set_source(&mut self, src: &str);
    fn source(&self) -> Option<&str>;

    /// Seconds from the start.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// `None` until metadata is known.
    fn duration(&self) -> Option<f64>;

    fn set_volume(&mut self, volume: f64);
    fn volume(&self) -> f64;
    fn set_muted(&mut self, muted: bool);
    fn set_looping(&mut self, looping: bool);
}

/// Exclusive ownership of a media element for the lifetime of a controller.
#[derive(Debug)]
pub struct MediaHandle<E> {
    element: E,
}

impl<E: MediaElement> MediaHandle<E> {
    pub fn acquire(element: E) -> Self {
        tracing::debug!("media element acquired");
        Self { element }
    }

    /// Give the element back, paused.
    pub fn release(mut self) -> E {
        self.element.pause();
        tracing::debug!("media element released");
        self.element
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// Ask `element` to play. A rejection is logged and leaves the state `Paused`.
    pub fn start(element: &mut impl MediaElement) -> Self {
        match element.play() {
            Ok(()) => Self::Playing,
            Err(rejected) => {
                tracing::warn!(reason = %rejected.reason, "playback rejected; staying paused");
                Self::Paused
            }
        }
    }

    pub fn stop(element: &mut impl MediaElement) -> Self {
        element.pause();
        Self::Paused
    }

    /// Playing goes to paused; paused attempts to start.
    pub fn toggle(self, element: &mut impl MediaElement) -> Self {
        match self {
            Self::Playing => Self::stop(element),
            Self::Paused => Self::start(element),
        }
    }
}

/// In-memory media element with a manual clock.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessMedia {
    src: Option<String>,
    paused: bool,
    time: f64,
    duration: Option<f64>,
    volume: f64,
    muted: bool,
    looping: bool,
    reject_play: Option<String>,
    ended: bool,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self {
            src: None,
            paused: true,
            time: 0.0,
            duration: None,
            volume: 1.0,
            muted: false,
            looping: false,
            reject_play: None,
            ended: false,
        }
    }
}

impl HeadlessMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Reject every `play()` call, as a browser without a user gesture would.
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.reject_play = Some(reason.into());
        self
    }

    pub fn allow_play(&mut self) {
        self.reject_play = None;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Advance the clock by `dt` seconds if playing. Returns `true` when playback reached the end.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.paused || !(dt.is_finite() && dt > 0.0) {
            return false;
        }
        self.time += dt;
        match self.duration {
            Some(d) if d > 0.0 && self.time >= d => {
                if self.looping {
                    self.time %= d;
                    false
                } else {
                    self.time = d;
                    self.paused = true;
                    self.ended = true;
                    true
                }
            }
            _ => false,
        }
    }
}

impl MediaElement for HeadlessMedia {
    fn play(&mut self) -> Result<(), PlaybackRejected> {
        if let Some(reason) = &self.reject_play {
            return Err(PlaybackRejected::new(reason.clone()));
        }
        if self.ended {
            self.time = 0.0;
            self.ended = false;
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_source(&mut self, src: &str) {
        // Loading a new source resets the clock and pauses, like a real element.
        self.src = Some(src.to_owned());
        self.time = 0.0;
        self.paused = true;
        self.ended = false;
    }

    fn source(&self) -> Option<&str> {
        self.src.as_deref()
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let t = seconds.max(0.0);
        self.time = match self.duration {
            Some(d) => t.min(d),
            None => t,
        };
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/media.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::{
    foundation::math::clamp01,
    page::model::MusicConfig,
    playback::media::{MediaElement, MediaHandle, PlaybackState},
};

/// Seconds before the listening prompt hides itself.
pub const PROMPT_SECONDS: f64 = 8.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    #[default]
    Instrumental,
    Vocal,
}

impl Track {
    pub fn other(self) -> Self {
        match self {
            Self::Instrumental => Self::Vocal,
            Self::Vocal => Self::Instrumental,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Prompt {
    Visible { remaining: f64 },
    Dismissed,
}

/// The page-wide looping soundtrack with an instrumental and a vocal take.
#[derive(Debug)]
pub struct BackgroundMusic<E> {
    media: MediaHandle<E>,
    config: MusicConfig,
    state: PlaybackState,
    track: Track,
    volume: f64,
    prompt: Prompt,
}

impl<E: MediaElement> BackgroundMusic<E> {
    /// Load the instrumental take, paused, looping, at the configured volume.
    pub fn new(mut media: MediaHandle<E>, config: MusicConfig) -> Self {
        let volume = clamp01(config.volume);
        let el = media.element_mut();
        el.set_source(&config.instrumental);
        el.set_looping(true);
        el.set_volume(volume);
        Self {
            media,
            config,
            state: PlaybackState::Paused,
            track: Track::Instrumental,
            volume,
            prompt: Prompt::Visible {
                remaining: PROMPT_SECONDS,
            },
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn prompt_visible(&self) -> bool {
        matches!(self.prompt, Prompt::Visible { .. })
    }

    pub fn element(&self) -> &E {
        self.media.element()
    }

    pub fn element_mut(&mut self) -> &mut E {
        self.media.element_mut()
    }

    fn source_for(&self, track: Track) -> &str {
        match track {
            Track::Instrumental => &self.config.instrumental,
            Track::Vocal => &self.config.vocal,
        }
    }

    /// Play or pause. Any interaction dismisses the prompt.
    pub fn toggle_play(&mut self) -> PlaybackState {
        self.state = self.state.toggle(self.media.element_mut());
        self.prompt = Prompt::Dismissed;
        self.state
    }

    /// Clamped to `[0, 1]` and passed straight to the element.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = clamp01(volume);
        self.media.element_mut().set_volume(self.volume);
    }

    /// Swap takes, keeping the playback position and play/pause state.
    pub fn toggle_track(&mut self) -> Track {
        let next = self.track.other();
        let src = self.source_for(next).to_owned();
        let el = self.media.element_mut();
        let position = el.current_time();
        el.set_source(&src);
        el.set_current_time(position);
        if self.state.is_playing() {
            self.state = PlaybackState::start(el);
        }
        self.track = next;
        tracing::debug!(track = ?next, position, "music track switched");
        next
    }

    /// Advance wall-clock time for the prompt countdown.
    pub fn advance(&mut self, dt_seconds: f64) {
        if let Prompt::Visible { remaining } = self.prompt {
            let left = remaining - dt_seconds.max(0.0);
            self.prompt = if left <= 0.0 {
                Prompt::Dismissed
            } else {
                Prompt::Visible { remaining: left }
            };
        }
    }

    /// Stop and hand the element back.
    pub fn release(self) -> E {
        self.media.release()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/music.rs"]
mod tests;

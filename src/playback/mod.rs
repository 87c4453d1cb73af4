//! Media playback controllers.
//!
//! Controllers own their element through a [`media::MediaHandle`] and never reach for a global.
//! Play/pause is a two-state machine; a host that refuses playback leaves it paused.

pub mod media;
pub mod music;
pub mod video;

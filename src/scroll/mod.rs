//! Scroll measurement: offsets, trackers and the listener hub that caches progress per tick.

/// Passive listener registry with RAII subscriptions.
pub mod hub;
/// Intersection edges and `[enter, exit]` offset pairs.
pub mod offset;
/// Scroll position to progress mapping.
pub mod tracker;

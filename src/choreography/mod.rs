//! Section choreography: keyframe channels grouped per element, with helpers for staggered
//! reveals and multi-slide decks.

/// Typed curves bound to style properties.
pub mod channel;
/// Elements and their per-section grouping.
pub mod choreo;
/// Equal slide windows and the active-slide index.
pub mod slides;
/// Staggered child windows.
pub mod stagger;
/// Computed style records and CSS output.
pub mod style;

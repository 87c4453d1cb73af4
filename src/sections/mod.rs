//! Section types and their canonical scroll choreography.

/// Page-wide layered background.
pub mod background;
/// Section content model.
pub mod content;
/// Per-section recipes and default heights.
pub mod recipes;
pub mod variant;

//! Page configuration: the JSON model, its builder, and vertical layout.

/// Sample page used by the CLI and tests.
pub mod demo;
/// Builder API for pages.
pub mod dsl;
/// Section stacking.
pub mod layout;
/// Serializable page model and validation.
pub mod model;

//! Keyframe interpolation: progress in, typed output values out.

/// Segment easing curves.
pub mod ease;
/// Validated keyframe tables and the `interpolate` contract.
pub mod keyframes;
/// Interpolatable output values (numbers, lengths, blur radii, colors).
pub mod value;

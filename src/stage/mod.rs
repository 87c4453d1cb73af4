//! The mounted page: per-frame scroll dispatch and style pulls.

/// Serializable per-frame output.
pub mod frame;
/// Mount, tick, resize and unmount.
pub mod runtime;
/// Deterministic digests of frame snapshots.
pub mod fingerprint;

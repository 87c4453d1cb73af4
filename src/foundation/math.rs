/// Linear interpolation `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Fractional position of `x` within `[a, b]`, clamped to `0..1`.
///
/// A zero-width segment yields `1.0` so callers land on the right-hand value (step semantics)
/// instead of dividing by zero.
pub fn segment_fraction(x: f64, a: f64, b: f64) -> f64 {
    let width = b - a;
    if width <= 0.0 {
        return 1.0;
    }
    ((x - a) / width).clamp(0.0, 1.0)
}

pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

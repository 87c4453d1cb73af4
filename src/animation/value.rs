use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::{Rgba8, Vec2, Viewport},
    math::lerp,
};

/// Values a keyframe table can interpolate between.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(f64::from(*a), f64::from(*b), t) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Gaussian blur radius, formatted as a CSS `blur()` filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blur {
    pub radius_px: f64,
}

impl Blur {
    pub const NONE: Self = Self { radius_px: 0.0 };

    pub const fn px(radius_px: f64) -> Self {
        Self { radius_px }
    }
}

impl Lerp for Blur {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            radius_px: lerp(a.radius_px, b.radius_px, t).max(0.0),
        }
    }
}

impl fmt::Display for Blur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blur({}px)", trim_float(self.radius_px))
    }
}

/// A CSS length with its unit kept until output time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    Px(f64),
    Percent(f64),
    Vw(f64),
    Vh(f64),
}

impl Length {
    /// Magnitude in its own unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Percent(v) | Self::Vw(v) | Self::Vh(v) => v,
        }
    }

    pub fn same_unit(self, other: Self) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }

    fn with_value(self, v: f64) -> Self {
        match self {
            Self::Px(_) => Self::Px(v),
            Self::Percent(_) => Self::Percent(v),
            Self::Vw(_) => Self::Vw(v),
            Self::Vh(_) => Self::Vh(v),
        }
    }

    /// Resolve to pixels; percentages resolve against the viewport width.
    pub fn to_px(self, viewport: Viewport) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(v) | Self::Vw(v) => v * viewport.width / 100.0,
            Self::Vh(v) => v * viewport.height / 100.0,
        }
    }

    /// Interpolate, falling back to pixels when the two ends use different units.
    pub fn lerp_in(a: Self, b: Self, t: f64, viewport: Viewport) -> Self {
        if a.same_unit(b) {
            return a.with_value(lerp(a.value(), b.value(), t));
        }
        Self::Px(lerp(a.to_px(viewport), b.to_px(viewport), t))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", trim_float(*v)),
            Self::Percent(v) => write!(f, "{}%", trim_float(*v)),
            Self::Vw(v) => write!(f, "{}vw", trim_float(*v)),
            Self::Vh(v) => write!(f, "{}vh", trim_float(*v)),
        }
    }
}

// Four decimals is plenty for style output and keeps snapshots stable.
pub(crate) fn trim_float(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;

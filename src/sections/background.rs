use crate::{
    choreography::{channel::Channel, choreo::Choreography, style::Property},
    foundation::{core::Rgba8, error::CurtainResult},
};

/// A full-viewport background layer cross-faded over document progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundLayer {
    pub name: &'static str,
    /// Representative color for flat previews.
    pub tint: Rgba8,
    pub stops: &'static [f64],
    pub opacity: &'static [f64],
}

/// Layers from back to front, over a black base.
pub const BACKGROUND_LAYERS: [BackgroundLayer; 5] = [
    BackgroundLayer {
        name: "warm",
        tint: Rgba8::rgba(180, 100, 50, 64),
        stops: &[0.0, 0.05, 0.15, 0.25],
        opacity: &[1.0, 1.0, 0.5, 0.0],
    },
    BackgroundLayer {
        name: "purple",
        tint: Rgba8::rgba(120, 50, 180, 51),
        stops: &[0.1, 0.25, 0.5, 0.7],
        opacity: &[0.0, 0.8, 1.0, 0.4],
    },
    BackgroundLayer {
        name: "deep_purple",
        tint: Rgba8::rgba(80, 30, 120, 102),
        stops: &[0.35, 0.5, 0.75, 0.9],
        opacity: &[0.0, 0.9, 1.0, 0.5],
    },
    BackgroundLayer {
        name: "cosmic",
        tint: Rgba8::rgba(40, 12, 70, 153),
        stops: &[0.6, 0.8, 0.95],
        opacity: &[0.0, 0.7, 1.0],
    },
    BackgroundLayer {
        name: "final",
        tint: Rgba8::rgba(45, 25, 60, 191),
        stops: &[0.85, 0.95, 1.0],
        opacity: &[0.0, 0.6, 1.0],
    },
];

pub const BACKGROUND_BASE: Rgba8 = Rgba8::BLACK;

/// Page-wide background choreography, driven by whole-document progress.
pub fn dynamic_background() -> CurtainResult<Choreography> {
    let mut choreo = Choreography::default();
    for layer in &BACKGROUND_LAYERS {
        choreo.add(
            layer.name,
            vec![Channel::number(Property::Opacity, layer.stops, layer.opacity)?],
        )?;
    }
    Ok(choreo)
}

pub fn layer(name: &str) -> Option<&'static BackgroundLayer> {
    BACKGROUND_LAYERS.iter().find(|l| l.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/background.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Section color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Default,
    Dark,
    Purple,
    BrightPurple,
    DeepPurple,
    GradientPurple,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba8,
    pub text: Rgba8,
}

impl Variant {
    pub fn palette(self) -> Palette {
        let body = Rgba8::from_hsla(0.0, 0.0, 0.85, 1.0);
        let (background, text) = match self {
            Self::Default => (Rgba8::rgb(10, 10, 10), body),
            Self::Dark => (Rgba8::from_hsla(270.0, 0.2, 0.08, 1.0), body),
            Self::Purple => (Rgba8::from_hsla(270.0, 0.6, 0.55, 1.0), Rgba8::WHITE),
            Self::BrightPurple => (Rgba8::from_hsla(275.0, 0.7, 0.6, 1.0), Rgba8::WHITE),
            Self::DeepPurple => (Rgba8::from_hsla(265.0, 0.4, 0.12, 1.0), body),
            // Flat stand-in for the 275/280/275 vertical gradient.
            Self::GradientPurple => (Rgba8::from_hsla(280.0, 0.7, 0.55, 1.0), Rgba8::WHITE),
        };
        Palette { background, text }
    }

    pub fn background(self) -> Rgba8 {
        self.palette().background
    }

    pub fn text(self) -> Rgba8 {
        self.palette().text
    }
}

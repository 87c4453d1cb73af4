use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        ease::Ease,
        keyframes::Keyframes,
        value::{Blur, Length},
    },
    choreography::style::{Property, StyleValue},
    foundation::{
        core::{Rgba8, Viewport},
        error::{CurtainError, CurtainResult},
    },
};

/// A keyframe table of one semantic value type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "keyframes", rename_all = "snake_case")]
pub enum Curve {
    Number(Keyframes<f64>),
    Length(Keyframes<Length>),
    Blur(Keyframes<Blur>),
    Color(Keyframes<Rgba8>),
}

impl Curve {
    pub fn stops(&self) -> &[f64] {
        match self {
            Self::Number(k) => k.stops(),
            Self::Length(k) => k.stops(),
            Self::Blur(k) => k.stops(),
            Self::Color(k) => k.stops(),
        }
    }

    /// Sample at `progress`. Length segments mixing units are resolved to px against `viewport`.
    pub fn sample(&self, progress: f64, viewport: Viewport) -> StyleValue {
        match self {
            Self::Number(k) => StyleValue::Number(k.sample(progress)),
            Self::Blur(k) => StyleValue::Blur(k.sample(progress)),
            Self::Color(k) => StyleValue::Color(k.sample(progress)),
            Self::Length(k) => StyleValue::Length(k.sample_in(progress, viewport)),
        }
    }

    fn with_ease(self, ease: Ease) -> Self {
        match self {
            Self::Number(k) => Self::Number(k.with_ease(ease)),
            Self::Length(k) => Self::Length(k.with_ease(ease)),
            Self::Blur(k) => Self::Blur(k.with_ease(ease)),
            Self::Color(k) => Self::Color(k.with_ease(ease)),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Length(_) => "length",
            Self::Blur(_) => "blur",
            Self::Color(_) => "color",
        }
    }

    fn fits(&self, property: Property) -> bool {
        match property {
            Property::Opacity | Property::Scale | Property::Rotate => {
                matches!(self, Self::Number(_))
            }
            Property::TranslateX | Property::TranslateY => {
                matches!(self, Self::Number(_) | Self::Length(_))
            }
            Property::Blur => matches!(self, Self::Blur(_)),
            Property::Width => matches!(self, Self::Length(_)),
            Property::Color => matches!(self, Self::Color(_)),
        }
    }
}

/// One animated property of an element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChannelDef")]
pub struct Channel {
    pub(crate) property: Property,
    pub(crate) curve: Curve,
}

#[derive(Deserialize)]
struct ChannelDef {
    property: Property,
    curve: Curve,
}

impl TryFrom<ChannelDef> for Channel {
    type Error = CurtainError;

    fn try_from(def: ChannelDef) -> CurtainResult<Self> {
        Self::new(def.property, def.curve)
    }
}

impl Channel {
    pub fn new(property: Property, curve: Curve) -> CurtainResult<Self> {
        if !curve.fits(property) {
            return Err(CurtainError::animation(format!(
                "a {} curve cannot drive {property}",
                curve.kind()
            )));
        }
        Ok(Self { property, curve })
    }

    pub fn number(property: Property, stops: &[f64], values: &[f64]) -> CurtainResult<Self> {
        Self::new(
            property,
            Curve::Number(Keyframes::new(stops.to_vec(), values.to_vec())?),
        )
    }

    pub fn length(property: Property, stops: &[f64], values: &[Length]) -> CurtainResult<Self> {
        Self::new(
            property,
            Curve::Length(Keyframes::new(stops.to_vec(), values.to_vec())?),
        )
    }

    /// Blur channel from radii in px.
    pub fn blur(stops: &[f64], radii_px: &[f64]) -> CurtainResult<Self> {
        let values = radii_px.iter().copied().map(Blur::px).collect();
        Self::new(
            Property::Blur,
            Curve::Blur(Keyframes::new(stops.to_vec(), values)?),
        )
    }

    pub fn color(stops: &[f64], values: &[Rgba8]) -> CurtainResult<Self> {
        Self::new(
            Property::Color,
            Curve::Color(Keyframes::new(stops.to_vec(), values.to_vec())?),
        )
    }

    /// Same table with `ease` applied inside every segment.
    pub fn eased(mut self, ease: Ease) -> Self {
        self.curve = self.curve.with_ease(ease);
        self
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn sample(&self, progress: f64, viewport: Viewport) -> StyleValue {
        self.curve.sample(progress, viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/channel.rs"]
mod tests;

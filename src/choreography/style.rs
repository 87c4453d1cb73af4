use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    animation::value::{Blur, Length, trim_float},
    foundation::core::{Rgba8, Viewport},
};

/// A style channel an element can animate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Blur,
    Width,
    Color,
}

impl Property {
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Blur => "blur",
            Self::Width => "width",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One computed style value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Length(Length),
    Blur(Blur),
    Color(Rgba8),
}

impl StyleValue {
    /// Numeric reading: lengths resolve to px, blur to its radius.
    pub fn as_f64(&self, viewport: Viewport) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Length(l) => Some(l.to_px(viewport)),
            Self::Blur(b) => Some(b.radius_px),
            Self::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", trim_float(*v)),
            Self::Length(l) => write!(f, "{l}"),
            Self::Blur(b) => write!(f, "{b}"),
            Self::Color(c) => write!(f, "{c}"),
        }
    }
}

/// Computed styles of one element, ordered by property.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleRecord {
    values: BTreeMap<Property, StyleValue>,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: Property, value: StyleValue) {
        let value = match (property, value) {
            (Property::Opacity, StyleValue::Number(v)) => StyleValue::Number(v.clamp(0.0, 1.0)),
            (_, v) => v,
        };
        self.values.insert(property, value);
    }

    pub fn with(mut self, property: Property, value: StyleValue) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: Property) -> Option<&StyleValue> {
        self.values.get(&property)
    }

    /// Opacity, `1` when unanimated.
    pub fn opacity(&self) -> f64 {
        match self.get(Property::Opacity) {
            Some(StyleValue::Number(v)) => *v,
            _ => 1.0,
        }
    }

    /// Numeric reading of a property; lengths resolve against `viewport`.
    pub fn number(&self, property: Property, viewport: Viewport) -> Option<f64> {
        self.get(property).and_then(|v| v.as_f64(viewport))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &StyleValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Inline CSS declarations, e.g.
    /// `opacity: 0.5; transform: translateY(25px) scale(0.98); filter: blur(4px)`.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(v) = self.get(Property::Opacity) {
            decls.push(format!("opacity: {v}"));
        }

        let mut transform = Vec::new();
        for (property, func) in [
            (Property::TranslateX, "translateX"),
            (Property::TranslateY, "translateY"),
        ] {
            match self.get(property) {
                Some(StyleValue::Number(v)) => {
                    transform.push(format!("{func}({}px)", trim_float(*v)));
                }
                Some(v) => transform.push(format!("{func}({v})")),
                None => {}
            }
        }
        if let Some(v) = self.get(Property::Scale) {
            transform.push(format!("scale({v})"));
        }
        if let Some(v) = self.get(Property::Rotate) {
            transform.push(format!("rotate({v}deg)"));
        }
        if !transform.is_empty() {
            decls.push(format!("transform: {}", transform.join(" ")));
        }

        if let Some(v) = self.get(Property::Blur) {
            decls.push(format!("filter: {v}"));
        }
        if let Some(v) = self.get(Property::Width) {
            decls.push(format!("width: {v}"));
        }
        if let Some(v) = self.get(Property::Color) {
            decls.push(format!("color: {v}"));
        }
        decls.join("; ")
    }
}

/// Styles of every choreographed element of a section at one progress value, keyed by element
/// name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrameStyles {
    elements: BTreeMap<String, StyleRecord>,
}

impl FrameStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: StyleRecord) {
        self.elements.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&StyleRecord> {
        self.elements.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRecord)> {
        self.elements.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/style.rs"]
mod tests;

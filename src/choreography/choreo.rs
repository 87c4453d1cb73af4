use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    choreography::{
        channel::Channel,
        style::{FrameStyles, StyleRecord},
    },
    foundation::{
        core::{Progress, Viewport},
        error::{CurtainError, CurtainResult},
    },
};

/// The animated channels of one named element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementDef")]
pub struct ElementChoreo {
    name: String,
    channels: Vec<Channel>,
}

#[derive(Deserialize)]
struct ElementDef {
    name: String,
    channels: Vec<Channel>,
}

impl TryFrom<ElementDef> for ElementChoreo {
    type Error = CurtainError;

    fn try_from(def: ElementDef) -> CurtainResult<Self> {
        Self::new(def.name, def.channels)
    }
}

impl ElementChoreo {
    /// Each property may be driven by at most one channel.
    pub fn new(name: impl Into<String>, channels: Vec<Channel>) -> CurtainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CurtainError::validation("element name must be non-empty"));
        }
        let mut seen = BTreeSet::new();
        for ch in &channels {
            if !seen.insert(ch.property()) {
                return Err(CurtainError::validation(format!(
                    "element '{name}' animates {} twice",
                    ch.property()
                )));
            }
        }
        Ok(Self { name, channels })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn compute_style(&self, progress: Progress, viewport: Viewport) -> StyleRecord {
        let mut record = StyleRecord::new();
        for ch in &self.channels {
            record.set(ch.property(), ch.sample(progress.get(), viewport));
        }
        record
    }
}

/// Declarative per-section choreography: element name to animated channels.
///
/// Styles are pulled with [`Choreography::compute_styles`] once per frame; nothing here holds
/// scroll state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChoreographyDef")]
pub struct Choreography {
    elements: Vec<ElementChoreo>,
}

#[derive(Deserialize)]
struct ChoreographyDef {
    elements: Vec<ElementChoreo>,
}

impl TryFrom<ChoreographyDef> for Choreography {
    type Error = CurtainError;

    fn try_from(def: ChoreographyDef) -> CurtainResult<Self> {
        Self::new(def.elements)
    }
}

impl Choreography {
    pub fn new(elements: Vec<ElementChoreo>) -> CurtainResult<Self> {
        let mut choreo = Self::default();
        for el in elements {
            choreo.push(el)?;
        }
        Ok(choreo)
    }

    /// Append an element; names must be unique within a section.
    pub fn push(&mut self, element: ElementChoreo) -> CurtainResult<()> {
        if self.element(element.name()).is_some() {
            return Err(CurtainError::validation(format!(
                "duplicate element name '{}'",
                element.name()
            )));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Shorthand for `push(ElementChoreo::new(name, channels)?)`.
    pub fn add(&mut self, name: impl Into<String>, channels: Vec<Channel>) -> CurtainResult<()> {
        self.push(ElementChoreo::new(name, channels)?)
    }

    pub fn elements(&self) -> &[ElementChoreo] {
        &self.elements
    }

    pub fn element(&self, name: &str) -> Option<&ElementChoreo> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn compute_styles(&self, progress: Progress, viewport: Viewport) -> FrameStyles {
        let mut frame = FrameStyles::new();
        for el in &self.elements {
            frame.insert(el.name(), el.compute_style(progress, viewport));
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/choreography/choreo.rs"]
mod tests;

use std::{collections::BTreeSet, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        core::Viewport,
        error::{CurtainError, CurtainResult},
    },
    scroll::offset::ScrollOffset,
    sections::{
        content::SectionKind,
        recipes::{default_height_vh, recipe},
    },
};

/// A whole scroll narrative: stacked sections plus page-wide navigation and music.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    pub sections: Vec<SectionDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavChapter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDef {
    pub id: String,
    /// Overrides the section type's default height, in viewport heights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_vh: Option<f64>,
    #[serde(flatten)]
    pub kind: SectionKind,
}

impl SectionDef {
    pub fn new(id: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            id: id.into(),
            height_vh: None,
            kind,
        }
    }

    pub fn height_vh(&self, viewport: Viewport) -> f64 {
        self.height_vh
            .unwrap_or_else(|| default_height_vh(&self.kind, viewport))
    }
}

/// A jump target expressed as a fraction of the document height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavChapter {
    pub id: String,
    pub title: String,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MusicConfig {
    pub instrumental: String,
    pub vocal: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    0.3
}

impl Page {
    /// Parse and validate a page document.
    #[tracing::instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> CurtainResult<Self> {
        let page: Self = serde_json::from_str(json)?;
        page.validate()?;
        Ok(page)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CurtainResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read page '{}'", path.display()))?;
        Self::from_json(&json).map_err(|e| e.within(path.display()))
    }

    pub fn to_json_pretty(&self) -> CurtainResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn chapter(&self, id: &str) -> Option<&NavChapter> {
        self.navigation.iter().find(|c| c.id == id)
    }

    /// Structural checks plus a dry build of every section recipe, so malformed content fails
    /// here rather than mid-scroll.
    pub fn validate(&self) -> CurtainResult<()> {
        if self.sections.is_empty() {
            return Err(CurtainError::validation("page must have at least one section"));
        }

        let mut ids = BTreeSet::new();
        let viewport = Viewport::default();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(CurtainError::validation("section id must be non-empty"));
            }
            if !ids.insert(section.id.as_str()) {
                return Err(CurtainError::validation(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
            if let Some(h) = section.height_vh
                && !(h.is_finite() && h > 0.0)
            {
                return Err(CurtainError::validation(format!(
                    "section '{}' height_vh must be > 0, got {h}",
                    section.id
                )));
            }
            let built = recipe(&section.kind, viewport)
                .map_err(|e| e.within(format_args!("section '{}'", section.id)))?;
            // A pinned region only progresses over the part of it taller than the viewport.
            let h = section.height_vh(viewport);
            if built.offset == ScrollOffset::PINNED && h <= 1.0 {
                return Err(CurtainError::validation(format!(
                    "section '{}' is pinned and needs height_vh > 1, got {h}",
                    section.id
                )));
            }
        }

        let mut chapter_ids = BTreeSet::new();
        for chapter in &self.navigation {
            if !chapter_ids.insert(chapter.id.as_str()) {
                return Err(CurtainError::validation(format!(
                    "duplicate chapter id '{}'",
                    chapter.id
                )));
            }
            if !(0.0..=1.0).contains(&chapter.offset) {
                return Err(CurtainError::validation(format!(
                    "chapter '{}' offset must be in [0, 1], got {}",
                    chapter.id, chapter.offset
                )));
            }
        }

        if let Some(music) = &self.music {
            if !(0.0..=1.0).contains(&music.volume) {
                return Err(CurtainError::validation(format!(
                    "music volume must be in [0, 1], got {}",
                    music.volume
                )));
            }
            if music.instrumental.trim().is_empty() || music.vocal.trim().is_empty() {
                return Err(CurtainError::validation("music tracks must be non-empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;

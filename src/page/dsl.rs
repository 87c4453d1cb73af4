use std::collections::BTreeSet;

use crate::{
    foundation::error::{CurtainError, CurtainResult},
    page::model::{MusicConfig, NavChapter, Page, SectionDef},
    sections::content::SectionKind,
};

pub struct PageBuilder {
    title: String,
    ids: BTreeSet<String>,
    sections: Vec<SectionDef>,
    navigation: Vec<NavChapter>,
    music: Option<MusicConfig>,
}

impl PageBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ids: BTreeSet::new(),
            sections: Vec::new(),
            navigation: Vec::new(),
            music: None,
        }
    }

    pub fn section(mut self, id: impl Into<String>, kind: SectionKind) -> CurtainResult<Self> {
        self.push(SectionDef::new(id, kind))?;
        Ok(self)
    }

    /// Add a section with an explicit height in viewport heights.
    pub fn section_with_height(
        mut self,
        id: impl Into<String>,
        height_vh: f64,
        kind: SectionKind,
    ) -> CurtainResult<Self> {
        let mut def = SectionDef::new(id, kind);
        def.height_vh = Some(height_vh);
        self.push(def)?;
        Ok(self)
    }

    pub fn chapter(
        mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        offset: f64,
    ) -> Self {
        self.navigation.push(NavChapter {
            id: id.into(),
            title: title.into(),
            offset,
        });
        self
    }

    pub fn music(
        mut self,
        instrumental: impl Into<String>,
        vocal: impl Into<String>,
        volume: f64,
    ) -> Self {
        self.music = Some(MusicConfig {
            instrumental: instrumental.into(),
            vocal: vocal.into(),
            volume,
        });
        self
    }

    pub fn build(self) -> CurtainResult<Page> {
        let page = Page {
            title: self.title,
            sections: self.sections,
            navigation: self.navigation,
            music: self.music,
        };
        page.validate()?;
        Ok(page)
    }

    fn push(&mut self, def: SectionDef) -> CurtainResult<()> {
        if !self.ids.insert(def.id.clone()) {
            return Err(CurtainError::validation(format!(
                "duplicate section id '{}'",
                def.id
            )));
        }
        self.sections.push(def);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/dsl.rs"]
mod tests;

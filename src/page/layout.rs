use serde::Serialize;

use crate::{
    foundation::{
        core::{Rect, Viewport},
        error::{CurtainError, CurtainResult},
    },
    page::model::Page,
};

/// Where one section sits in the document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionBox {
    pub id: String,
    pub bounds: Rect,
}

/// Sections stacked top to bottom at a given viewport size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub sections: Vec<SectionBox>,
    pub document_height: f64,
}

impl PageLayout {
    #[tracing::instrument(skip(page), fields(sections = page.sections.len()))]
    pub fn compute(page: &Page, viewport: Viewport) -> CurtainResult<Self> {
        let mut top = 0.0;
        let mut sections = Vec::with_capacity(page.sections.len());
        for section in &page.sections {
            let height = section.height_vh(viewport) * viewport.height;
            if !(height.is_finite() && height > 0.0) {
                return Err(CurtainError::layout(format!(
                    "section '{}' resolves to height {height}",
                    section.id
                )));
            }
            sections.push(SectionBox {
                id: section.id.clone(),
                bounds: Rect::new(0.0, top, viewport.width, top + height),
            });
            top += height;
        }
        Ok(Self {
            viewport,
            sections,
            document_height: top,
        })
    }

    pub fn bounds(&self, id: &str) -> Option<Rect> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.bounds)
    }

    /// Whether any part of `bounds` is inside the viewport at `scroll_y`.
    pub fn is_visible(&self, bounds: Rect, scroll_y: f64) -> bool {
        let view = self.viewport.rect_at(scroll_y);
        bounds.y1 > view.y0 && bounds.y0 < view.y1
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;

use serde::Serialize;

use crate::{
    choreography::style::FrameStyles,
    foundation::{
        core::{Progress, Rect, Viewport},
        error::CurtainResult,
    },
    sections::variant::Variant,
};

/// Everything a host needs to paint one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub scroll_y: f64,
    pub viewport: Viewport,
    pub document_height: f64,
    pub document_progress: Progress,
    /// Page-wide background layers, keyed by layer name.
    pub background: FrameStyles,
    /// Mounted sections in page order.
    pub sections: Vec<SectionFrame>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionFrame {
    pub id: String,
    pub kind: &'static str,
    pub variant: Variant,
    pub bounds: Rect,
    pub progress: Progress,
    pub visible: bool,
    pub styles: FrameStyles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_slide: Option<usize>,
}

impl FrameSnapshot {
    pub fn section(&self, id: &str) -> Option<&SectionFrame> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionFrame> {
        self.sections.iter().filter(|s| s.visible)
    }

    pub fn to_json_pretty(&self) -> CurtainResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

use serde::{Deserialize, Serialize};

use crate::{foundation::core::Viewport, page::model::NavChapter};

/// Scroll depth, in viewport heights, past which the back-to-top control shows.
pub const BACK_TO_TOP_VH: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The page must not scroll underneath an open menu.
    pub fn scroll_locked(self) -> bool {
        self.is_open()
    }
}

/// A one-shot request for the host to scroll smoothly to `target` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScrollCommand {
    pub target: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Navigation {
    chapters: Vec<NavChapter>,
    menu: MenuState,
}

impl Navigation {
    pub fn new(chapters: Vec<NavChapter>) -> Self {
        Self {
            chapters,
            menu: MenuState::Closed,
        }
    }

    pub fn chapters(&self) -> &[NavChapter] {
        &self.chapters
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggle();
        self.menu
    }

    pub fn close_menu(&mut self) {
        self.menu = self.menu.close();
    }

    /// Jump to a chapter at `document_height * offset` and close the menu.
    /// Unknown chapter ids leave the menu untouched.
    pub fn select(&mut self, chapter_id: &str, document_height: f64) -> Option<ScrollCommand> {
        let chapter = self.chapters.iter().find(|c| c.id == chapter_id)?;
        let target = (document_height * chapter.offset).max(0.0);
        self.menu = self.menu.close();
        tracing::debug!(chapter = chapter_id, target, "chapter selected");
        Some(ScrollCommand { target })
    }

    pub fn back_to_top(&self) -> ScrollCommand {
        ScrollCommand { target: 0.0 }
    }

    pub fn back_to_top_visible(&self, scroll_y: f64, viewport: Viewport) -> bool {
        scroll_y > viewport.height * BACK_TO_TOP_VH
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/menu.rs"]
mod tests;

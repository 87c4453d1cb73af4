use crate::{
    choreography::choreo::Choreography,
    foundation::{
        core::{Progress, Viewport},
        error::{CurtainError, CurtainResult},
    },
    page::{layout::PageLayout, model::Page},
    scroll::{
        hub::{ScrollHub, ScrollSubscription},
        tracker::{ScrollState, ScrollTracker},
    },
    sections::{
        background::dynamic_background,
        recipes::{Recipe, recipe},
    },
    stage::frame::{FrameSnapshot, SectionFrame},
};

struct MountedSection {
    index: usize,
    recipe: Recipe,
    subscription: ScrollSubscription,
}

/// A mounted page: one scroll subscription per section plus the document-wide background.
///
/// The host drives it with [`Stage::tick`] on every scroll event and [`Stage::resize`] when the
/// viewport changes; each tick dispatches once and then pulls styles from every section.
pub struct Stage {
    page: Page,
    layout: PageLayout,
    hub: ScrollHub,
    background: Choreography,
    document: ScrollSubscription,
    mounted: Vec<MountedSection>,
    scroll_y: f64,
}

impl Stage {
    #[tracing::instrument(skip(page), fields(sections = page.sections.len()))]
    pub fn mount(page: Page, viewport: Viewport) -> CurtainResult<Self> {
        page.validate()?;
        let layout = PageLayout::compute(&page, viewport)?;
        let hub = ScrollHub::new();
        let document = hub.subscribe(ScrollTracker::document());

        let mut stage = Self {
            page,
            layout,
            hub,
            background: dynamic_background()?,
            document,
            mounted: Vec::new(),
            scroll_y: 0.0,
        };
        for index in 0..stage.page.sections.len() {
            let section = stage.mount_index(index)?;
            stage.mounted.push(section);
        }
        stage.dispatch();
        tracing::debug!(
            document_height = stage.layout.document_height,
            "stage mounted"
        );
        Ok(stage)
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    pub fn hub(&self) -> &ScrollHub {
        &self.hub
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.mounted
            .iter()
            .any(|m| self.page.sections[m.index].id == id)
    }

    /// One scroll tick. Overscrolled input is passed through; trackers clamp it.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, scroll_y: f64) -> FrameSnapshot {
        self.scroll_y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
        self.dispatch();
        self.snapshot()
    }

    /// Re-layout for a new viewport, rebuilding viewport-dependent recipes and retargeting every
    /// subscription before the next tick.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport: Viewport) -> CurtainResult<()> {
        let layout = PageLayout::compute(&self.page, viewport)?;
        let mut rebuilt = Vec::with_capacity(self.mounted.len());
        for m in &self.mounted {
            let section = &self.page.sections[m.index];
            let recipe = recipe(&section.kind, viewport)
                .map_err(|e| e.within(format_args!("section '{}'", section.id)))?;
            rebuilt.push(recipe);
        }

        self.layout = layout;
        for (m, recipe) in self.mounted.iter_mut().zip(rebuilt) {
            let tracker = ScrollTracker::element(self.layout.sections[m.index].bounds, recipe.offset);
            self.hub.retarget(&m.subscription, tracker);
            m.recipe = recipe;
        }
        self.dispatch();
        Ok(())
    }

    /// Drop a section's subscription. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, id: &str) -> bool {
        let Some(pos) = self
            .mounted
            .iter()
            .position(|m| self.page.sections[m.index].id == id)
        else {
            return false;
        };
        self.mounted.remove(pos);
        tracing::debug!(id, "section unmounted");
        true
    }

    /// Re-mount a previously unmounted section.
    pub fn mount_section(&mut self, id: &str) -> CurtainResult<()> {
        let index = self
            .page
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| CurtainError::validation(format!("unknown section '{id}'")))?;
        if self.is_mounted(id) {
            return Err(CurtainError::validation(format!(
                "section '{id}' is already mounted"
            )));
        }
        let section = self.mount_index(index)?;
        let pos = self.mounted.partition_point(|m| m.index < index);
        self.mounted.insert(pos, section);
        tracing::debug!(id, "section mounted");
        Ok(())
    }

    fn mount_index(&self, index: usize) -> CurtainResult<MountedSection> {
        let section = &self.page.sections[index];
        let recipe = recipe(&section.kind, self.layout.viewport)
            .map_err(|e| e.within(format_args!("section '{}'", section.id)))?;
        let bounds = self.layout.sections[index].bounds;
        let subscription = self
            .hub
            .subscribe(ScrollTracker::element(bounds, recipe.offset));
        Ok(MountedSection {
            index,
            recipe,
            subscription,
        })
    }

    fn dispatch(&self) {
        self.hub.dispatch(&ScrollState::new(
            self.scroll_y,
            self.layout.viewport,
            self.layout.document_height,
        ));
    }

    fn snapshot(&self) -> FrameSnapshot {
        let viewport = self.layout.viewport;
        let document_progress = self.document.progress();
        let sections = self
            .mounted
            .iter()
            .map(|m| {
                let def = &self.page.sections[m.index];
                let bounds = self.layout.sections[m.index].bounds;
                let progress = m.subscription.progress();
                SectionFrame {
                    id: def.id.clone(),
                    kind: def.kind.name(),
                    variant: def.kind.variant(),
                    bounds,
                    progress,
                    visible: self.layout.is_visible(bounds, self.scroll_y),
                    styles: m.recipe.choreography.compute_styles(progress, viewport),
                    active_slide: m.recipe.slides.map(|deck| deck.active_index(progress)),
                }
            })
            .collect();

        FrameSnapshot {
            scroll_y: self.scroll_y,
            viewport,
            document_height: self.layout.document_height,
            document_progress,
            background: self.background.compute_styles(document_progress, viewport),
            sections,
        }
    }

    /// Progress of a mounted section as of the last tick.
    pub fn section_progress(&self, id: &str) -> Option<Progress> {
        self.mounted
            .iter()
            .find(|m| self.page.sections[m.index].id == id)
            .map(|m| m.subscription.progress())
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("title", &self.page.title)
            .field("viewport", &self.layout.viewport)
            .field("mounted", &self.mounted.len())
            .field("scroll_y", &self.scroll_y)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/runtime.rs"]
mod tests;

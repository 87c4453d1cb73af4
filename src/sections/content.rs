use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        core::Rgba8,
        error::{CurtainError, CurtainResult},
    },
    sections::variant::Variant,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// An opaque media reference; the engine never loads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, alias = "type")]
    pub kind: MediaKind,
    /// Width over height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            kind: MediaKind::Image,
            ratio: None,
            title: None,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = Some(ratio);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn validate(&self) -> CurtainResult<()> {
        if self.src.trim().is_empty() {
            return Err(CurtainError::validation("media src must be non-empty"));
        }
        if let Some(r) = self.ratio
            && !(r.is_finite() && r > 0.0)
        {
            return Err(CurtainError::validation(format!(
                "media '{}' ratio must be > 0, got {r}",
                self.src
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    #[default]
    Line,
    Gradient,
    Fade,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealLayout {
    #[default]
    Grid,
    Row,
}

/// What a section shows. The engine only cares about counts and the section type; text and
/// media are carried for the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    Monologue {
        lines: Vec<String>,
        #[serde(default)]
        variant: Variant,
    },
    ParallaxText {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        lines: Vec<String>,
        #[serde(default)]
        alignment: Alignment,
        #[serde(default)]
        variant: Variant,
    },
    HorizontalGallery {
        images: Vec<MediaItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link_text: Option<String>,
    },
    ZoomImage {
        image: MediaItem,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overlay_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub_text: Option<String>,
    },
    TripleImage {
        images: Vec<MediaItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        top_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bottom_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    FanStory {
        images: Vec<MediaItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        top_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bottom_text: Option<String>,
    },
    MasonryGallery {
        images: Vec<MediaItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    ImageReveal {
        images: Vec<MediaItem>,
        #[serde(default)]
        layout: RevealLayout,
    },
    FinalMessage {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_image: Option<String>,
        lines: Vec<String>,
    },
    Finale {
        slides: Vec<MediaItem>,
    },
    Video {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Credits,
    Divider {
        #[serde(default)]
        style: DividerStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<Rgba8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Rgba8>,
    },
}

impl SectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monologue { .. } => "monologue",
            Self::ParallaxText { .. } => "parallax_text",
            Self::HorizontalGallery { .. } => "horizontal_gallery",
            Self::ZoomImage { .. } => "zoom_image",
            Self::TripleImage { .. } => "triple_image",
            Self::FanStory { .. } => "fan_story",
            Self::MasonryGallery { .. } => "masonry_gallery",
            Self::ImageReveal { .. } => "image_reveal",
            Self::FinalMessage { .. } => "final_message",
            Self::Finale { .. } => "finale",
            Self::Video { .. } => "video",
            Self::Credits => "credits",
            Self::Divider { .. } => "divider",
        }
    }

    /// Color scheme of the section band.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Monologue { variant, .. } | Self::ParallaxText { variant, .. } => *variant,
            Self::FinalMessage { .. } => Variant::GradientPurple,
            Self::Credits => Variant::DeepPurple,
            _ => Variant::Default,
        }
    }

    /// Number of sequenced children the recipe animates.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Monologue { lines, .. }
            | Self::ParallaxText { lines, .. }
            | Self::FinalMessage { lines, .. } => lines.len(),
            Self::HorizontalGallery { images, .. }
            | Self::TripleImage { images, .. }
            | Self::FanStory { images, .. }
            | Self::MasonryGallery { images, .. }
            | Self::ImageReveal { images, .. } => images.len(),
            Self::Finale { slides } => slides.len(),
            Self::ZoomImage { .. } | Self::Video { .. } => 1,
            Self::Credits | Self::Divider { .. } => 0,
        }
    }

    /// Content checks that do not depend on the viewport.
    pub fn validate(&self) -> CurtainResult<()> {
        let name = self.name();
        let media: &[MediaItem] = match self {
            Self::HorizontalGallery { images, .. }
            | Self::TripleImage { images, .. }
            | Self::FanStory { images, .. }
            | Self::MasonryGallery { images, .. }
            | Self::ImageReveal { images, .. } => images,
            Self::Finale { slides } => slides,
            Self::ZoomImage { image, .. } => std::slice::from_ref(image),
            _ => &[],
        };
        for item in media {
            item.validate()?;
        }

        match self {
            Self::Monologue { lines, .. }
            | Self::ParallaxText { lines, .. }
            | Self::FinalMessage { lines, .. }
                if lines.is_empty() =>
            {
                Err(CurtainError::validation(format!(
                    "{name} section needs at least one line"
                )))
            }
            Self::TripleImage { images, .. } if images.len() != 3 => {
                Err(CurtainError::validation(format!(
                    "triple_image section needs exactly 3 images, got {}",
                    images.len()
                )))
            }
            Self::Video { src, .. } if src.trim().is_empty() => {
                Err(CurtainError::validation("video src must be non-empty"))
            }
            _ if media.is_empty() && self.needs_media() => {
                Err(CurtainError::validation(format!(
                    "{name} section needs at least one image"
                )))
            }
            _ => Ok(()),
        }
    }

    fn needs_media(&self) -> bool {
        matches!(
            self,
            Self::HorizontalGallery { .. }
                | Self::FanStory { .. }
                | Self::MasonryGallery { .. }
                | Self::ImageReveal { .. }
                | Self::Finale { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sections/content.rs"]
mod tests;

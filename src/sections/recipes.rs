use crate::{
    animation::{ease::Ease, value::Length},
    choreography::{
        channel::Channel,
        choreo::Choreography,
        slides::SlideDeck,
        stagger::{Stagger, Window},
        style::Property,
    },
    foundation::{core::Viewport, error::CurtainResult},
    scroll::offset::ScrollOffset,
    sections::content::{DividerStyle, SectionKind},
};

const FADE_STOPS: [f64; 4] = [0.0, 0.2, 0.8, 1.0];
const FADE_IN_OUT: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Everything needed to animate one section: the scroll range it tracks, its element
/// choreography and, for slide sections, the deck used for the active-slide index.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub offset: ScrollOffset,
    pub choreography: Choreography,
    pub slides: Option<SlideDeck>,
}

impl Recipe {
    fn new(offset: ScrollOffset) -> Self {
        Self {
            offset,
            choreography: Choreography::default(),
            slides: None,
        }
    }
}

/// Build the canonical choreography for a section at a viewport size.
///
/// Only the horizontal gallery depends on the viewport (image sizes switch below the mobile
/// breakpoint, and its travel depends on the viewport width).
#[tracing::instrument(level = "trace", skip(kind), fields(kind = kind.name()))]
pub fn recipe(kind: &SectionKind, viewport: Viewport) -> CurtainResult<Recipe> {
    kind.validate()?;
    match kind {
        SectionKind::Monologue { lines, .. } => monologue(lines.len()),
        SectionKind::ParallaxText { .. } => parallax_text(),
        SectionKind::HorizontalGallery { images, .. } => horizontal_gallery(images.len(), viewport),
        SectionKind::ZoomImage { overlay_text, .. } => zoom_image(overlay_text.is_some()),
        SectionKind::TripleImage { .. } => triple_image(),
        SectionKind::FanStory { .. } => fan_story(),
        SectionKind::MasonryGallery { .. } => masonry(),
        SectionKind::ImageReveal { images, .. } => image_reveal(images.len()),
        SectionKind::FinalMessage { lines, .. } => final_message(lines.len()),
        SectionKind::Finale { slides } => finale(slides.len()),
        SectionKind::Video { .. } => Ok(Recipe::new(ScrollOffset::THROUGH)),
        SectionKind::Credits => credits(),
        SectionKind::Divider { style, .. } => divider(*style),
    }
}

/// Default section height in viewport heights.
pub fn default_height_vh(kind: &SectionKind, viewport: Viewport) -> f64 {
    match kind {
        SectionKind::Monologue { .. }
        | SectionKind::ParallaxText { .. }
        | SectionKind::TripleImage { .. }
        | SectionKind::FanStory { .. }
        | SectionKind::ImageReveal { .. }
        | SectionKind::Credits => 1.0,
        SectionKind::HorizontalGallery { .. } => {
            if viewport.is_mobile() {
                2.5
            } else {
                4.0
            }
        }
        SectionKind::ZoomImage { .. } => 3.0,
        SectionKind::MasonryGallery { .. } => 1.5,
        SectionKind::FinalMessage { .. } => 2.0,
        // One viewport of scroll per slide on top of the pinned screen itself.
        SectionKind::Finale { slides } => (slides.len() + 1) as f64,
        SectionKind::Video { .. } => 0.5,
        SectionKind::Divider { style, .. } => match style {
            DividerStyle::Line | DividerStyle::Fade => 0.2,
            DividerStyle::Gradient => 0.3,
        },
    }
}

fn monologue(count: usize) -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    for (i, w) in Stagger::fixed(0.1, 0.12, 0.5).windows(count)?.iter().enumerate() {
        let stops = w.trapezoid(0.08);
        r.choreography.add(
            format!("line.{i}"),
            vec![
                Channel::number(Property::Opacity, &stops, &FADE_IN_OUT)?,
                Channel::number(Property::TranslateY, &stops, &[25.0, 0.0, 0.0, -25.0])?,
                Channel::number(Property::Scale, &stops, &[0.98, 1.0, 1.0, 0.98])?,
                Channel::blur(&stops, &[4.0, 0.0, 0.0, 4.0])?,
            ],
        )?;
    }
    Ok(r)
}

fn parallax_text() -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    r.choreography.add(
        "container",
        vec![Channel::number(Property::Opacity, &FADE_STOPS, &FADE_IN_OUT)?],
    )?;
    Ok(r)
}

fn horizontal_gallery(count: usize, viewport: Viewport) -> CurtainResult<Recipe> {
    let mobile = viewport.is_mobile();
    let (image_width, gap, lead, tail) = if mobile {
        (260.0, 12.0, Length::Vw(3.0), 60.0)
    } else {
        (450.0, 32.0, Length::Vw(10.0), 200.0)
    };
    let n = count as f64;
    let total_width = n * image_width + (n - 1.0).max(0.0) * gap;
    let travel = total_width - viewport.width + tail;

    let mut r = Recipe::new(ScrollOffset::PINNED);
    r.choreography.add(
        "track",
        vec![Channel::length(
            Property::TranslateX,
            &[0.0, 1.0],
            &[lead, Length::Px(-travel)],
        )?],
    )?;
    r.choreography.add(
        "caption",
        vec![Channel::number(
            Property::Opacity,
            &[0.0, 0.1, 0.9, 1.0],
            &FADE_IN_OUT,
        )?],
    )?;
    Ok(r)
}

fn zoom_image(with_text: bool) -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::PINNED);
    r.choreography.add(
        "image",
        vec![
            Channel::number(
                Property::Scale,
                &[0.0, 0.3, 0.6, 0.85],
                &[0.03, 0.3, 1.0, 1.1],
            )?,
            Channel::number(
                Property::Opacity,
                &[0.0, 0.15, 0.5, 0.85, 1.0],
                &[0.0, 0.6, 1.0, 1.0, 0.0],
            )?,
        ],
    )?;
    if with_text {
        r.choreography.add(
            "text",
            vec![
                Channel::number(Property::Opacity, &[0.5, 0.6, 0.75, 0.9], &FADE_IN_OUT)?,
                Channel::number(Property::Scale, &[0.5, 0.65], &[0.9, 1.0])?,
            ],
        )?;
    }
    Ok(r)
}

fn triple_image() -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    r.choreography.add(
        "container",
        vec![Channel::number(Property::Opacity, &FADE_STOPS, &FADE_IN_OUT)?],
    )?;
    let rises = [100.0, 150.0, 120.0];
    let settles = [[0.3, 0.6], [0.35, 0.65], [0.32, 0.62]];
    for (i, (rise, settle)) in rises.iter().zip(settles).enumerate() {
        r.choreography.add(
            format!("image.{i}"),
            vec![
                Channel::number(Property::TranslateY, &[0.0, 0.5], &[*rise, 0.0])?,
                Channel::number(Property::Scale, &settle, &[0.95, 1.0])?,
            ],
        )?;
    }
    Ok(r)
}

fn fan_story() -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    r.choreography.add(
        "grid",
        vec![Channel::number(Property::TranslateY, &[0.0, 1.0], &[100.0, -100.0])?],
    )?;
    r.choreography.add(
        "text",
        vec![
            Channel::number(Property::TranslateY, &[0.0, 1.0], &[50.0, -50.0])?,
            Channel::number(Property::Opacity, &FADE_STOPS, &FADE_IN_OUT)?,
        ],
    )?;
    Ok(r)
}

fn masonry() -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    // The middle column outpaces its neighbours.
    for (i, end) in [-100.0, -300.0, -100.0].into_iter().enumerate() {
        r.choreography.add(
            format!("column.{i}"),
            vec![Channel::number(Property::TranslateY, &[0.0, 1.0], &[0.0, end])?],
        )?;
    }
    Ok(r)
}

fn image_reveal(count: usize) -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    for (i, w) in Stagger::span(0.1, 0.4, 0.3).windows(count)?.iter().enumerate() {
        r.choreography.add(format!("image.{i}"), rise_in(w, 40.0, None)?)?;
    }
    Ok(r)
}

fn final_message(count: usize) -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::ARRIVE);
    r.choreography.add(
        "background",
        vec![
            Channel::number(Property::Scale, &[0.0, 1.0], &[1.1, 1.0])?,
            Channel::number(Property::Opacity, &[0.0, 0.2, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.8])?,
        ],
    )?;
    for (i, w) in Stagger::span(0.2, 0.6, 0.15).windows(count)?.iter().enumerate() {
        r.choreography
            .add(format!("line.{i}"), rise_in(w, 40.0, Some(10.0))?)?;
    }
    Ok(r)
}

fn finale(count: usize) -> CurtainResult<Recipe> {
    let deck = SlideDeck::new(count)?;
    let mut r = Recipe::new(ScrollOffset::PINNED);
    for i in 0..count {
        r.choreography
            .add(format!("slide.{i}"), vec![deck.opacity_channel(i)?])?;
    }
    r.slides = Some(deck);
    Ok(r)
}

fn credits() -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    r.choreography.add(
        "glow",
        vec![Channel::number(
            Property::Opacity,
            &[0.0, 0.3, 0.7, 1.0],
            &[0.0, 1.0, 1.0, 1.0],
        )?],
    )?;
    r.choreography.add(
        "content",
        vec![Channel::number(Property::Scale, &[0.0, 0.5], &[0.9, 1.0])?],
    )?;
    Ok(r)
}

fn divider(style: DividerStyle) -> CurtainResult<Recipe> {
    let mut r = Recipe::new(ScrollOffset::THROUGH);
    if style == DividerStyle::Line {
        r.choreography.add(
            "line",
            vec![
                Channel::length(
                    Property::Width,
                    &[0.2, 0.5],
                    &[Length::Percent(0.0), Length::Percent(60.0)],
                )?,
                Channel::number(Property::Opacity, &[0.2, 0.4, 0.6, 0.8], &FADE_IN_OUT)?,
            ],
        )?;
    }
    Ok(r)
}

// Fade in while rising `rise_px` into place, optionally sharpening from a blur.
fn rise_in(w: &Window, rise_px: f64, blur_px: Option<f64>) -> CurtainResult<Vec<Channel>> {
    let stops = w.ramp();
    let mut channels = vec![
        Channel::number(Property::Opacity, &stops, &[0.0, 1.0])?,
        Channel::number(Property::TranslateY, &stops, &[rise_px, 0.0])?.eased(Ease::REVEAL),
    ];
    if let Some(radius) = blur_px {
        channels.push(Channel::blur(&stops, &[radius, 0.0])?);
    }
    Ok(channels)
}

#[cfg(test)]
#[path = "../../tests/unit/sections/recipes.rs"]
mod tests;

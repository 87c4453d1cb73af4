use super::*;
use crate::{
    choreography::style::StyleValue,
    foundation::core::Progress,
    sections::{content::MediaItem, variant::Variant},
};

fn images(n: usize) -> Vec<MediaItem> {
    (0..n)
        .map(|i| MediaItem::image(format!("img{i}.jpg"), format!("image {i}")))
        .collect()
}

fn lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("line {i}")).collect()
}

#[test]
fn monologue_lines_follow_trapezoid() {
    let kind = SectionKind::Monologue {
        lines: lines(3),
        variant: Variant::Dark,
    };
    let r = recipe(&kind, Viewport::default()).unwrap();
    assert_eq!(r.offset, ScrollOffset::THROUGH);
    assert_eq!(r.choreography.elements().len(), 3);

    let vp = Viewport::default();
    let before = r.choreography.compute_styles(Progress::new(0.05), vp);
    let line0 = before.get("line.0").unwrap();
    assert_eq!(line0.opacity(), 0.0);
    assert_eq!(line0.get(Property::TranslateY), Some(&StyleValue::Number(25.0)));
    assert_eq!(line0.to_css(), "opacity: 0; transform: translateY(25px) scale(0.98); filter: blur(4px)");

    let held = r.choreography.compute_styles(Progress::new(0.35), vp);
    assert_eq!(held.get("line.0").unwrap().opacity(), 1.0);
    // line 2 starts at 0.34 and is still ramping in.
    let o2 = held.get("line.2").unwrap().opacity();
    assert!(o2 > 0.0 && o2 < 1.0);
}

#[test]
fn horizontal_gallery_travel_depends_on_viewport() {
    let kind = SectionKind::HorizontalGallery {
        images: images(8),
        description: None,
        title: None,
        link_text: None,
    };
    let desktop = Viewport::new(1440.0, 900.0).unwrap();
    let r = recipe(&kind, desktop).unwrap();
    assert_eq!(r.offset, ScrollOffset::PINNED);
    let start = r.choreography.compute_styles(Progress::ZERO, desktop);
    let end = r.choreography.compute_styles(Progress::ONE, desktop);
    assert_eq!(
        start.get("track").unwrap().get(Property::TranslateX),
        Some(&StyleValue::Length(Length::Vw(10.0)))
    );
    // 8 * 450 + 7 * 32 - 1440 + 200
    assert_eq!(
        end.get("track").unwrap().get(Property::TranslateX),
        Some(&StyleValue::Length(Length::Px(-2584.0)))
    );

    let phone = Viewport::new(390.0, 844.0).unwrap();
    let r = recipe(&kind, phone).unwrap();
    let end = r.choreography.compute_styles(Progress::ONE, phone);
    // 8 * 260 + 7 * 12 - 390 + 60
    assert_eq!(
        end.get("track").unwrap().get(Property::TranslateX),
        Some(&StyleValue::Length(Length::Px(-1834.0)))
    );
    assert_eq!(default_height_vh(&kind, phone), 2.5);
    assert_eq!(default_height_vh(&kind, desktop), 4.0);
}

#[test]
fn zoom_text_only_with_overlay() {
    let plain = SectionKind::ZoomImage {
        image: MediaItem::image("a.jpg", "a"),
        overlay_text: None,
        sub_text: None,
    };
    let r = recipe(&plain, Viewport::default()).unwrap();
    assert!(r.choreography.element("text").is_none());

    let with_text = SectionKind::ZoomImage {
        image: MediaItem::image("a.jpg", "a"),
        overlay_text: Some("hello".into()),
        sub_text: None,
    };
    let r = recipe(&with_text, Viewport::default()).unwrap();
    let frame = r.choreography.compute_styles(Progress::new(0.6), Viewport::default());
    assert_eq!(frame.get("image").unwrap().get(Property::Scale), Some(&StyleValue::Number(1.0)));
    assert_eq!(frame.get("text").unwrap().opacity(), 1.0);
}

#[test]
fn finale_exposes_slide_deck() {
    let kind = SectionKind::Finale { slides: images(6) };
    let r = recipe(&kind, Viewport::default()).unwrap();
    let deck = r.slides.unwrap();
    assert_eq!(deck.active_index(Progress::new(0.83)), 4);
    assert_eq!(r.choreography.elements().len(), 6);
    assert_eq!(default_height_vh(&kind, Viewport::default()), 7.0);
}

#[test]
fn single_slide_finale_still_has_scroll_room() {
    let kind = SectionKind::Finale { slides: images(1) };
    assert_eq!(default_height_vh(&kind, Viewport::default()), 2.0);
    let r = recipe(&kind, Viewport::default()).unwrap();
    let mid = r.choreography.compute_styles(Progress::new(0.5), Viewport::default());
    assert_eq!(mid.get("slide.0").unwrap().opacity(), 1.0);
}

#[test]
fn final_message_lines_sharpen_in_sequence() {
    let kind = SectionKind::FinalMessage {
        background_image: None,
        lines: lines(6),
    };
    let r = recipe(&kind, Viewport::default()).unwrap();
    assert_eq!(r.offset, ScrollOffset::ARRIVE);
    let frame = r.choreography.compute_styles(Progress::new(0.2), Viewport::default());
    let first = frame.get("line.0").unwrap();
    assert_eq!(first.opacity(), 0.0);
    assert_eq!(first.get(Property::Blur).unwrap().to_string(), "blur(10px)");
    let done = r.choreography.compute_styles(Progress::ONE, Viewport::default());
    assert_eq!(done.get("line.5").unwrap().opacity(), 1.0);
    assert_eq!(done.get("background").unwrap().opacity(), 0.8);
}

#[test]
fn reveal_rise_settles_ahead_of_the_fade() {
    let kind = SectionKind::ImageReveal {
        images: images(2),
        layout: Default::default(),
    };
    let r = recipe(&kind, Viewport::default()).unwrap();
    // image 0 spans [0.1, 0.4]; halfway through, the fade is linear but the rise is eased.
    let mid = r.choreography.compute_styles(Progress::new(0.25), Viewport::default());
    let image = mid.get("image.0").unwrap();
    assert!((image.opacity() - 0.5).abs() < 1e-9);
    match image.get(Property::TranslateY) {
        Some(StyleValue::Number(y)) => assert!(*y > 0.0 && *y < 20.0, "{y}"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn divider_line_grows_in_percent() {
    let kind = SectionKind::Divider {
        style: DividerStyle::Line,
        from: None,
        to: None,
    };
    let r = recipe(&kind, Viewport::default()).unwrap();
    let frame = r.choreography.compute_styles(Progress::new(0.5), Viewport::default());
    assert_eq!(frame.get("line").unwrap().to_css(), "opacity: 1; width: 60%");

    let gradient = SectionKind::Divider {
        style: DividerStyle::Gradient,
        from: None,
        to: None,
    };
    assert!(recipe(&gradient, Viewport::default()).unwrap().choreography.is_empty());
}

#[test]
fn every_kind_builds() {
    let vp = Viewport::default();
    let kinds = [
        SectionKind::ParallaxText {
            heading: Some("h".into()),
            lines: lines(2),
            alignment: Default::default(),
            variant: Variant::Purple,
        },
        SectionKind::TripleImage {
            images: images(3),
            top_text: None,
            bottom_text: None,
            title: None,
        },
        SectionKind::FanStory {
            images: images(4),
            top_text: None,
            bottom_text: None,
        },
        SectionKind::MasonryGallery {
            images: images(10),
            title: None,
            subtitle: None,
        },
        SectionKind::ImageReveal {
            images: images(3),
            layout: Default::default(),
        },
        SectionKind::Video {
            src: "v.mp4".into(),
            poster: None,
            title: None,
        },
        SectionKind::Credits,
    ];
    for kind in &kinds {
        let r = recipe(kind, vp).unwrap();
        let _ = r.choreography.compute_styles(Progress::new(0.5), vp);
        assert!(default_height_vh(kind, vp) > 0.0);
    }
}

#[test]
fn invalid_content_fails_recipe() {
    let kind = SectionKind::FinalMessage {
        background_image: None,
        lines: vec![],
    };
    assert!(recipe(&kind, Viewport::default()).is_err());
}

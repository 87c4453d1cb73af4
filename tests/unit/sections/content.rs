use super::*;

#[test]
fn deserializes_tagged_sections() {
    let kind: SectionKind = serde_json::from_str(
        r#"{"kind":"monologue","lines":["a","b"],"variant":"bright-purple"}"#,
    )
    .unwrap();
    assert_eq!(kind.name(), "monologue");
    assert_eq!(kind.variant(), Variant::BrightPurple);
    assert_eq!(kind.item_count(), 2);

    let credits: SectionKind = serde_json::from_str(r#"{"kind":"credits"}"#).unwrap();
    assert_eq!(credits, SectionKind::Credits);
}

#[test]
fn media_accepts_type_alias() {
    let item: MediaItem =
        serde_json::from_str(r#"{"src":"clip.mp4","alt":"clip","type":"video"}"#).unwrap();
    assert_eq!(item.kind, MediaKind::Video);
    assert_eq!(item.ratio, None);
}

#[test]
fn validation_checks_counts() {
    let empty = SectionKind::Monologue {
        lines: vec![],
        variant: Variant::Default,
    };
    assert!(empty.validate().unwrap_err().to_string().contains("at least one line"));

    let two = SectionKind::TripleImage {
        images: vec![MediaItem::image("a.jpg", "a"), MediaItem::image("b.jpg", "b")],
        top_text: None,
        bottom_text: None,
        title: None,
    };
    assert!(two.validate().is_err());

    let gallery = SectionKind::MasonryGallery {
        images: vec![],
        title: None,
        subtitle: None,
    };
    assert!(gallery.validate().is_err());
}

#[test]
fn validation_checks_media() {
    let bad_ratio = SectionKind::ZoomImage {
        image: MediaItem::image("a.jpg", "a").with_ratio(0.0),
        overlay_text: None,
        sub_text: None,
    };
    assert!(bad_ratio.validate().is_err());

    let blank = SectionKind::Finale {
        slides: vec![MediaItem::image(" ", "blank")],
    };
    assert!(blank.validate().is_err());

    assert!(SectionKind::Credits.validate().is_ok());
}

#[test]
fn palettes_follow_variant() {
    assert_eq!(Variant::Purple.text(), Rgba8::WHITE);
    assert_ne!(Variant::Dark.background(), Variant::DeepPurple.background());
}

use super::*;
use crate::sections::variant::Variant;

fn page_json() -> &'static str {
    r#"{
        "title": "t",
        "sections": [
            {"id": "intro", "kind": "monologue", "lines": ["a", "b"]},
            {"id": "zoom", "kind": "zoom_image", "height_vh": 2.5,
             "image": {"src": "z.jpg", "alt": "z"}},
            {"id": "end", "kind": "credits"}
        ],
        "navigation": [{"id": "top", "title": "Top", "offset": 0.0}],
        "music": {"instrumental": "mr.mp3", "vocal": "vocal.mp3"}
    }"#
}

#[test]
fn parses_and_validates() {
    let page = Page::from_json(page_json()).unwrap();
    assert_eq!(page.sections.len(), 3);
    assert_eq!(page.sections[1].height_vh, Some(2.5));
    assert_eq!(page.music.as_ref().unwrap().volume, 0.3);
    match &page.section("intro").unwrap().kind {
        SectionKind::Monologue { variant, .. } => assert_eq!(*variant, Variant::Default),
        other => panic!("unexpected {other:?}"),
    }
    assert!(page.chapter("top").is_some());
}

#[test]
fn round_trips_through_json() {
    let page = Page::from_json(page_json()).unwrap();
    let back = Page::from_json(&page.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, page);
}

#[test]
fn rejects_duplicate_ids() {
    let mut page = Page::from_json(page_json()).unwrap();
    page.sections[2].id = "intro".into();
    assert!(page.validate().unwrap_err().to_string().contains("duplicate section id"));
}

#[test]
fn rejects_bad_chapter_and_volume() {
    let mut page = Page::from_json(page_json()).unwrap();
    page.navigation[0].offset = 1.5;
    assert!(page.validate().is_err());

    let mut page = Page::from_json(page_json()).unwrap();
    page.music.as_mut().unwrap().volume = -0.1;
    assert!(page.validate().is_err());
}

#[test]
fn pinned_sections_need_more_than_one_viewport() {
    let mut page = Page::from_json(page_json()).unwrap();
    page.sections[1].height_vh = Some(1.0);
    let err = page.validate().unwrap_err();
    assert!(matches!(err, CurtainError::Validation(_)));
    assert!(err.to_string().contains("section 'zoom' is pinned"), "{err}");

    // Sections that track their whole pass through the viewport may be short.
    let mut page = Page::from_json(page_json()).unwrap();
    page.sections[0].height_vh = Some(0.5);
    page.validate().unwrap();
}

#[test]
fn section_errors_name_the_section() {
    let mut page = Page::from_json(page_json()).unwrap();
    page.sections[0].kind = SectionKind::Monologue {
        lines: vec![],
        variant: Variant::Dark,
    };
    let err = page.validate().unwrap_err();
    assert!(err.to_string().contains("section 'intro'"));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Page::from_json(r#"{"sections": [{"id": "x", "kind": "sideways"}]}"#).unwrap_err();
    assert!(matches!(err, CurtainError::Serde(_)));
}

#[test]
fn empty_page_is_rejected() {
    assert!(Page::from_json(r#"{"sections": []}"#).is_err());
}

#[test]
fn missing_file_is_reported() {
    let err = Page::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("read page"));
}

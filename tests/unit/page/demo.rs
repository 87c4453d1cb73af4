use super::*;

#[test]
fn demo_page_is_valid() {
    let page = demo_page().unwrap();
    page.validate().unwrap();
    assert_eq!(page.navigation.len(), 6);
    assert!(page.music.is_some());
}

#[test]
fn demo_covers_most_section_kinds() {
    let page = demo_page().unwrap();
    let kinds: std::collections::BTreeSet<_> = page.sections.iter().map(|s| s.kind.name()).collect();
    for k in ["monologue", "horizontal_gallery", "zoom_image", "finale", "final_message", "credits"] {
        assert!(kinds.contains(k), "missing {k}");
    }
}

#[test]
fn chapter_ids_point_at_sections() {
    let page = demo_page().unwrap();
    for ch in &page.navigation {
        assert!(page.section(&ch.id).is_some(), "chapter {} has no section", ch.id);
    }
}

use super::*;
use crate::{
    page::{demo::demo_page, dsl::PageBuilder},
    sections::content::{MediaItem, SectionKind},
};

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0).unwrap()
}

fn stage() -> Stage {
    Stage::mount(demo_page().unwrap(), desktop()).unwrap()
}

#[test]
fn mount_subscribes_every_section_and_the_document() {
    let stage = stage();
    assert_eq!(stage.hub().listener_count(), stage.page().sections.len() + 1);
    assert!(stage.is_mounted("landing"));
    assert_eq!(stage.hub().ticks(), 1);
}

#[test]
fn tick_reports_visible_sections_in_order() {
    let mut stage = stage();
    let frame = stage.tick(0.0);
    assert_eq!(frame.sections.len(), stage.page().sections.len());
    assert_eq!(frame.document_progress, Progress::ZERO);
    assert!(frame.section("landing").unwrap().visible);
    assert!(!frame.section("credits").unwrap().visible);
    assert_eq!(frame.background.get("warm").unwrap().opacity(), 1.0);
    let visible: Vec<_> = frame.visible_sections().map(|s| s.id.as_str()).collect();
    assert_eq!(visible, ["landing"]);
}

#[test]
fn progress_follows_scroll() {
    let mut stage = stage();
    let bounds = stage.layout().bounds("opening").unwrap();
    // Halfway through: section center at viewport center.
    let mid = bounds.y0 + bounds.height() / 2.0 - 450.0;
    stage.tick(mid);
    assert_eq!(stage.section_progress("opening").unwrap().get(), 0.5);

    let end = stage.layout().max_scroll();
    let frame = stage.tick(end);
    assert_eq!(frame.document_progress, Progress::ONE);
    assert_eq!(frame.background.get("final").unwrap().opacity(), 1.0);
}

#[test]
fn overscroll_is_clamped() {
    let mut stage = stage();
    let frame = stage.tick(-500.0);
    assert_eq!(frame.document_progress, Progress::ZERO);
    let frame = stage.tick(1e9);
    assert_eq!(frame.document_progress, Progress::ONE);
    assert!(frame.sections.iter().all(|s| s.progress == Progress::ONE));
}

#[test]
fn finale_reports_active_slide() {
    let mut stage = stage();
    let bounds = stage.layout().bounds("finale").unwrap();
    // Pinned: progress 0 at the section top, 1 when its bottom meets the viewport bottom.
    let frame = stage.tick(bounds.y0 + 0.83 * (bounds.height() - 900.0));
    let finale = frame.section("finale").unwrap();
    assert_eq!(finale.active_slide, Some(4));
    assert!(frame.section("credits").unwrap().active_slide.is_none());
}

#[test]
fn single_slide_finale_fades_in_while_pinned() {
    let page = PageBuilder::new("bow")
        .section("before", SectionKind::Credits)
        .unwrap()
        .section(
            "finale",
            SectionKind::Finale {
                slides: vec![MediaItem::image("bow.jpg", "bow")],
            },
        )
        .unwrap()
        .section("after", SectionKind::Credits)
        .unwrap()
        .build()
        .unwrap();
    let mut stage = Stage::mount(page, desktop()).unwrap();
    let bounds = stage.layout().bounds("finale").unwrap();
    assert!(bounds.height() > 900.0);

    let frame = stage.tick(bounds.y0 + 0.5 * (bounds.height() - 900.0));
    let finale = frame.section("finale").unwrap();
    assert!(finale.progress.get() > 0.0);
    assert_eq!(finale.active_slide, Some(0));
    assert!(finale.styles.get("slide.0").unwrap().opacity() > 0.0);
}

#[test]
fn unmount_and_remount() {
    let mut stage = stage();
    let before = stage.hub().listener_count();
    assert!(stage.unmount("fans"));
    assert!(!stage.unmount("fans"));
    assert_eq!(stage.hub().listener_count(), before - 1);
    assert!(stage.tick(0.0).section("fans").is_none());

    stage.mount_section("fans").unwrap();
    assert_eq!(stage.hub().listener_count(), before);
    let frame = stage.tick(0.0);
    let ids: Vec<_> = frame.sections.iter().map(|s| s.id.as_str()).collect();
    let expected: Vec<_> = stage.page().sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, expected);

    assert!(stage.mount_section("fans").is_err());
    assert!(stage.mount_section("nope").is_err());
}

#[test]
fn resize_relayouts_and_retargets() {
    let mut stage = stage();
    let desktop_height = stage.layout().document_height;
    stage.resize(Viewport::new(390.0, 844.0).unwrap()).unwrap();
    assert_ne!(stage.layout().document_height, desktop_height);
    assert_eq!(stage.hub().listener_count(), stage.page().sections.len() + 1);

    let bounds = stage.layout().bounds("gallery").unwrap();
    assert_eq!(bounds.height(), 2.5 * 844.0);
    stage.tick(bounds.y0);
    assert_eq!(stage.section_progress("gallery"), Some(Progress::ZERO));
}

#[test]
fn identical_ticks_give_identical_frames() {
    let mut a = stage();
    let mut b = stage();
    for y in [0.0, 1234.5, 8000.0, 20_000.0] {
        assert_eq!(a.tick(y), b.tick(y));
    }
}

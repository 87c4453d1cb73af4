use super::*;

fn chapters() -> Vec<NavChapter> {
    [("landing", 0.0), ("story", 0.1), ("finale", 0.75)]
        .into_iter()
        .map(|(id, offset)| NavChapter {
            id: id.to_owned(),
            title: id.to_uppercase(),
            offset,
        })
        .collect()
}

#[test]
fn menu_toggles_and_locks_scroll() {
    let mut nav = Navigation::new(chapters());
    assert!(!nav.menu().scroll_locked());
    assert_eq!(nav.toggle_menu(), MenuState::Open);
    assert!(nav.menu().scroll_locked());
    assert_eq!(nav.toggle_menu(), MenuState::Closed);
    nav.close_menu();
    assert_eq!(nav.menu(), MenuState::Closed);
}

#[test]
fn select_targets_fraction_of_document_and_closes() {
    let mut nav = Navigation::new(chapters());
    nav.toggle_menu();
    let cmd = nav.select("finale", 20_000.0).unwrap();
    assert_eq!(cmd.target, 15_000.0);
    assert_eq!(nav.menu(), MenuState::Closed);
}

#[test]
fn unknown_chapter_is_ignored() {
    let mut nav = Navigation::new(chapters());
    nav.toggle_menu();
    assert!(nav.select("nope", 1000.0).is_none());
    assert!(nav.menu().is_open());
}

#[test]
fn back_to_top_appears_past_half_viewport() {
    let nav = Navigation::new(chapters());
    let vp = Viewport::new(1440.0, 900.0).unwrap();
    assert!(!nav.back_to_top_visible(0.0, vp));
    assert!(!nav.back_to_top_visible(450.0, vp));
    assert!(nav.back_to_top_visible(451.0, vp));
    assert_eq!(nav.back_to_top().target, 0.0);
}

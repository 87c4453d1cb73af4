use super::*;

fn state(scroll_y: f64) -> ScrollState {
    ScrollState::new(scroll_y, Viewport::new(1440.0, 900.0).unwrap(), 6000.0)
}

fn section() -> ScrollTracker {
    ScrollTracker::element(Rect::new(0.0, 1000.0, 1440.0, 1900.0), ScrollOffset::THROUGH)
}

#[test]
fn element_progress_through_viewport() {
    // enters at 1000 - 900 = 100, leaves at 1900.
    let t = section();
    assert_eq!(t.extent(&state(0.0)), (100.0, 1900.0));
    assert_eq!(t.progress(&state(100.0)), Progress::ZERO);
    assert_eq!(t.progress(&state(1000.0)).get(), 0.5);
    assert_eq!(t.progress(&state(1900.0)), Progress::ONE);
}

#[test]
fn overscroll_is_clamped() {
    let t = section();
    assert_eq!(t.progress(&state(-400.0)), Progress::ZERO);
    assert_eq!(t.progress(&state(50_000.0)), Progress::ONE);
}

#[test]
fn pinned_offset_tracks_sticky_range() {
    let t = ScrollTracker::element(
        Rect::new(0.0, 900.0, 1440.0, 900.0 + 4.0 * 900.0),
        ScrollOffset::PINNED,
    );
    // start start: 900; end end: 4500 - 900 = 3600.
    assert_eq!(t.extent(&state(0.0)), (900.0, 3600.0));
    assert_eq!(t.progress(&state(2250.0)).get(), 0.5);
}

#[test]
fn document_progress() {
    let t = ScrollTracker::document();
    assert_eq!(t.progress(&state(0.0)), Progress::ZERO);
    assert_eq!(t.progress(&state(2550.0)).get(), 0.5);
    assert_eq!(t.progress(&state(5100.0)), Progress::ONE);
}

#[test]
fn zero_extent_reads_zero() {
    let short = ScrollState::new(300.0, Viewport::new(1440.0, 900.0).unwrap(), 900.0);
    assert_eq!(ScrollTracker::document().progress(&short), Progress::ZERO);

    let flat = ScrollTracker::element(
        Rect::new(0.0, 500.0, 1440.0, 500.0),
        ScrollOffset::PINNED,
    );
    for y in [0.0, 500.0, 10_000.0] {
        assert_eq!(flat.progress(&state(y)), Progress::ZERO);
    }
}

#[test]
fn progress_is_monotonic_in_scroll() {
    let t = section();
    let mut prev = Progress::ZERO;
    for y in (0..2500).step_by(7) {
        let p = t.progress(&state(f64::from(y)));
        assert!(p >= prev);
        prev = p;
    }
}

use super::*;
use crate::foundation::core::Viewport;

#[test]
fn active_index_floors_progress() {
    let deck = SlideDeck::new(6).unwrap();
    assert_eq!(deck.active_index(Progress::new(0.83)), 4);
    assert_eq!(deck.active_index(Progress::ZERO), 0);
    assert_eq!(deck.active_index(Progress::ONE), 5);
}

#[test]
fn windows_partition_unit_range() {
    let deck = SlideDeck::new(4).unwrap();
    assert_eq!(deck.window(0).unwrap().start, 0.0);
    assert_eq!(deck.window(3).unwrap().end, 1.0);
    for i in 0..3 {
        assert_eq!(deck.window(i).unwrap().end, deck.window(i + 1).unwrap().start);
    }
    assert!(deck.window(4).is_none());
}

#[test]
fn slide_opacity_is_symmetric_trapezoid() {
    let deck = SlideDeck::new(2).unwrap();
    let ch = deck.opacity_channel(1).unwrap();
    let vp = Viewport::default();
    let at = |p: f64| ch.sample(p, vp).as_f64(vp).unwrap();
    assert_eq!(at(0.5), 0.0);
    assert_eq!(at(0.625), 1.0);
    assert_eq!(at(0.75), 1.0);
    assert_eq!(at(1.0), 0.0);
    assert!((at(0.5625) - 0.5).abs() < 1e-9);
    assert!(deck.opacity_channel(2).is_err());
}

#[test]
fn empty_deck_is_rejected() {
    assert!(SlideDeck::new(0).is_err());
}

use super::*;

#[test]
fn release_returns_a_paused_element() {
    let mut handle = MediaHandle::acquire(HeadlessMedia::new());
    handle.element_mut().play().unwrap();
    assert!(!handle.element().is_paused());
    let el = handle.release();
    assert!(el.is_paused());
}

#[test]
fn toggle_walks_between_states() {
    let mut el = HeadlessMedia::new();
    let s = PlaybackState::Paused.toggle(&mut el);
    assert_eq!(s, PlaybackState::Playing);
    assert!(!el.is_paused());
    let s = s.toggle(&mut el);
    assert_eq!(s, PlaybackState::Paused);
    assert!(el.is_paused());
}

#[test]
fn rejected_play_stays_paused() {
    let mut el = HeadlessMedia::new().rejecting("NotAllowedError");
    assert_eq!(PlaybackState::Paused.toggle(&mut el), PlaybackState::Paused);
    assert!(el.is_paused());

    el.allow_play();
    assert_eq!(PlaybackState::start(&mut el), PlaybackState::Playing);
}

#[test]
fn rejection_message_names_reason() {
    let err = PlaybackRejected::new("autoplay blocked");
    assert_eq!(err.to_string(), "playback rejected: autoplay blocked");
}

#[test]
fn headless_clock_ends_or_loops() {
    let mut el = HeadlessMedia::new().with_duration(10.0);
    el.play().unwrap();
    assert!(!el.advance(4.0));
    assert_eq!(el.current_time(), 4.0);
    assert!(el.advance(10.0));
    assert!(el.has_ended());
    assert!(el.is_paused());
    assert_eq!(el.current_time(), 10.0);

    // replay restarts from zero
    el.play().unwrap();
    assert_eq!(el.current_time(), 0.0);

    el.set_looping(true);
    assert!(!el.advance(12.0));
    assert!((el.current_time() - 2.0).abs() < 1e-9);
}

#[test]
fn paused_clock_does_not_move() {
    let mut el = HeadlessMedia::new();
    el.advance(5.0);
    assert_eq!(el.current_time(), 0.0);
}

#[test]
fn set_source_resets_position() {
    let mut el = HeadlessMedia::new();
    el.set_source("a.mp3");
    el.set_current_time(30.0);
    el.set_source("b.mp3");
    assert_eq!(el.source(), Some("b.mp3"));
    assert_eq!(el.current_time(), 0.0);
}

use super::*;
use crate::playback::media::HeadlessMedia;

fn config() -> MusicConfig {
    MusicConfig {
        instrumental: "bgm_mr.mp3".to_owned(),
        vocal: "bgm_vocal.mp3".to_owned(),
        volume: 0.3,
    }
}

fn music(el: HeadlessMedia) -> BackgroundMusic<HeadlessMedia> {
    BackgroundMusic::new(MediaHandle::acquire(el), config())
}

#[test]
fn acquire_loads_instrumental_looping() {
    let m = music(HeadlessMedia::new());
    assert_eq!(m.element().source(), Some("bgm_mr.mp3"));
    assert!(m.element().is_looping());
    assert_eq!(m.element().volume(), 0.3);
    assert_eq!(m.state(), PlaybackState::Paused);
    assert_eq!(m.track(), Track::Instrumental);
    assert!(m.prompt_visible());
}

#[test]
fn toggle_play_dismisses_prompt() {
    let mut m = music(HeadlessMedia::new());
    assert_eq!(m.toggle_play(), PlaybackState::Playing);
    assert!(!m.prompt_visible());
    assert_eq!(m.toggle_play(), PlaybackState::Paused);
}

#[test]
fn rejected_play_is_not_an_error() {
    let mut m = music(HeadlessMedia::new().rejecting("NotAllowedError"));
    assert_eq!(m.toggle_play(), PlaybackState::Paused);
    assert!(m.element().is_paused());
    assert!(!m.prompt_visible());
}

#[test]
fn volume_is_clamped() {
    let mut m = music(HeadlessMedia::new());
    m.set_volume(1.7);
    assert_eq!(m.volume(), 1.0);
    assert_eq!(m.element().volume(), 1.0);
    m.set_volume(-0.2);
    assert_eq!(m.element().volume(), 0.0);
    m.set_volume(0.55);
    assert_eq!(m.element().volume(), 0.55);
}

#[test]
fn track_switch_keeps_position_and_playing() {
    let mut m = music(HeadlessMedia::new().with_duration(240.0));
    m.toggle_play();
    m.element_mut().advance(42.0);

    assert_eq!(m.toggle_track(), Track::Vocal);
    assert_eq!(m.element().source(), Some("bgm_vocal.mp3"));
    assert_eq!(m.element().current_time(), 42.0);
    assert!(!m.element().is_paused());
    assert_eq!(m.state(), PlaybackState::Playing);

    assert_eq!(m.toggle_track(), Track::Instrumental);
    assert_eq!(m.element().source(), Some("bgm_mr.mp3"));
    assert_eq!(m.element().current_time(), 42.0);
}

#[test]
fn track_switch_while_paused_stays_paused() {
    let mut m = music(HeadlessMedia::new());
    m.toggle_track();
    assert_eq!(m.track(), Track::Vocal);
    assert_eq!(m.state(), PlaybackState::Paused);
    assert!(m.element().is_paused());
}

#[test]
fn prompt_hides_after_countdown() {
    let mut m = music(HeadlessMedia::new());
    m.advance(5.0);
    assert!(m.prompt_visible());
    m.advance(3.0);
    assert!(!m.prompt_visible());
    // does not reappear
    m.advance(-10.0);
    assert!(!m.prompt_visible());
}

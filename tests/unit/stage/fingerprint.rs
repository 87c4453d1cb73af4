use super::*;
use crate::{foundation::core::Viewport, page::demo::demo_page, stage::runtime::Stage};

fn stage() -> Stage {
    Stage::mount(demo_page().unwrap(), Viewport::new(1440.0, 900.0).unwrap()).unwrap()
}

#[test]
fn same_scroll_same_fingerprint() {
    let mut a = stage();
    let mut b = stage();
    let fa = fingerprint_snapshot(&a.tick(3210.0));
    let fb = fingerprint_snapshot(&b.tick(3210.0));
    assert_eq!(fa, fb);
}

#[test]
fn scrolling_changes_fingerprint() {
    let mut s = stage();
    let f0 = fingerprint_snapshot(&s.tick(0.0));
    let f1 = fingerprint_snapshot(&s.tick(2500.0));
    assert_ne!(f0, f1);
    // returning reproduces the first frame
    assert_eq!(fingerprint_snapshot(&s.tick(0.0)), f0);
}

#[test]
fn display_is_32_hex_digits() {
    let f = FrameFingerprint { hi: 1, lo: 0xab };
    assert_eq!(f.to_string(), "000000000000000100000000000000ab");
}

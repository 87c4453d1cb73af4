use super::*;
use serde_json::json;

#[test]
fn progress_clamps_overscroll_and_nan() {
    assert_eq!(Progress::new(-0.2).get(), 0.0);
    assert_eq!(Progress::new(1.7).get(), 1.0);
    assert_eq!(Progress::new(0.25).get(), 0.25);
    assert_eq!(Progress::new(f64::NAN), Progress::ZERO);
}

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 900.0).is_err());
    assert!(Viewport::new(1440.0, -1.0).is_err());
    assert!(Viewport::new(f64::INFINITY, 900.0).is_err());
    let vp = Viewport::new(390.0, 844.0).unwrap();
    assert!(vp.is_mobile());
    assert!(!Viewport::default().is_mobile());
}

#[test]
fn viewport_rect_follows_scroll() {
    let vp = Viewport::new(100.0, 50.0).unwrap();
    assert_eq!(vp.rect_at(200.0), Rect::new(0.0, 200.0, 100.0, 250.0));
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 128));

    assert!(serde_json::from_value::<Rgba8>(json!("#abc")).is_err());
}

#[test]
fn parses_object_and_array_forms() {
    let c: Rgba8 = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));

    let c: Rgba8 = serde_json::from_value(json!([0.0, 0.0, 1.0, 0.0])).unwrap();
    assert_eq!(c, Rgba8::rgba(0, 0, 255, 0));

    let c: Rgba8 = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert_eq!(c, Rgba8::rgb(255, 0, 0));
}

#[test]
fn hex_serialization_roundtrips() {
    let c = Rgba8::rgba(12, 34, 56, 78);
    let s = serde_json::to_value(c).unwrap();
    assert_eq!(s, json!("#0c22384e"));
    let back: Rgba8 = serde_json::from_value(s).unwrap();
    assert_eq!(back, c);
}

#[test]
fn css_and_premul_formats() {
    assert_eq!(Rgba8::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    assert_eq!(Rgba8::rgba(200, 100, 0, 0).to_premul_bytes(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::WHITE.to_premul_bytes(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::WHITE.with_opacity(0.0).a, 0);
}

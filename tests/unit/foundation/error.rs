use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CurtainError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CurtainError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        CurtainError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        CurtainError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CurtainError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_kind() {
    let err: CurtainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CurtainError::Serde(_)));
}

#[test]
fn within_keeps_kind() {
    let err = CurtainError::animation("stops unsorted").within("section 'intro'");
    assert!(matches!(err, CurtainError::Animation(_)));
    assert_eq!(
        err.to_string(),
        "animation error: section 'intro': stops unsorted"
    );
}

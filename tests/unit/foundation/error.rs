use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AnimarkError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(
        AnimarkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AnimarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_invalid_parameter());
}

#[test]
fn serde_json_errors_convert() {
    let err: AnimarkError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, AnimarkError::Serde(_)));
}

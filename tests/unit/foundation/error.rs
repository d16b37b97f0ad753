use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BihuaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BihuaError::dataset("x")
            .to_string()
            .contains("dataset error:")
    );
    assert!(BihuaError::render("x").to_string().contains("render error:"));
    assert!(BihuaError::encode("x").to_string().contains("encode error:"));
    assert!(
        BihuaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BihuaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

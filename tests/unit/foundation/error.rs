use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DogfieldError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DogfieldError::render("x").to_string().contains("render error:"));
    assert!(DogfieldError::encode("x").to_string().contains("encode error:"));
    assert!(
        DogfieldError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DogfieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

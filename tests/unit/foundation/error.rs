use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ArboraError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ArboraError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ArboraError::scheduling("x")
            .to_string()
            .contains("scheduling error:")
    );
    assert!(
        ArboraError::scene("x")
            .to_string()
            .contains("scene sink error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ArboraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

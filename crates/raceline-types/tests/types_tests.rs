//! Integration tests for raceline-types.

use raceline_types::{MaterialId, RacelineError};

#[test]
fn material_ids_index_as_usize() {
    assert_eq!(MaterialId::from(2u16).index(), 2);
    assert_eq!(MaterialId(7).index(), 7);
}

#[test]
fn error_messages_carry_context() {
    let err = RacelineError::InvalidGraph("Quad 4 is not reachable from the start".into());
    assert!(err.to_string().contains("Quad 4"));

    let err = RacelineError::UnsupportedVersion {
        found: 9,
        min: 1,
        max: 2,
    };
    let msg = err.to_string();
    assert!(msg.contains('9'));
    assert!(msg.contains("1..=2"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: RacelineError = io.into();
    assert!(matches!(err, RacelineError::Io(_)));
}

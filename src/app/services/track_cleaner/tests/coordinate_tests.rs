//! Tests for hemisphere coordinate parsing

use crate::app::services::track_cleaner::coordinates::{parse_latitude, parse_longitude};
use crate::error::HurdatError;

#[test]
fn test_longitude_sign_convention() {
    assert_eq!(parse_longitude("80.5W", 1).unwrap(), -80.5);
    assert_eq!(parse_longitude("80.5E", 1).unwrap(), 80.5);
}

#[test]
fn test_latitude_sign_convention() {
    assert_eq!(parse_latitude("20.0S", 1).unwrap(), -20.0);
    assert_eq!(parse_latitude("20.0N", 1).unwrap(), 20.0);
}

#[test]
fn test_whitespace_tolerated() {
    assert_eq!(parse_latitude(" 28.0N", 1).unwrap(), 28.0);
}

#[test]
fn test_unknown_hemisphere_is_parse_error() {
    let result = parse_longitude("80.5X", 7);

    match result {
        Err(HurdatError::Parse {
            field: "Longitude",
            record_number,
            ..
        }) => assert_eq!(record_number, 7),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_latitude_rejects_longitude_hemispheres() {
    assert!(parse_latitude("28.0W", 1).is_err());
    assert!(parse_longitude("94.8N", 1).is_err());
}

#[test]
fn test_bad_magnitude_is_parse_error() {
    assert!(matches!(
        parse_latitude("northN", 1),
        Err(HurdatError::Parse { .. })
    ));
}

#[test]
fn test_empty_value_is_parse_error() {
    assert!(parse_latitude("", 1).is_err());
}

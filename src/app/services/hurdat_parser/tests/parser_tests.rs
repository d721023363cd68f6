//! Tests for line classification

use super::create_test_hurdat;
use crate::app::services::hurdat_parser::parser::classify_lines;
use crate::error::HurdatError;

#[test]
fn test_classification_preserves_order_and_counts() {
    let classified = classify_lines(&create_test_hurdat(), "AL").unwrap();

    assert_eq!(classified.header_lines.len(), 2);
    assert_eq!(classified.track_lines.len(), 3);
    assert!(classified.header_lines[0].starts_with("AL011970"));
    assert!(classified.header_lines[1].starts_with("AL021970"));
    assert!(classified.track_lines[0].starts_with("19700801, 0000"));
    assert!(classified.track_lines[2].starts_with("19700905, 1200"));
}

#[test]
fn test_non_prefix_lines_are_track_lines_unconditionally() {
    // Blank and malformed lines are classified as track lines; they fail
    // later with a schema violation rather than being silently dropped.
    let content = "AL011970, TESTSTORM, 1,\n\nnot a real line\n";
    let classified = classify_lines(content, "AL").unwrap();

    assert_eq!(classified.header_lines.len(), 1);
    assert_eq!(classified.track_lines.len(), 2);
    assert_eq!(classified.track_lines[0], "");
    assert_eq!(classified.track_lines[1], "not a real line");
}

#[test]
fn test_no_headers_is_format_error() {
    let content = "19700801, 0000,  , TS, 28.0N,  94.8W,  45, 1002,\n";
    let result = classify_lines(content, "AL");

    assert!(matches!(result, Err(HurdatError::Format { .. })));
}

#[test]
fn test_basin_prefix_is_configurable() {
    let content = "EP011970, PACIFIC, 0,\n";
    let classified = classify_lines(content, "EP").unwrap();

    assert_eq!(classified.header_lines.len(), 1);
    assert!(classified.track_lines.is_empty());
}

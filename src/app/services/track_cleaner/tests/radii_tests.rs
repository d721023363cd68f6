//! Tests for the implied-radius fill and year filter

use super::observation;
use crate::app::services::track_cleaner::{fill_implied_radii, filter_by_year};
use crate::constants::RADIUS_FIELD_COUNT;

const ALL_MISSING: [Option<f64>; RADIUS_FIELD_COUNT] = [None; RADIUS_FIELD_COUNT];

#[test]
fn test_low_speed_implies_all_radii_zero() {
    let rows = vec![observation("AL011970", 1980, Some(30.0), ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii.iter().all(|r| *r == Some(0.0)));
}

#[test]
fn test_boundary_speed_34_still_fills_all() {
    let rows = vec![observation("AL011970", 1980, Some(34.0), ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii.iter().all(|r| *r == Some(0.0)));
}

#[test]
fn test_medium_speed_fills_last_eight() {
    let rows = vec![observation("AL011970", 1980, Some(45.0), ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii[..4].iter().all(|r| r.is_none()));
    assert!(filled[0].radii[4..].iter().all(|r| *r == Some(0.0)));
}

#[test]
fn test_high_speed_fills_last_four() {
    let rows = vec![observation("AL011970", 1980, Some(60.0), ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii[..8].iter().all(|r| r.is_none()));
    assert!(filled[0].radii[8..].iter().all(|r| *r == Some(0.0)));
}

#[test]
fn test_speed_above_all_thresholds_untouched() {
    let rows = vec![observation("AL011970", 1980, Some(90.0), ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii.iter().all(|r| r.is_none()));
}

#[test]
fn test_missing_speed_untouched() {
    let rows = vec![observation("AL011970", 1980, None, ALL_MISSING)];
    let filled = fill_implied_radii(rows);

    assert!(filled[0].radii.iter().all(|r| r.is_none()));
}

#[test]
fn test_recorded_values_never_overwritten() {
    let mut radii = ALL_MISSING;
    radii[5] = Some(25.0);
    let rows = vec![observation("AL011970", 1980, Some(45.0), radii)];
    let filled = fill_implied_radii(rows);

    assert_eq!(filled[0].radii[5], Some(25.0));
    assert_eq!(filled[0].radii[4], Some(0.0));
}

#[test]
fn test_year_filter_is_inclusive() {
    let rows = vec![
        observation("AL011969", 1969, Some(45.0), ALL_MISSING),
        observation("AL011970", 1970, Some(45.0), ALL_MISSING),
        observation("AL012000", 2000, Some(45.0), ALL_MISSING),
    ];
    let retained = filter_by_year(rows, 1970);

    assert_eq!(retained.len(), 2);
    assert_eq!(retained[0].storm_id, "AL011970");
}

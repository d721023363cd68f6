//! Tests for the haversine distance

use crate::app::services::feature_engineer::great_circle_distance_km;

#[test]
fn test_reflexivity() {
    assert_eq!(great_circle_distance_km(28.0, -94.8, 28.0, -94.8), 0.0);
    assert_eq!(great_circle_distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
}

#[test]
fn test_symmetry() {
    let d_ab = great_circle_distance_km(28.0, -94.8, 28.3, -95.2);
    let d_ba = great_circle_distance_km(28.3, -95.2, 28.0, -94.8);
    assert!((d_ab - d_ba).abs() < 1e-12);
}

#[test]
fn test_one_degree_of_latitude_on_meridian() {
    // One degree of arc on a 6371 km sphere: 6371 * pi / 180 ~ 111.1949 km.
    let d = great_circle_distance_km(0.0, 0.0, 1.0, 0.0);
    let expected = 6371.0 * std::f64::consts::PI / 180.0;
    assert!((d - expected).abs() / expected < 1e-9, "got {}", d);
}

#[test]
fn test_quarter_circumference_pole_to_equator() {
    let d = great_circle_distance_km(0.0, 0.0, 90.0, 0.0);
    let expected = 6371.0 * std::f64::consts::PI / 2.0;
    assert!((d - expected).abs() / expected < 1e-9);
}

#[test]
fn test_longitude_separation_shrinks_with_latitude() {
    let at_equator = great_circle_distance_km(0.0, -94.0, 0.0, -95.0);
    let at_60n = great_circle_distance_km(60.0, -94.0, 60.0, -95.0);
    assert!(at_60n < at_equator);
    // cos(60) = 0.5, and for small separations the ratio is close to it.
    assert!((at_60n / at_equator - 0.5).abs() < 1e-3);
}

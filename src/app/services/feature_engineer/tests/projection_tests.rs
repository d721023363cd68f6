//! Tests for the Web Mercator projection

use std::f64::consts::PI;

use crate::app::services::feature_engineer::project_web_mercator;
use crate::constants::MERCATOR_EARTH_RADIUS_M;

/// Inverse projection, defined locally for round-trip checking only.
fn unproject(x: f64, y: f64) -> (f64, f64) {
    let lon = x / (MERCATOR_EARTH_RADIUS_M * PI / 180.0);
    let lat = ((y / MERCATOR_EARTH_RADIUS_M).exp().atan() * 360.0 / PI) - 90.0;
    (lon, lat)
}

#[test]
fn test_origin_projects_to_origin() {
    let (x, y) = project_web_mercator(0.0, 0.0);
    assert!(x.abs() < 1e-9);
    assert!(y.abs() < 1e-9);
}

#[test]
fn test_equator_x_is_linear_in_longitude() {
    let (x_90, _) = project_web_mercator(90.0, 0.0);
    let (x_45, _) = project_web_mercator(45.0, 0.0);
    assert!((x_90 - 2.0 * x_45).abs() < 1e-6);
    assert!((x_90 - MERCATOR_EARTH_RADIUS_M * PI / 2.0).abs() < 1e-6);
}

#[test]
fn test_western_hemisphere_is_negative_x() {
    let (x, _) = project_web_mercator(-94.8, 28.0);
    assert!(x < 0.0);
}

#[test]
fn test_round_trip_recovers_coordinates() {
    for &(lon, lat) in &[(-94.8, 28.0), (-61.0, 15.5), (0.0, 45.0), (120.0, -30.0)] {
        let (x, y) = project_web_mercator(lon, lat);
        let (lon_back, lat_back) = unproject(x, y);
        assert!((lon - lon_back).abs() < 1e-9, "lon {} -> {}", lon, lon_back);
        assert!((lat - lat_back).abs() < 1e-9, "lat {} -> {}", lat, lat_back);
    }
}

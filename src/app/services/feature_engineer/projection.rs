//! Spherical Web Mercator forward projection
//!
//! The standard spherical (not ellipsoidal) projection used by map tile
//! servers. Undefined at the poles; hurricane tracks never approach
//! them, so the input range is the caller's responsibility.

use std::f64::consts::PI;

use crate::constants::MERCATOR_EARTH_RADIUS_M;

/// Project WGS84 degrees to Web Mercator meters.
///
/// `x = lon * R * pi / 180`, `y = ln(tan((90 + lat) * pi / 360)) * R`.
pub fn project_web_mercator(longitude: f64, latitude: f64) -> (f64, f64) {
    let x = longitude * (MERCATOR_EARTH_RADIUS_M * PI / 180.0);
    let y = ((90.0 + latitude) * PI / 360.0).tan().ln() * MERCATOR_EARTH_RADIUS_M;
    (x, y)
}

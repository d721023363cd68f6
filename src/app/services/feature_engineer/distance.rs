//! Haversine great-circle distance
//!
//! Uses the 6371 km mean Earth radius. The Mercator projection uses its
//! own 6378137 m radius; the two never mix.

use crate::constants::HAVERSINE_EARTH_RADIUS_KM;

/// Great-circle distance between two points, in kilometers.
///
/// `d = 2R * asin(sqrt(sin^2(dlat/2) + cos(lat1) * cos(lat2) * sin^2(dlon/2)))`
/// with all angles in radians.
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let half_dlat = (lat2_rad - lat1_rad) / 2.0;
    let half_dlon = (lon2.to_radians() - lon1.to_radians()) / 2.0;

    let a = half_dlat.sin().powi(2) + lat1_rad.cos() * lat2_rad.cos() * half_dlon.sin().powi(2);

    2.0 * HAVERSINE_EARTH_RADIUS_KM * a.sqrt().asin()
}

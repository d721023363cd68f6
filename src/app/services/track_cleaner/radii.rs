//! Implied zero-fill of wind radius fields
//!
//! A wind radius is the maximum distance from the storm center at which
//! winds above a threshold (34, 50, 64 kt) were observed, per quadrant.
//! The thresholds imply structural zeros: a storm whose maximum sustained
//! wind never reached a threshold cannot have a radius for it. The fill
//! is row-wise only and replaces missing values, never recorded ones.

use tracing::debug;

use crate::app::models::TrackObservation;
use crate::constants::RADIUS_SPEED_BOUNDS;

/// Zero-fill the radius columns implied by each row's MaxSpeed bucket.
///
/// Buckets over (lower, upper] speed ranges, columns ordered Low, Med,
/// High by quadrant:
/// - (0, 34]: all twelve radii are implied zero
/// - (34, 50]: the medium and high radii (last 8) are implied zero
/// - (50, 64]: only the high radii (last 4) are implied zero
///
/// Rows with missing MaxSpeed or a speed outside all buckets (including
/// above 64, where nothing is implied) are left untouched.
pub fn fill_implied_radii(rows: Vec<TrackObservation>) -> Vec<TrackObservation> {
    let mut filled_count = 0usize;

    let rows: Vec<TrackObservation> = rows
        .into_iter()
        .map(|mut row| {
            if let Some(start) = implied_fill_start(row.max_speed) {
                for slot in row.radii[start..].iter_mut() {
                    if slot.is_none() {
                        *slot = Some(0.0);
                        filled_count += 1;
                    }
                }
            }
            row
        })
        .collect();

    debug!("Implied-radius fill completed {} missing values", filled_count);
    rows
}

/// First radius column index implied zero for the given speed, if any.
fn implied_fill_start(max_speed: Option<f64>) -> Option<usize> {
    let speed = max_speed?;

    for (i, window) in RADIUS_SPEED_BOUNDS.windows(2).enumerate() {
        if speed > window[0] && speed <= window[1] {
            // Bucket i implies zeros from column 4*i onward.
            return Some(4 * i);
        }
    }

    None
}

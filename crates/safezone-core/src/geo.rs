//! Distance math.
//!
//! Zone containment uses the great-circle (haversine) distance. Clustering
//! uses a planar distance in degree space, which is only an approximation:
//! one degree of longitude shrinks with latitude, so eps neighbourhoods are
//! ellipses on the ground. Acceptable for city-scale eps values.

use crate::constants::EARTH_RADIUS_KM;
use crate::models::GeoPoint;

/// Great-circle distance in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Euclidean distance in degree space.
pub fn planar_distance_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    (b.lat - a.lat).hypot(b.lon - a.lon)
}

/// Round to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Great-circle distance on a spherical Earth.

use tastingmap_core::Coordinate;

pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points, in miles.
///
/// Inputs must be finite; non-finite input yields an unspecified result.
#[must_use]
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

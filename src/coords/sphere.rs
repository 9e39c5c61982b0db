//! Spherical and planar helpers that need no configuration.
//!
//! The earth is modelled as a sphere with the WGS84 equatorial radius.

use std::f64::consts::PI;

use glam::DVec2;

use crate::defaults::EARTH_RADIUS_METERS;
use crate::types::{GeoCoordinate, Meters, ViewCoordinate};

pub fn degrees_from_radians(radians: f64) -> f64 {
    radians / (PI / 180.0)
}

pub fn radians_from_degrees(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Great-circle distance between two points, rounded to whole meters.
///
/// Uses the haversine formula. The result is symmetric in its arguments and
/// zero for identical points.
pub fn geo_distance(a: GeoCoordinate, b: GeoCoordinate) -> Meters {
    let ra = a.to_radians();
    let rb = b.to_radians();
    let half_dlat = (rb.latitude - ra.latitude) / 2.0;
    let half_dlon = (rb.longitude - ra.longitude) / 2.0;

    let hav = half_dlat.sin().powi(2)
        + ra.latitude.cos() * rb.latitude.cos() * half_dlon.sin().powi(2);
    // Rounding noise can push hav a hair outside [0, 1] for antipodal points.
    let hav = hav.clamp(0.0, 1.0);
    let c = 2.0 * hav.sqrt().atan2((1.0 - hav).sqrt());

    Meters(EARTH_RADIUS_METERS * c).round()
}

/// Midpoint of two coordinates, taken as the arithmetic mean in radian space.
///
/// This is not the true spherical midpoint; for the small extents a map view
/// covers the difference is negligible.
pub fn center_of(a: GeoCoordinate, b: GeoCoordinate) -> GeoCoordinate {
    let ra = a.to_radians();
    let rb = b.to_radians();
    GeoCoordinate::from_radians(GeoCoordinate {
        latitude: ra.latitude + (rb.latitude - ra.latitude) / 2.0,
        longitude: ra.longitude + (rb.longitude - ra.longitude) / 2.0,
    })
}

/// Move `coords` by a local tangent-plane offset.
///
/// Positive `offset_x` moves east, positive `offset_y` moves north. The
/// longitude delta divides by `cos(latitude)` and blows up at the poles.
pub fn offset_by_meters(
    coords: GeoCoordinate,
    offset_x: Meters,
    offset_y: Meters,
) -> GeoCoordinate {
    let dlat = degrees_from_radians(offset_y.raw() / EARTH_RADIUS_METERS);
    let dlon = degrees_from_radians(
        offset_x.raw() / (EARTH_RADIUS_METERS * radians_from_degrees(coords.latitude).cos()),
    );
    GeoCoordinate {
        latitude: coords.latitude + dlat,
        longitude: coords.longitude + dlon,
    }
}

/// Euclidean distance between two view coordinates, in pixels.
pub fn view_distance(a: ViewCoordinate, b: ViewCoordinate) -> f64 {
    DVec2::from(a).distance(DVec2::from(b))
}

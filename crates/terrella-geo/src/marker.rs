//! Equatorial marker placement for the timezone clock overlay.
//!
//! Markers sit on the equator at each timezone's meridian, lifted just off
//! the surface; their text labels anchor a few marker-radii above so they
//! clear the marker geometry.

use glam::DVec3;

use crate::place;

/// Position of a timezone marker: on the equator at `longitude_deg`,
/// lifted off the surface by `radius_scale`.
pub fn marker_point(longitude_deg: f64, globe_radius: f64, radius_scale: f64) -> DVec3 {
    place(0.0, longitude_deg, globe_radius * radius_scale)
}

/// Visual marker radius for a globe of the given size.
pub fn marker_size(globe_radius: f64, size_scale: f64) -> f64 {
    globe_radius * size_scale
}

/// Anchor point for a marker's label, lifted along +y above the marker.
pub fn label_anchor(marker: DVec3, marker_size: f64, lift: f64) -> DVec3 {
    marker + DVec3::new(0.0, marker_size * lift, 0.0)
}

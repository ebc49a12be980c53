//! Geographic coordinates and their Cartesian placement.
//!
//! The globe uses a y-up basis: latitude is measured from the equatorial
//! plane with the y axis as the polar axis, and longitude sweeps the x-z
//! plane starting at +x. [`place`] is the single conversion everything on
//! the globe goes through, graticule lines and timezone markers alike.

use std::fmt;

use glam::DVec3;

/// Convert latitude/longitude (degrees) and a radius into a Cartesian
/// point on the sphere.
///
/// Out-of-range angles are accepted and wrap through the trigonometry; no
/// clamping or validation is performed. The result always lies at exactly
/// `radius` from the origin.
pub fn place(latitude_deg: f64, longitude_deg: f64, radius: f64) -> DVec3 {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    DVec3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.sin(),
        radius * lat.cos() * lon.sin(),
    )
}

/// A point on (or just above) the globe surface in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude_deg: f64,
    /// Longitude in degrees, positive toward +z.
    pub longitude_deg: f64,
    /// Distance from the globe center.
    pub radius: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            radius,
        }
    }

    /// Cartesian position of this point.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        place(self.latitude_deg, self.longitude_deg, self.radius)
    }

    /// Outward unit surface normal at this point.
    #[must_use]
    pub fn unit_normal(&self) -> DVec3 {
        place(self.latitude_deg, self.longitude_deg, 1.0)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude_deg >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude_deg >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.2}\u{b0}{} {:.2}\u{b0}{} r={:.2}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew,
            self.radius
        )
    }
}

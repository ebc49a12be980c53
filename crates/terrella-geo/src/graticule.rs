//! Graticule construction: the latitude/longitude grid overlay.
//!
//! Parallels are closed rings sampled around the full circle (the seam
//! sample appears at both ends so a line strip closes cleanly); meridians
//! run pole to pole. All lines sit slightly above the surface so the host
//! can draw them without z-fighting the globe texture.

use glam::DVec3;

use crate::place;

/// A connected run of points, drawn by the host as one line strip.
pub type Polyline = Vec<DVec3>;

/// Grid layout parameters. Angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraticuleSpec {
    /// Latitude spacing between parallels.
    pub parallel_step_deg: f64,
    /// Highest absolute latitude that gets a parallel.
    pub parallel_limit_deg: f64,
    /// Longitude sampling resolution along each parallel.
    pub parallel_sample_deg: f64,
    /// Longitude spacing between meridians.
    pub meridian_step_deg: f64,
    /// Latitude sampling resolution along each meridian.
    pub meridian_sample_deg: f64,
    /// Multiplier lifting grid lines off the surface.
    pub radius_scale: f64,
}

impl Default for GraticuleSpec {
    fn default() -> Self {
        Self {
            parallel_step_deg: 20.0,
            parallel_limit_deg: 80.0,
            parallel_sample_deg: 5.0,
            meridian_step_deg: 30.0,
            meridian_sample_deg: 2.0,
            radius_scale: 1.005,
        }
    }
}

/// The grid overlay: parallels (constant latitude) and meridians (constant
/// longitude).
#[derive(Debug, Clone, PartialEq)]
pub struct Graticule {
    pub parallels: Vec<Polyline>,
    pub meridians: Vec<Polyline>,
}

impl Graticule {
    /// Total number of line strips.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.parallels.len() + self.meridians.len()
    }
}

// Guard against accumulated floating-point error when stepping by a
// non-dyadic degree value; keeps the inclusive endpoints inclusive.
const STEP_EPS: f64 = 1e-9;

/// Build the grid for a globe of the given radius.
pub fn build_graticule(spec: &GraticuleSpec, radius: f64) -> Graticule {
    let line_radius = radius * spec.radius_scale;

    let mut parallels = Vec::new();
    let mut lat = -spec.parallel_limit_deg;
    while lat <= spec.parallel_limit_deg + STEP_EPS {
        parallels.push(parallel_ring(lat, spec.parallel_sample_deg, line_radius));
        lat += spec.parallel_step_deg;
    }

    let mut meridians = Vec::new();
    let mut lon = 0.0;
    while lon < 360.0 - STEP_EPS {
        meridians.push(meridian_arc(lon, spec.meridian_sample_deg, line_radius));
        lon += spec.meridian_step_deg;
    }

    Graticule {
        parallels,
        meridians,
    }
}

/// One closed ring of constant latitude, sampled 0..=360 degrees.
fn parallel_ring(latitude_deg: f64, sample_deg: f64, radius: f64) -> Polyline {
    let mut points = Vec::new();
    let mut lon = 0.0;
    while lon <= 360.0 + STEP_EPS {
        points.push(place(latitude_deg, lon, radius));
        lon += sample_deg;
    }
    points
}

/// One pole-to-pole arc of constant longitude.
fn meridian_arc(longitude_deg: f64, sample_deg: f64, radius: f64) -> Polyline {
    let mut points = Vec::new();
    let mut lat = -90.0;
    while lat <= 90.0 + STEP_EPS {
        points.push(place(lat, longitude_deg, radius));
        lat += sample_deg;
    }
    points
}

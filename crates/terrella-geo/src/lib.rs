//! Spherical placement: latitude/longitude to Cartesian points, graticule
//! polylines, and timezone marker positions on the globe.

mod geo_point;
mod graticule;
mod marker;

pub use geo_point::{GeoPoint, place};
pub use graticule::{Graticule, GraticuleSpec, Polyline, build_graticule};
pub use marker::{label_anchor, marker_point, marker_size};

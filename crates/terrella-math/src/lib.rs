//! Scalar math shared across the globe core: angle wrapping, shortest-arc
//! deltas, and the GLSL-style interpolation helpers the shading math mirrors.

mod angle;
mod interp;

pub use angle::{approach_angle, shortest_arc, wrap_tau};
pub use interp::{lerp, smoothstep};

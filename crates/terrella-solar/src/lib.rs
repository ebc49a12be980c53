//! UTC-synchronized solar rotation for the globe.
//!
//! The globe's day/night cycle tracks the real wall clock: [`SolarModel`]
//! maps the UTC fraction-of-day onto a rotation angle (or equivalently a
//! light direction), [`RotationFollower`] eases the applied angle back onto
//! that target after the user lets go of the globe, and the terminator
//! module carries the CPU-side day/night blend plus the GPU uniform block
//! and WGSL source a host binds to draw it.

mod follower;
mod light_rig;
mod model;
mod terminator;

pub use follower::{DEFAULT_SMOOTHING, RotationFollower};
pub use light_rig::{GLOBE_SHADER_SOURCE, GlobeLightUniform, LightRig};
pub use model::{SolarModel, utc_day_fraction};
pub use terminator::{
    DEFAULT_NIGHT_STRENGTH, DEFAULT_TERMINATOR_BAND, day_night_mix, surface_intensity,
    terminator_darkness,
};

//! Configuration for the globe visualization core.
//!
//! Provides runtime-configurable settings that persist to disk as RON
//! files, with CLI overrides via clap and hot-reload detection. Defaults
//! carry the constants the visualization was tuned with, so a fresh config
//! reproduces the reference scene.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, ClocksConfig, Config, DebugConfig, DriveMode, GlobeConfig, GraticuleConfig,
    LightingConfig, MarkerConfig, SolarConfig,
};
pub use error::ConfigError;

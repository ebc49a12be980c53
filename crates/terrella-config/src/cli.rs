//! Command-line argument parsing for the globe core.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, DriveMode};

/// Globe core command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terrella", about = "UTC-synchronized globe core")]
pub struct CliArgs {
    /// Globe radius in scene units.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Calibration offset in degrees.
    #[arg(long)]
    pub calibration_deg: Option<f64>,

    /// Resume smoothing fraction per frame, in (0, 1].
    #[arg(long)]
    pub smoothing: Option<f64>,

    /// How the rotation is applied to the scene.
    #[arg(long, value_enum)]
    pub drive_mode: Option<DriveMode>,

    /// Clock refresh cadence in seconds.
    #[arg(long)]
    pub clock_refresh: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.globe.radius = radius;
        }
        if let Some(offset) = args.calibration_deg {
            self.solar.calibration_offset_deg = offset;
        }
        if let Some(smoothing) = args.smoothing {
            self.solar.smoothing_per_frame = smoothing;
        }
        if let Some(mode) = args.drive_mode {
            self.solar.drive_mode = mode;
        }
        if let Some(refresh) = args.clock_refresh {
            self.clocks.refresh_seconds = refresh;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

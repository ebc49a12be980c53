//! Configuration structs with reference defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use terrella_clocks::ZoneEntry;

use crate::error::ConfigError;

/// Top-level configuration for the globe core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Globe geometry settings.
    pub globe: GlobeConfig,
    /// Solar rotation settings.
    pub solar: SolarConfig,
    /// Lighting and terminator settings.
    pub lighting: LightingConfig,
    /// Latitude/longitude grid settings.
    pub graticule: GraticuleConfig,
    /// Timezone marker settings.
    pub markers: MarkerConfig,
    /// Clock overlay settings, including the timezone table.
    pub clocks: ClocksConfig,
    /// Orbit camera hints for the host scene.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Globe geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Sphere radius in scene units.
    pub radius: f64,
    /// Sphere tessellation (segments per axis), a host mesh hint.
    pub segments: u32,
}

/// How the solar rotation is applied to the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum DriveMode {
    /// Rotate the sphere under a fixed +x light.
    #[default]
    RotateSphere,
    /// Keep the sphere static and rotate the light direction.
    MovingLight,
}

/// Solar rotation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolarConfig {
    /// Calibration offset in degrees, phase-aligning the surface texture
    /// with the sub-solar point. Tuned empirically against the reference
    /// texture, not derived.
    pub calibration_offset_deg: f64,
    /// Fraction of the remaining delta applied per frame when easing back
    /// onto the target after an interaction. Expected in (0, 1].
    pub smoothing_per_frame: f64,
    /// Whether the rotation drives the sphere or the light.
    pub drive_mode: DriveMode,
}

/// Lighting and terminator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Sun intensity for host-lit meshes.
    pub sun_intensity: f32,
    /// Linear RGB sun color.
    pub sun_color: [f32; 3],
    /// Ambient intensity.
    pub ambient_intensity: f32,
    /// Linear RGB ambient color.
    pub ambient_color: [f32; 3],
    /// Half-width of the terminator blend band, in dot-product units.
    pub terminator_band: f32,
    /// Night-texture mix strength.
    pub night_strength: f32,
}

/// Latitude/longitude grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraticuleConfig {
    /// Latitude spacing between parallels, degrees.
    pub parallel_step_deg: f64,
    /// Highest absolute latitude that gets a parallel, degrees.
    pub parallel_limit_deg: f64,
    /// Longitude sampling resolution along parallels, degrees.
    pub parallel_sample_deg: f64,
    /// Longitude spacing between meridians, degrees.
    pub meridian_step_deg: f64,
    /// Latitude sampling resolution along meridians, degrees.
    pub meridian_sample_deg: f64,
    /// Multiplier lifting grid lines off the surface.
    pub radius_scale: f64,
    /// Line color, linear RGB (host hint).
    pub color: [f32; 3],
    /// Line opacity (host hint).
    pub opacity: f32,
}

/// Timezone marker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Multiplier lifting markers off the surface.
    pub radius_scale: f64,
    /// Marker radius as a fraction of the globe radius.
    pub size_scale: f64,
    /// Label anchor height above the marker, in marker radii.
    pub label_lift: f64,
}

/// Clock overlay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClocksConfig {
    /// Refresh cadence for the clock text, seconds.
    pub refresh_seconds: f64,
    /// The timezone table: one marker and clock per entry.
    pub zones: Vec<ZoneEntry>,
}

/// Orbit camera hints for the host scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view, degrees.
    pub fov_deg: f32,
    /// Starting distance from the globe center.
    pub start_distance: f64,
    /// Closest allowed orbit distance.
    pub min_distance: f64,
    /// Farthest allowed orbit distance.
    pub max_distance: f64,
    /// Orbit damping factor.
    pub damping: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            segments: 64,
        }
    }
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            calibration_offset_deg: -90.0,
            smoothing_per_frame: 0.05,
            drive_mode: DriveMode::RotateSphere,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sun_intensity: 2.5,
            sun_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.5,
            ambient_color: [0.251, 0.251, 0.251],
            terminator_band: 0.2,
            night_strength: 0.8,
        }
    }
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            parallel_step_deg: 20.0,
            parallel_limit_deg: 80.0,
            parallel_sample_deg: 5.0,
            meridian_step_deg: 30.0,
            meridian_sample_deg: 2.0,
            radius_scale: 1.005,
            color: [0.0, 1.0, 1.0],
            opacity: 0.4,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius_scale: 1.002,
            size_scale: 0.03,
            label_lift: 4.0,
        }
    }
}

impl Default for ClocksConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 1.0,
            zones: default_zone_table(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            start_distance: 10.0,
            min_distance: 6.0,
            max_distance: 15.0,
            damping: 0.05,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// The standard twelve-entry timezone table, one marker per meridian the
/// overlay labels.
pub(crate) fn default_zone_table() -> Vec<ZoneEntry> {
    vec![
        ZoneEntry::new("London (GMT)", "Europe/London", 0.0),
        ZoneEntry::new("Paris", "Europe/Paris", 15.0),
        ZoneEntry::new("Istanbul", "Europe/Istanbul", 30.0),
        ZoneEntry::new("Dubai", "Asia/Dubai", 60.0),
        ZoneEntry::new("New Delhi", "Asia/Kolkata", 75.0),
        ZoneEntry::new("Beijing", "Asia/Shanghai", 120.0),
        ZoneEntry::new("Tokyo", "Asia/Tokyo", 135.0),
        ZoneEntry::new("Sydney", "Australia/Sydney", 150.0),
        ZoneEntry::new("New York", "America/New_York", -75.0),
        ZoneEntry::new("Chicago", "America/Chicago", -90.0),
        ZoneEntry::new("Los Angeles", "America/Los_Angeles", -120.0),
        ZoneEntry::new("Rio de Janeiro", "America/Sao_Paulo", -45.0),
    ]
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .map_err(|source| ConfigError::ReadError { path: config_path.clone(), source })?;
            let config: Config = ron::from_str(&contents)
                .map_err(|source| ConfigError::ParseError { path: config_path.clone(), source })?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir)
            .map_err(|source| ConfigError::WriteError { path: config_dir.to_path_buf(), source })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized)
            .map_err(|source| ConfigError::WriteError { path: config_path.clone(), source })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path)
            .map_err(|source| ConfigError::ReadError { path: config_path.clone(), source })?;
        let new_config: Config = ron::from_str(&contents)
            .map_err(|source| ConfigError::ParseError { path: config_path.clone(), source })?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

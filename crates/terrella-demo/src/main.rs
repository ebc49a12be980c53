//! Demo binary that drives the globe session headlessly.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terrella-demo` to watch a few simulated seconds.
//! Run with `cargo run -p terrella-demo -- --seconds 10 --fps 30` to change the pacing,
//! or `-- --drive-mode moving-light` to rotate the light instead of the mesh.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use glam::DVec3;
use terrella_clocks::resolve_zones;
use terrella_config::{CliArgs, Config};
use terrella_geo::{GeoPoint, GraticuleSpec, build_graticule, place};
use terrella_math::shortest_arc;
use terrella_session::{DriveOutput, GlobeSession};
use terrella_solar::{
    SolarModel, day_night_mix, surface_intensity, terminator_darkness, utc_day_fraction,
};
use tracing::{debug, info};

/// Demo command-line arguments: the shared config overrides plus loop pacing.
#[derive(Parser, Debug)]
#[command(name = "terrella-demo", about = "Headless driver for the globe session")]
struct DemoArgs {
    #[command(flatten)]
    config: CliArgs,

    /// How long to run the session loop, in seconds.
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,

    /// Frame pacing of the session loop, frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

/// Demonstrates spherical placement of geographic coordinates.
fn demonstrate_placement(config: &Config) {
    info!("Starting spherical placement demonstration");

    let radius = config.globe.radius;
    for (label, lat, lon) in [
        ("equator at the reference meridian", 0.0, 0.0),
        ("equator at 90E", 0.0, 90.0),
        ("north pole", 90.0, 0.0),
    ] {
        let p = place(lat, lon, radius);
        info!("{label}: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
    }

    let istanbul = GeoPoint {
        latitude_deg: 41.0,
        longitude_deg: 29.0,
        radius,
    };
    let p = istanbul.position();
    info!(
        "{istanbul}: ({:.3}, {:.3}, {:.3}), distance from center {:.6}",
        p.x,
        p.y,
        p.z,
        p.length()
    );

    info!("Spherical placement demonstration completed successfully");
}

/// Demonstrates graticule construction from the configured layout.
fn demonstrate_graticule(config: &Config) {
    info!("Starting graticule demonstration");

    let spec = GraticuleSpec {
        parallel_step_deg: config.graticule.parallel_step_deg,
        parallel_limit_deg: config.graticule.parallel_limit_deg,
        parallel_sample_deg: config.graticule.parallel_sample_deg,
        meridian_step_deg: config.graticule.meridian_step_deg,
        meridian_sample_deg: config.graticule.meridian_sample_deg,
        radius_scale: config.graticule.radius_scale,
    };
    let graticule = build_graticule(&spec, config.globe.radius);

    let parallel_points: usize = graticule.parallels.iter().map(Vec::len).sum();
    let meridian_points: usize = graticule.meridians.iter().map(Vec::len).sum();
    info!(
        "Built {} parallels and {} meridians: {} line strips, {} points, lifted to radius {:.3}",
        graticule.parallels.len(),
        graticule.meridians.len(),
        graticule.line_count(),
        parallel_points + meridian_points,
        config.globe.radius * spec.radius_scale
    );
    info!(
        "Host draw hints: color ({:.1}, {:.1}, {:.1}), opacity {:.1}",
        config.graticule.color[0],
        config.graticule.color[1],
        config.graticule.color[2],
        config.graticule.opacity
    );

    info!("Graticule demonstration completed successfully");
}

/// Demonstrates the solar rotation model against the current wall clock.
fn demonstrate_solar_model(config: &Config) {
    info!("Starting solar model demonstration");

    let model = SolarModel::from_offset_deg(config.solar.calibration_offset_deg);
    let now = Utc::now();
    info!(
        "UTC day fraction {:.6}, rotation angle {:.4} rad (calibration {:+.1} deg)",
        utc_day_fraction(now),
        model.rotation_angle(now),
        config.solar.calibration_offset_deg
    );

    let direction = model.light_direction(now);
    info!(
        "Lit longitude {:.1} deg; equivalent light direction ({:.4}, {:.4}, {:.4})",
        model.lit_longitude_deg(now),
        direction.x,
        direction.y,
        direction.z
    );

    info!("Solar model demonstration completed successfully");
}

/// Demonstrates the day/night blend at three points along the equator.
fn demonstrate_terminator(config: &Config) {
    info!("Starting terminator blend demonstration");

    let band = f64::from(config.lighting.terminator_band);
    let night_strength = f64::from(config.lighting.night_strength);
    let light = DVec3::new(1.0, 0.0, 0.0);

    // Day and night sample colors standing in for the two textures.
    let day = [0.2, 0.4, 0.8];
    let night = [1.0, 0.9, 0.0];

    for (label, lon) in [("sub-solar point", 0.0), ("terminator", 90.0), ("antipode", 180.0)] {
        let normal = place(0.0, lon, 1.0);
        let intensity = surface_intensity(normal, light);
        let darkness = terminator_darkness(intensity, band);
        let color = day_night_mix(day, night, darkness, night_strength);
        info!(
            "{label}: intensity {intensity:+.3}, darkness {darkness:.3}, color ({:.3}, {:.3}, {:.3})",
            color[0], color[1], color[2]
        );
    }

    info!("Terminator blend demonstration completed successfully");
}

/// Demonstrates timezone resolution and local-time formatting.
fn demonstrate_zone_clocks(config: &Config) {
    info!("Starting timezone clock demonstration");

    let clocks = resolve_zones(&config.clocks.zones);
    let now = Utc::now();
    for clock in &clocks {
        info!(
            "{:<16} {}  (meridian {:+.0} deg)",
            clock.name,
            clock.local_time_string(now),
            clock.longitude_deg
        );
    }
    info!(
        "Resolved {} of {} configured zones",
        clocks.len(),
        config.clocks.zones.len()
    );

    info!("Timezone clock demonstration completed successfully");
}

/// Runs the frame-driven session loop with a scripted interaction:
/// a popup opens early, the globe is dragged and released mid-run, and the
/// follower eases back onto the solar target.
fn run_session_loop(config: &Config, args: &DemoArgs) {
    info!(
        "Starting session loop: {:.1}s at {:.0} fps, drive mode {:?}",
        args.seconds, args.fps, config.solar.drive_mode
    );

    let mut session = GlobeSession::new(config, Utc::now());
    let total_frames = (args.seconds * args.fps).max(1.0) as u64;
    let frame_period = Duration::from_secs_f64(1.0 / args.fps.max(1.0));

    // Scripted input timeline, as fractions of the run.
    let popup_frame = total_frames / 10;
    let grab_frame = total_frames * 2 / 5;
    let release_frame = total_frames * 11 / 20;
    let dismiss_frame = total_frames * 4 / 5;

    for frame in 0..total_frames {
        let now = Utc::now();
        let update = session.advance_frame(now);

        if frame == popup_frame {
            let opened = session.toggle_marker(2);
            info!("Clicked marker 2, popup now {opened:?}");
        }
        if frame == grab_frame {
            session.begin_interaction();
            session.set_manual_angle(update.applied_angle + 0.35);
            info!("Interaction started, globe dragged 0.35 rad off target");
        }
        if frame == release_frame {
            session.end_interaction();
            info!("Interaction ended, easing back onto the solar target");
        }
        if frame == dismiss_frame {
            session.dismiss_popup();
            info!("Popup dismissed");
        }

        if frame % 30 == 0 {
            let residual = shortest_arc(update.target_angle - update.applied_angle);
            debug!(
                "frame {frame}: target {:.4}, applied {:.4}, residual {residual:+.2e} rad",
                update.target_angle, update.applied_angle
            );
        }

        if let Some(readout) = session.poll_clocks(now) {
            let drive = match update.drive {
                DriveOutput::SphereRotationY(y) => format!("mesh rotation.y {y:+.4}"),
                DriveOutput::LightDirection(d) => {
                    format!("light direction ({:.3}, {:.3}, {:.3})", d.x, d.y, d.z)
                }
            };
            let lit = session.solar().lit_longitude_deg(now);
            match readout.active_popup {
                Some(index) => {
                    let (name, time) = &readout.times[index];
                    info!("{drive}; lit longitude {lit:.1} deg; popup {name}: {time}");
                }
                None => info!(
                    "{drive}; lit longitude {lit:.1} deg; {} clocks idle",
                    readout.times.len()
                ),
            }
        }

        thread::sleep(frame_period);
    }

    let final_residual =
        shortest_arc(session.solar().rotation_angle(Utc::now()) - session.applied_angle());
    info!(
        "Session loop completed: {total_frames} frames, final residual {final_residual:+.2e} rad"
    );
}

fn main() {
    let args = DemoArgs::parse();

    // Resolve config directory
    let config_dir = args.config.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("terrella")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args.config);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    terrella_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Globe radius {} at {} segments; camera fov {} deg, distance {} (range {}..{})",
        config.globe.radius,
        config.globe.segments,
        config.camera.fov_deg,
        config.camera.start_distance,
        config.camera.min_distance,
        config.camera.max_distance
    );

    // Demonstrate spherical placement
    demonstrate_placement(&config);

    // Demonstrate graticule construction
    demonstrate_graticule(&config);

    // Demonstrate the solar rotation model
    demonstrate_solar_model(&config);

    // Demonstrate the terminator blend
    demonstrate_terminator(&config);

    // Demonstrate timezone clock resolution
    demonstrate_zone_clocks(&config);

    // Run the frame-driven session loop
    run_session_loop(&config, &args);
}

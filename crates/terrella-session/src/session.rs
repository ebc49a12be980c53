//! The globe session: one struct for all runtime state.
//!
//! Everything the scene mutates per frame lives here rather than in
//! scattered globals, so suspend/resume, popup toggling, and the clock
//! refresh all read and write the same state through one owner. The
//! session computes; the host applies. Each frame the host feeds the
//! current instant in and writes exactly one scene property back out,
//! depending on the configured drive mode.

use chrono::{DateTime, Utc};
use glam::DVec3;

use terrella_clocks::{ClockTicker, ZoneClock, resolve_zones};
use terrella_config::{Config, DriveMode};
use terrella_geo::{
    Graticule, GraticuleSpec, build_graticule, label_anchor, marker_point, marker_size,
};
use terrella_solar::{GlobeLightUniform, LightRig, RotationFollower, SolarModel};

// --- Frame outputs ---

/// A clickable timezone marker on the equator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// World-space position, lifted just off the surface.
    pub position: DVec3,
    /// Marker mesh radius.
    pub size: f64,
    /// Anchor for the floating label, above the marker.
    pub label_position: DVec3,
    /// Index into the session's resolved zone table.
    pub zone_index: usize,
}

/// The one scene property the host should write after a frame step.
///
/// Both variants express the same rotation; which one a session emits is
/// fixed by the configured [`DriveMode`] so the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveOutput {
    /// Assign this value to the globe mesh's Y rotation and keep the sun
    /// light fixed along +x.
    SphereRotationY(f64),
    /// Keep the mesh fixed and point the sun light along this direction.
    LightDirection(DVec3),
}

/// Result of one [`GlobeSession::advance_frame`] step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Raw solar angle for the frame's instant, radians.
    pub target_angle: f64,
    /// Smoothed angle actually applied this frame, radians.
    pub applied_angle: f64,
    /// What the host should write into the scene.
    pub drive: DriveOutput,
}

/// Fresh clock text, produced when the refresh period has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockReadout {
    /// `(display name, HH:MM:SS)` per resolved zone, in table order.
    pub times: Vec<(String, String)>,
    /// Marker index of the open popup, if any.
    pub active_popup: Option<usize>,
}

// --- Session ---

/// Owns the globe's runtime state and steps it once per frame.
#[derive(Debug, Clone)]
pub struct GlobeSession {
    model: SolarModel,
    follower: RotationFollower,
    drive_mode: DriveMode,
    rig: LightRig,
    graticule: Graticule,
    zones: Vec<ZoneClock>,
    markers: Vec<Marker>,
    ticker: ClockTicker,
    active_popup: Option<usize>,
}

impl GlobeSession {
    /// Build a session from configuration, starting the follower on the
    /// solar target for `now` so the scene opens already in phase.
    pub fn new(config: &Config, now: DateTime<Utc>) -> Self {
        let model = SolarModel::from_offset_deg(config.solar.calibration_offset_deg);
        let initial_angle = model.rotation_angle(now);
        let follower = RotationFollower::new(initial_angle, config.solar.smoothing_per_frame);

        let zones = resolve_zones(&config.clocks.zones);
        let markers = zones
            .iter()
            .enumerate()
            .map(|(zone_index, zone)| {
                let position = marker_point(
                    zone.longitude_deg,
                    config.globe.radius,
                    config.markers.radius_scale,
                );
                let size = marker_size(config.globe.radius, config.markers.size_scale);
                Marker {
                    position,
                    size,
                    label_position: label_anchor(position, size, config.markers.label_lift),
                    zone_index,
                }
            })
            .collect::<Vec<_>>();

        let spec = GraticuleSpec {
            parallel_step_deg: config.graticule.parallel_step_deg,
            parallel_limit_deg: config.graticule.parallel_limit_deg,
            parallel_sample_deg: config.graticule.parallel_sample_deg,
            meridian_step_deg: config.graticule.meridian_step_deg,
            meridian_sample_deg: config.graticule.meridian_sample_deg,
            radius_scale: config.graticule.radius_scale,
        };
        let graticule = build_graticule(&spec, config.globe.radius);

        let sun_direction = match config.solar.drive_mode {
            DriveMode::RotateSphere => DVec3::new(1.0, 0.0, 0.0),
            DriveMode::MovingLight => SolarModel::light_direction_for_angle(initial_angle),
        };
        let rig = LightRig {
            sun_direction,
            sun_color: config.lighting.sun_color,
            sun_intensity: config.lighting.sun_intensity,
            ambient_color: config.lighting.ambient_color,
            ambient_intensity: config.lighting.ambient_intensity,
            terminator_band: config.lighting.terminator_band,
            night_strength: config.lighting.night_strength,
        };

        log::info!(
            "globe session ready: {} of {} zones resolved, {} markers, {} grid lines",
            zones.len(),
            config.clocks.zones.len(),
            markers.len(),
            graticule.line_count()
        );

        Self {
            model,
            follower,
            drive_mode: config.solar.drive_mode,
            rig,
            graticule,
            zones,
            markers,
            ticker: ClockTicker::from_seconds(config.clocks.refresh_seconds),
            active_popup: None,
        }
    }

    // --- Interaction edges ---

    /// The user grabbed the globe; hold the applied angle until release.
    pub fn begin_interaction(&mut self) {
        self.follower.suspend();
    }

    /// The user released the globe; subsequent frames ease back onto the
    /// live target.
    pub fn end_interaction(&mut self) {
        self.follower.resume();
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.follower.is_suspended()
    }

    /// Record an angle the host applied manually mid-interaction, so the
    /// resume easing starts from where the user left the globe.
    pub fn set_manual_angle(&mut self, angle: f64) {
        self.follower.set_angle(angle);
    }

    /// Toggle the clock popup for the clicked marker and return the popup
    /// now open, if any.
    ///
    /// Clicking the marker of the open popup closes it; clicking a
    /// different marker switches to that popup. Opening forces the next
    /// [`poll_clocks`](Self::poll_clocks) to produce a readout immediately
    /// so the popup never shows stale text.
    pub fn toggle_marker(&mut self, index: usize) -> Option<usize> {
        if index >= self.markers.len() {
            log::debug!("ignoring marker toggle for out-of-range index {index}");
            return self.active_popup;
        }
        if self.active_popup == Some(index) {
            self.active_popup = None;
        } else {
            self.active_popup = Some(index);
            self.ticker.expire();
        }
        self.active_popup
    }

    /// Close the open popup, if any. A click on empty space lands here.
    pub fn dismiss_popup(&mut self) {
        self.active_popup = None;
    }

    #[must_use]
    pub fn active_popup(&self) -> Option<usize> {
        self.active_popup
    }

    // --- Frame steps ---

    /// Advance the rotation one frame and say what to write into the scene.
    ///
    /// While an interaction is in progress the applied angle holds and the
    /// emitted drive value simply repeats it.
    pub fn advance_frame(&mut self, now: DateTime<Utc>) -> FrameUpdate {
        let target_angle = self.model.rotation_angle(now);
        let applied_angle = self.follower.step(target_angle);

        let drive = match self.drive_mode {
            DriveMode::RotateSphere => DriveOutput::SphereRotationY(-applied_angle),
            DriveMode::MovingLight => {
                let direction = SolarModel::light_direction_for_angle(applied_angle);
                self.rig.sun_direction = direction;
                DriveOutput::LightDirection(direction)
            }
        };

        FrameUpdate {
            target_angle,
            applied_angle,
            drive,
        }
    }

    /// Produce fresh clock text when the refresh period has elapsed.
    ///
    /// Answers `Some` on the first poll, then about once per configured
    /// period, and immediately after a popup opens.
    pub fn poll_clocks(&mut self, now: DateTime<Utc>) -> Option<ClockReadout> {
        if !self.ticker.due(now) {
            return None;
        }
        Some(ClockReadout {
            times: self
                .zones
                .iter()
                .map(|zone| (zone.name.clone(), zone.local_time_string(now)))
                .collect(),
            active_popup: self.active_popup,
        })
    }

    // --- Accessors ---

    /// Angle most recently applied to the scene, radians.
    #[must_use]
    pub fn applied_angle(&self) -> f64 {
        self.follower.angle()
    }

    #[must_use]
    pub fn solar(&self) -> &SolarModel {
        &self.model
    }

    #[must_use]
    pub fn drive_mode(&self) -> DriveMode {
        self.drive_mode
    }

    #[must_use]
    pub fn light_rig(&self) -> &LightRig {
        &self.rig
    }

    /// GPU uniform block for the globe shader, reflecting the current rig.
    #[must_use]
    pub fn light_uniform(&self) -> GlobeLightUniform {
        self.rig.to_uniform()
    }

    #[must_use]
    pub fn zones(&self) -> &[ZoneClock] {
        &self.zones
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn graticule(&self) -> &Graticule {
        &self.graticule
    }
}

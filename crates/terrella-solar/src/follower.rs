//! Smoothed tracking of the automatic rotation target.
//!
//! While the user drags the globe the automatic rotation must not fight
//! the pointer, so the follower suspends and holds whatever angle the host
//! last applied. On release it eases back onto the live target by a fixed
//! fraction per frame, always taking the short way around the circle.

use terrella_math::{approach_angle, shortest_arc};

/// Default per-frame interpolation fraction for the resume easing.
pub const DEFAULT_SMOOTHING: f64 = 0.05;

/// Angular distance below which the follower locks onto the target, so a
/// converged follower tracks the slowly moving target without residual.
const SNAP_EPSILON: f64 = 1e-6;

/// Tracks the angle actually applied to the scene against the model's
/// target angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationFollower {
    angle: f64,
    fraction: f64,
    suspended: bool,
}

impl RotationFollower {
    /// Start tracking from `initial_angle`, easing by `fraction` of the
    /// remaining delta per frame. `fraction` is expected in `(0, 1]`.
    pub fn new(initial_angle: f64, fraction: f64) -> Self {
        Self {
            angle: initial_angle,
            fraction,
            suspended: false,
        }
    }

    /// Angle most recently applied to the scene.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Stop automatic tracking while the user interacts.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume automatic tracking; the next [`step`](Self::step) eases
    /// toward the target from wherever the angle is now.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Record an angle applied externally (a manual drag), so the resume
    /// easing starts from where the user left the globe.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Advance one frame toward `target` and return the angle to apply.
    ///
    /// Holds the current angle while suspended. Otherwise moves by one
    /// shortest-arc interpolation step, snapping exactly onto the target
    /// once within [`SNAP_EPSILON`].
    pub fn step(&mut self, target: f64) -> f64 {
        if self.suspended {
            return self.angle;
        }
        if shortest_arc(target - self.angle).abs() <= SNAP_EPSILON {
            self.angle = target;
        } else {
            self.angle = approach_angle(self.angle, target, self.fraction);
        }
        self.angle
    }
}

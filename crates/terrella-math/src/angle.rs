//! Angle arithmetic for rotation tracking.
//!
//! All angles are radians. The rotation target advances continuously with
//! wall-clock time, so any code comparing angles has to be robust against
//! values many turns apart; these helpers keep every comparison on the
//! circle rather than on the raw number line.

use std::f64::consts::{PI, TAU};

/// Normalize an angle into `[0, TAU)`.
pub fn wrap_tau(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Normalize a raw angular delta into `[-PI, PI]`: the signed short way
/// around the circle.
///
/// A raw delta of `6.23` (almost a full positive turn) comes back as
/// `-0.053`; easing along that delta turns the short way instead of
/// unwinding nearly a whole revolution.
pub fn shortest_arc(delta: f64) -> f64 {
    let wrapped = wrap_tau(delta);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// One interpolation step from `current` toward `target`, moving by
/// `fraction` of the shortest-arc delta.
///
/// With `fraction` in `(0, 1]` the result never passes `target`.
pub fn approach_angle(current: f64, target: f64, fraction: f64) -> f64 {
    current + shortest_arc(target - current) * fraction
}

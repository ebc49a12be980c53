//! The rotation model: UTC fraction-of-day plus a calibration offset.
//!
//! The offset phase-aligns the surface texture's reference meridian with
//! the sub-solar point. It was tuned against the texture rather than
//! derived from first principles, so it stays a configurable input here;
//! the conventional default lives in the config crate.

use std::f64::consts::TAU;

use chrono::{DateTime, Timelike, Utc};
use glam::DVec3;

/// Progress through the UTC day as a value in `[0, 1)`.
///
/// Milliseconds are included so per-frame rotation is smooth instead of
/// stepping once a second. A leap-second reading folds into the final
/// millisecond of the day to keep the range contract.
pub fn utc_day_fraction(t: DateTime<Utc>) -> f64 {
    let millis = (t.nanosecond() / 1_000_000).min(999) as f64;
    let hours = t.hour() as f64
        + t.minute() as f64 / 60.0
        + t.second() as f64 / 3_600.0
        + millis / 3_600_000.0;
    hours / 24.0
}

/// Maps an instant to the globe's rotation angle or light direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarModel {
    calibration: f64,
}

impl SolarModel {
    /// Build a model from a calibration offset in degrees.
    pub fn from_offset_deg(offset_deg: f64) -> Self {
        Self {
            calibration: offset_deg.to_radians(),
        }
    }

    /// Calibration offset in radians.
    #[must_use]
    pub fn calibration(&self) -> f64 {
        self.calibration
    }

    /// Rotation angle for the given instant, in radians.
    ///
    /// Exactly the calibration offset at 00:00:00 UTC, growing by a full
    /// turn over 24 hours.
    #[must_use]
    pub fn rotation_angle(&self, t: DateTime<Utc>) -> f64 {
        utc_day_fraction(t) * TAU + self.calibration
    }

    /// The rotation expressed as a unit light direction in the equatorial
    /// plane, for the moving-light drive mode.
    ///
    /// Pointing the light along this vector at a static sphere lights the
    /// same hemisphere as rotating the sphere by the negated angle under a
    /// fixed +x light.
    #[must_use]
    pub fn light_direction(&self, t: DateTime<Utc>) -> DVec3 {
        Self::light_direction_for_angle(self.rotation_angle(t))
    }

    /// Light direction derived from an already-computed angle, so a host
    /// smoothing the angle can keep the light consistent with it.
    #[must_use]
    pub fn light_direction_for_angle(angle: f64) -> DVec3 {
        DVec3::new((-angle).cos(), 0.0, (-angle).sin())
    }

    /// Longitude (degrees, in `[-180, 180)`, placement convention)
    /// currently facing the fixed +x light. Diagnostic only.
    #[must_use]
    pub fn lit_longitude_deg(&self, t: DateTime<Utc>) -> f64 {
        let deg = (-self.rotation_angle(t)).to_degrees().rem_euclid(360.0);
        if deg >= 180.0 { deg - 360.0 } else { deg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPS: f64 = 1e-12;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, h, m, s).unwrap()
    }

    #[test]
    fn test_day_fraction_at_midnight_is_zero() {
        assert!(utc_day_fraction(utc(0, 0, 0)).abs() < EPS);
    }

    #[test]
    fn test_day_fraction_at_noon_is_half() {
        assert!((utc_day_fraction(utc(12, 0, 0)) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_day_fraction_stays_below_one() {
        let last = utc(23, 59, 59)
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        let fraction = utc_day_fraction(last);
        assert!(fraction < 1.0, "end of day must stay below 1, got {fraction}");
        assert!(fraction > 0.9999, "end of day should be close to 1");
    }

    #[test]
    fn test_day_fraction_includes_milliseconds() {
        let base = utc(6, 0, 0);
        let later = base
            .checked_add_signed(chrono::Duration::milliseconds(500))
            .unwrap();
        let delta = utc_day_fraction(later) - utc_day_fraction(base);
        assert!(
            (delta - 0.5 / 86_400.0).abs() < EPS,
            "half a second should advance the fraction, delta {delta}"
        );
    }

    #[test]
    fn test_rotation_angle_at_midnight_equals_calibration_exactly() {
        for offset_deg in [-90.0, 120.0, 0.0, 37.5] {
            let model = SolarModel::from_offset_deg(offset_deg);
            let angle = model.rotation_angle(utc(0, 0, 0));
            assert_eq!(
                angle,
                offset_deg.to_radians(),
                "midnight angle must be the bare offset for {offset_deg} deg"
            );
        }
    }

    #[test]
    fn test_rotation_angle_periodic_over_24_hours() {
        let model = SolarModel::from_offset_deg(-90.0);
        let t = utc(9, 30, 15);
        let next_day = t + chrono::Duration::hours(24);
        assert!(
            (model.rotation_angle(t) - model.rotation_angle(next_day)).abs() < EPS,
            "angle must repeat after 24h"
        );
    }

    #[test]
    fn test_rotation_angle_advances_a_quarter_turn_per_six_hours() {
        let model = SolarModel::from_offset_deg(-90.0);
        let delta = model.rotation_angle(utc(6, 0, 0)) - model.rotation_angle(utc(0, 0, 0));
        assert!((delta - TAU / 4.0).abs() < EPS);
    }

    #[test]
    fn test_light_direction_is_unit_and_equatorial() {
        let model = SolarModel::from_offset_deg(-90.0);
        for (h, m) in [(0, 0), (5, 17), (12, 0), (18, 45), (23, 59)] {
            let dir = model.light_direction(utc(h, m, 0));
            assert!((dir.length() - 1.0).abs() < EPS, "light dir must be unit");
            assert!(dir.y.abs() < EPS, "light stays in the equatorial plane");
        }
    }

    #[test]
    fn test_light_direction_matches_negated_angle() {
        let model = SolarModel::from_offset_deg(30.0);
        let t = utc(15, 42, 7);
        let angle = model.rotation_angle(t);
        let dir = model.light_direction(t);
        assert!((dir.x - (-angle).cos()).abs() < EPS);
        assert!((dir.z - (-angle).sin()).abs() < EPS);
    }

    #[test]
    fn test_lit_longitude_with_zero_offset_at_midnight() {
        // Angle 0: the +x meridian faces the light.
        let model = SolarModel::from_offset_deg(0.0);
        assert!(model.lit_longitude_deg(utc(0, 0, 0)).abs() < EPS);
    }

    #[test]
    fn test_lit_longitude_range() {
        let model = SolarModel::from_offset_deg(-90.0);
        for h in 0..24 {
            let lon = model.lit_longitude_deg(utc(h, 0, 0));
            assert!(
                (-180.0..180.0).contains(&lon),
                "lit longitude {lon} out of range at {h}:00"
            );
        }
    }
}

//! Day/night blending math behind the terminator.
//!
//! CPU-side mirror of the fragment logic in
//! [`GLOBE_SHADER_SOURCE`](crate::GLOBE_SHADER_SOURCE): surface intensity
//! from the light direction, a smoothed darkness ramp across a narrow band
//! around the terminator, and the day/night texture mix attenuated toward
//! black on the night side.

use glam::DVec3;
use terrella_math::{lerp, smoothstep};

/// Default half-width of the terminator blend band, in dot-product units.
pub const DEFAULT_TERMINATOR_BAND: f64 = 0.2;

/// Default strength of the night-texture mix.
pub const DEFAULT_NIGHT_STRENGTH: f64 = 0.8;

/// Illumination intensity at a surface point: the cosine of the angle
/// between the outward normal and the light direction. Positive on the day
/// side, negative on the night side, zero on the terminator itself.
pub fn surface_intensity(normal: DVec3, light_direction: DVec3) -> f64 {
    normal.normalize().dot(light_direction)
}

/// Night-side blend factor in `[0, 1]`: 0 in full day, 1 in full night,
/// smoothed across `[-band, band]` around the terminator.
pub fn terminator_darkness(intensity: f64, band: f64) -> f64 {
    1.0 - smoothstep(-band, band, intensity)
}

/// Blend day and night colors for a point with the given darkness.
///
/// The night texture is mixed in at `darkness * night_strength`, then the
/// whole color is attenuated by `1 - darkness` so the night side falls to
/// black with the city-lights texture showing through the blend band.
pub fn day_night_mix(
    day: [f32; 3],
    night: [f32; 3],
    darkness: f64,
    night_strength: f64,
) -> [f32; 3] {
    let mix = darkness * night_strength;
    let day_light = 1.0 - darkness;
    [
        (lerp(f64::from(day[0]), f64::from(night[0]), mix) * day_light) as f32,
        (lerp(f64::from(day[1]), f64::from(night[1]), mix) * day_light) as f32,
        (lerp(f64::from(day[2]), f64::from(night[2]), mix) * day_light) as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_intensity_at_subsolar_point_is_one() {
        let light = DVec3::new(1.0, 0.0, 0.0);
        assert!((surface_intensity(DVec3::new(1.0, 0.0, 0.0), light) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_intensity_at_antisolar_point_is_minus_one() {
        let light = DVec3::new(1.0, 0.0, 0.0);
        assert!((surface_intensity(DVec3::new(-1.0, 0.0, 0.0), light) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_intensity_on_terminator_is_zero() {
        let light = DVec3::new(1.0, 0.0, 0.0);
        assert!(surface_intensity(DVec3::new(0.0, 0.0, 1.0), light).abs() < EPS);
        assert!(surface_intensity(DVec3::new(0.0, 1.0, 0.0), light).abs() < EPS);
    }

    #[test]
    fn test_intensity_normalizes_the_normal() {
        let light = DVec3::new(1.0, 0.0, 0.0);
        let scaled = surface_intensity(DVec3::new(5.0, 0.0, 0.0), light);
        assert!((scaled - 1.0).abs() < EPS, "unnormalized input must not scale the result");
    }

    #[test]
    fn test_darkness_saturates_outside_the_band() {
        assert!(terminator_darkness(1.0, DEFAULT_TERMINATOR_BAND).abs() < EPS);
        assert!(terminator_darkness(0.2, DEFAULT_TERMINATOR_BAND).abs() < EPS);
        assert!((terminator_darkness(-0.2, DEFAULT_TERMINATOR_BAND) - 1.0).abs() < EPS);
        assert!((terminator_darkness(-1.0, DEFAULT_TERMINATOR_BAND) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_darkness_is_half_on_the_terminator() {
        assert!((terminator_darkness(0.0, DEFAULT_TERMINATOR_BAND) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_darkness_transitions_smoothly_across_band() {
        let steps = 200;
        let mut prev = terminator_darkness(0.3, DEFAULT_TERMINATOR_BAND);
        for i in 1..=steps {
            let intensity = 0.3 - 0.6 * i as f64 / steps as f64;
            let darkness = terminator_darkness(intensity, DEFAULT_TERMINATOR_BAND);
            assert!(
                darkness >= prev,
                "darkness must grow toward the night side: {darkness} < {prev}"
            );
            assert!(
                darkness - prev < 0.03,
                "no hard step across the terminator: jump of {}",
                darkness - prev
            );
            prev = darkness;
        }
    }

    #[test]
    fn test_full_day_shows_day_texture() {
        let color = day_night_mix([0.2, 0.4, 0.8], [0.05, 0.05, 0.0], 0.0, DEFAULT_NIGHT_STRENGTH);
        assert_eq!(color, [0.2, 0.4, 0.8]);
    }

    #[test]
    fn test_full_night_attenuates_to_black() {
        let color = day_night_mix([0.2, 0.4, 0.8], [0.05, 0.05, 0.0], 1.0, DEFAULT_NIGHT_STRENGTH);
        assert_eq!(color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mix_is_linear_in_each_channel() {
        // darkness 0.5 at strength 0.5: one quarter toward night, then halved.
        let color = day_night_mix([0.5, 0.25, 1.0], [1.0, 0.75, 0.0], 0.5, 0.5);
        assert_eq!(color, [0.3125, 0.1875, 0.375]);
    }

    #[test]
    fn test_terminator_band_blends_night_lights_in() {
        // Halfway across the band the night texture contributes but the
        // point is not yet black.
        let day = [0.2, 0.4, 0.8];
        let night = [1.0, 0.9, 0.0];
        let color = day_night_mix(day, night, 0.5, DEFAULT_NIGHT_STRENGTH);
        assert!(color[0] > day[0] * 0.5, "night red should raise the channel");
        assert!(color.iter().all(|c| *c > 0.0), "band must not be black");
        assert!(color.iter().all(|c| *c < 1.0), "band must stay below full");
    }
}

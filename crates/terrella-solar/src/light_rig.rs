//! The globe's light rig: the consolidated lighting constants, their GPU
//! uniform block, and the WGSL shader that consumes them.
//!
//! [`LightRig`] is the CPU-side description; [`GlobeLightUniform`] is the
//! std140-compatible block written to a uniform buffer each frame. The
//! WGSL in [`GLOBE_SHADER_SOURCE`] binds that block together with the day
//! and night textures and evaluates the terminator blend per fragment.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;

use crate::terminator::{DEFAULT_NIGHT_STRENGTH, DEFAULT_TERMINATOR_BAND};

/// CPU-side lighting description for the globe scene.
///
/// Collects every lighting constant the visualization's iterations tuned:
/// sun direction/color/intensity, the ambient term, and the terminator
/// blend parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    /// Normalized direction pointing from the surface toward the sun.
    pub sun_direction: DVec3,
    /// Linear RGB sun color.
    pub sun_color: [f32; 3],
    /// Sun intensity multiplier for host-lit meshes (markers, overlays).
    pub sun_intensity: f32,
    /// Linear RGB ambient color.
    pub ambient_color: [f32; 3],
    /// Ambient intensity multiplier.
    pub ambient_intensity: f32,
    /// Half-width of the terminator blend band.
    pub terminator_band: f32,
    /// Night-texture mix strength.
    pub night_strength: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            sun_direction: DVec3::new(1.0, 0.0, 0.0),
            sun_color: [1.0, 1.0, 1.0],
            sun_intensity: 2.5,
            // 0x404040 grey.
            ambient_color: [0.251, 0.251, 0.251],
            ambient_intensity: 0.5,
            terminator_band: DEFAULT_TERMINATOR_BAND as f32,
            night_strength: DEFAULT_NIGHT_STRENGTH as f32,
        }
    }
}

impl LightRig {
    /// Set the sun direction, normalizing the input.
    ///
    /// # Panics
    ///
    /// Panics if the input vector has near-zero length.
    pub fn set_sun_direction(&mut self, direction: DVec3) {
        let len = direction.length();
        assert!(len > 1e-9, "sun direction must not be zero");
        self.sun_direction = direction / len;
    }

    /// Build the GPU-side uniform block from the current rig state.
    pub fn to_uniform(&self) -> GlobeLightUniform {
        GlobeLightUniform {
            direction_band: [
                self.sun_direction.x as f32,
                self.sun_direction.y as f32,
                self.sun_direction.z as f32,
                self.terminator_band,
            ],
            sun_color_intensity: [
                self.sun_color[0],
                self.sun_color[1],
                self.sun_color[2],
                self.sun_intensity,
            ],
            ambient_night: [
                self.ambient_color[0] * self.ambient_intensity,
                self.ambient_color[1] * self.ambient_intensity,
                self.ambient_color[2] * self.ambient_intensity,
                self.night_strength,
            ],
        }
    }
}

/// GPU-side representation, 48 bytes, std140-compatible.
///
/// Bound at `@group(0) @binding(1)`, visible to the fragment stage.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GlobeLightUniform {
    /// xyz = sun direction (normalized), w = terminator band half-width.
    pub direction_band: [f32; 4],
    /// xyz = sun color (linear RGB), w = sun intensity.
    pub sun_color_intensity: [f32; 4],
    /// xyz = ambient color premultiplied by intensity, w = night strength.
    pub ambient_night: [f32; 4],
}

/// WGSL shader for the globe surface: day/night textures blended across
/// the terminator.
pub const GLOBE_SHADER_SOURCE: &str = r#"
struct SceneUniform {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
};

struct GlobeLight {
    direction_band: vec4<f32>,
    sun_color_intensity: vec4<f32>,
    ambient_night: vec4<f32>,
};

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniform;

@group(0) @binding(1)
var<uniform> light: GlobeLight;

@group(1) @binding(0)
var day_texture: texture_2d<f32>;

@group(1) @binding(1)
var night_texture: texture_2d<f32>;

@group(1) @binding(2)
var globe_sampler: sampler;

@vertex
fn vs_globe(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = scene.model * vec4<f32>(in.position, 1.0);
    out.clip_position = scene.view_proj * world;
    // The model transform is a rigid rotation, so the upper 3x3 works
    // directly on normals.
    let model3 = mat3x3<f32>(
        scene.model[0].xyz,
        scene.model[1].xyz,
        scene.model[2].xyz,
    );
    out.world_normal = model3 * in.normal;
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_globe(in: VertexOutput) -> @location(0) vec4<f32> {
    let band = light.direction_band.w;
    let intensity = dot(normalize(in.world_normal), normalize(light.direction_band.xyz));

    // Smoothed night-side factor across the terminator band.
    let darkness = 1.0 - smoothstep(-band, band, intensity);
    let day_light = 1.0 - darkness;

    let day_color = textureSample(day_texture, globe_sampler, in.uv).rgb;
    let night_color = textureSample(night_texture, globe_sampler, in.uv).rgb;

    let blended = mix(day_color, night_color, darkness * light.ambient_night.w);
    return vec4<f32>(blended * day_light, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_buffer_layout_matches_shader() {
        // Three vec4<f32> slots, 48 bytes total.
        assert_eq!(std::mem::size_of::<GlobeLightUniform>(), 48);
        assert_eq!(std::mem::offset_of!(GlobeLightUniform, direction_band), 0);
        assert_eq!(
            std::mem::offset_of!(GlobeLightUniform, sun_color_intensity),
            16
        );
        assert_eq!(std::mem::offset_of!(GlobeLightUniform, ambient_night), 32);
    }

    #[test]
    fn test_default_rig_matches_reference_constants() {
        let rig = LightRig::default();
        assert_eq!(rig.sun_intensity, 2.5);
        assert_eq!(rig.ambient_intensity, 0.5);
        assert!((rig.terminator_band - 0.2).abs() < 1e-6);
        assert!((rig.night_strength - 0.8).abs() < 1e-6);
        assert!((rig.sun_direction.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_sun_direction_normalizes() {
        let mut rig = LightRig::default();
        rig.set_sun_direction(DVec3::new(0.0, 0.0, -7.0));
        assert!((rig.sun_direction.length() - 1.0).abs() < 1e-12);
        assert!((rig.sun_direction.z + 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "must not be zero")]
    fn test_zero_sun_direction_panics() {
        let mut rig = LightRig::default();
        rig.set_sun_direction(DVec3::ZERO);
    }

    #[test]
    fn test_to_uniform_packs_correctly() {
        let mut rig = LightRig::default();
        rig.set_sun_direction(DVec3::new(0.0, 0.0, 1.0));
        let uniform = rig.to_uniform();
        assert!((uniform.direction_band[2] - 1.0).abs() < 1e-6);
        assert!((uniform.direction_band[3] - 0.2).abs() < 1e-6);
        assert!((uniform.sun_color_intensity[3] - 2.5).abs() < 1e-6);
        // Ambient is premultiplied by its intensity.
        assert!((uniform.ambient_night[0] - 0.251 * 0.5).abs() < 1e-6);
        assert!((uniform.ambient_night[3] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_shader_source_declares_expected_interface() {
        assert!(GLOBE_SHADER_SOURCE.contains("fn vs_globe"));
        assert!(GLOBE_SHADER_SOURCE.contains("fn fs_globe"));
        assert!(GLOBE_SHADER_SOURCE.contains("day_texture"));
        assert!(GLOBE_SHADER_SOURCE.contains("night_texture"));
        assert!(GLOBE_SHADER_SOURCE.contains("smoothstep"));
        assert!(GLOBE_SHADER_SOURCE.contains("struct GlobeLight"));
    }
}

//! Interpolation helpers matching their GLSL counterparts, so CPU-side
//! checks agree with what the shader computes.

/// Linear interpolation: `t = 0` returns `a`, `t = 1` returns `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hermite smoothstep between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

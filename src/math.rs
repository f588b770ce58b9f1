//! Small vector helpers on top of `glam::DVec3`.
//!
//! Dot product, magnitude, scaling and subtraction come straight from glam
//! (`dot`, `length`, `*`, `-`); this module adds the operations whose failure
//! modes or rounding rules matter to the renderer.

use glam::DVec3;

use crate::error::DegenerateVectorError;

pub fn normalize(vector: DVec3) -> Result<DVec3, DegenerateVectorError> {
    vector.try_normalize().ok_or(DegenerateVectorError)
}

/// Mirrors `vector` about `normal`: `v - 2 (v . n) n`.
pub fn reflect(vector: DVec3, normal: DVec3) -> DVec3 {
    vector - (2.0 * vector.dot(normal) * normal)
}

/// Maps a [0, 1] channel to a byte, clamping anything outside the range.
pub fn clamp_to_byte(value: f64) -> u8 {
    // NaN falls through both bounds and casts to 0
    (value * 255.0).clamp(0.0, 255.0).round() as u8
}

pub fn to_rgb(color: DVec3) -> [u8; 3] {
    [
        clamp_to_byte(color.x),
        clamp_to_byte(color.y),
        clamp_to_byte(color.z),
    ]
}

// Perspective helpers for the world-space tick.

/// Rotate `(x, z)` by an angle given as its cosine and sine, in the XZ plane.
#[inline]
pub fn rotate_xz(x: f32, z: f32, cos: f32, sin: f32) -> (f32, f32) {
    (x * cos - z * sin, z * cos + x * sin)
}

/// Perspective divide for a point at depth `z` seen through a lens of
/// `focal_length`. Points at or behind the lens (`f + z <= 0`) get 0.
#[inline]
pub fn perspective_scale(focal_length: f32, z: f32) -> f32 {
    let denom = focal_length + z;
    if denom <= 0.0 {
        0.0
    } else {
        focal_length / denom
    }
}

/// Shading progress for depth `z`: 0 at or in front of the origin, then
/// linear with 1 at half the focal length. Not clamped above 1.
#[inline]
pub fn depth_progress(z: f32, focal_length: f32) -> f32 {
    if z > 0.0 {
        z / (focal_length / 2.0)
    } else {
        0.0
    }
}

//src/utilities/easing.rs

// easing functions for tile movement

use nannou::prelude::*;

/// Cubic ease-in-ease-out, `3t² - 2t³`. Zero slope at both ends.
/// `t` is clamped to [0, 1] first.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Normalized progress of `now` through [start, end], clamped to [0, 1].
pub fn progress(start: f32, end: f32, now: f32) -> f32 {
    if end <= start {
        return 1.0;
    }
    ((now - start) / (end - start)).clamp(0.0, 1.0)
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Per-axis linear interpolation.
pub fn lerp_vec2(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    vec2(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}

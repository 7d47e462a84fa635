// src/animation/keyframe.rs
//
// A single timed slide of one tile towards a cell.

use crate::models::GridPos;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub start_time: f32,
    pub end_time: f32,
    pub target: GridPos,
}

impl Keyframe {
    pub fn new(start_time: f32, duration: f32, target: GridPos) -> Self {
        debug_assert!(duration > 0.0, "keyframe duration must be positive");
        Self {
            start_time,
            end_time: start_time + duration,
            target,
        }
    }

    pub fn duration(&self) -> f32 {
        self.end_time - self.start_time
    }

    /// True once `now` is strictly past the end.
    pub fn is_finished(&self, now: f32) -> bool {
        self.end_time < now
    }
}

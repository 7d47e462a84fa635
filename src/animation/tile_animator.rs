// src/animation/tile_animator.rs
//
// Time based tile movement.
// The grid moves tiles instantly; the animator queues a keyframe per move and
// is sampled each frame to find where a tile should be drawn.
// A single watermark shared by all tiles makes slides play back to back,
// so rapid clicks chain instead of overlapping.

use nannou::prelude::*;

use crate::animation::Keyframe;
use crate::models::{GridPos, Tile};
use crate::utilities::easing::{lerp_vec2, progress, smoothstep};

#[derive(Debug, Clone)]
pub struct TileAnimator {
    move_duration: f32,
    watermark: f32, // end time of the latest keyframe scheduled on any tile
}

impl TileAnimator {
    pub fn new(move_duration: f32) -> Self {
        Self {
            move_duration,
            watermark: 0.0,
        }
    }

    pub fn move_duration(&self) -> f32 {
        self.move_duration
    }

    pub fn watermark(&self) -> f32 {
        self.watermark
    }

    /// Queues a slide of `tile` into `target`, the cell it now occupies.
    /// Starts no earlier than the end of the previously scheduled slide.
    pub fn schedule_move(&mut self, current_time: f32, tile: &mut Tile, target: GridPos) -> Keyframe {
        let start = current_time.max(self.watermark);
        let keyframe = Keyframe::new(start, self.move_duration, target);
        self.watermark = keyframe.end_time;
        tile.keyframes.push_back(keyframe);
        keyframe
    }

    /// Position of `tile` at `now`, in grid units.
    ///
    /// Drops every keyframe that ended before `now`, committing its target to
    /// the tile's last position, then eases towards the front keyframe (if any).
    /// Safe to call any number of times per frame; a skipped frame never skips
    /// a keyframe's effect on the settled position.
    pub fn sample(&self, tile: &mut Tile, now: f32) -> Vec2 {
        while let Some(front) = tile.keyframes.front() {
            if !front.is_finished(now) {
                break;
            }
            tile.last_position = front.target;
            tile.keyframes.pop_front();
        }

        let from = grid_vec(tile.last_position);
        match tile.keyframes.front() {
            None => from,
            Some(front) => {
                let t = progress(front.start_time, front.end_time, now);
                lerp_vec2(from, grid_vec(front.target), smoothstep(t))
            }
        }
    }

    /// Drops any queued movement and pins the tile to `position`.
    pub fn settle(&self, tile: &mut Tile, position: GridPos) {
        tile.keyframes.clear();
        tile.last_position = position;
    }

    pub fn reset(&mut self) {
        self.watermark = 0.0;
    }
}

fn grid_vec(pos: GridPos) -> Vec2 {
    vec2(pos.x as f32, pos.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TileId;

    const DURATION: f32 = 0.125;

    fn tile_at(id: u8, x: i32, y: i32) -> Tile {
        Tile::new(TileId::new(id).unwrap(), GridPos::new(x, y))
    }

    #[test]
    fn test_schedule_sets_times_and_watermark() {
        let mut animator = TileAnimator::new(DURATION);
        let mut tile = tile_at(12, 3, 2);

        let kf = animator.schedule_move(1.0, &mut tile, GridPos::new(3, 3));
        assert_eq!(kf.start_time, 1.0);
        assert_eq!(kf.end_time, 1.0 + DURATION);
        assert_eq!(kf.target, GridPos::new(3, 3));
        assert_eq!(animator.watermark(), 1.0 + DURATION);
        assert_eq!(tile.keyframes().len(), 1);
    }

    #[test]
    fn test_rapid_moves_chain() {
        // second move issued 0.01s after the first starts when the first ends
        let mut animator = TileAnimator::new(DURATION);
        let mut a = tile_at(12, 3, 2);
        let mut b = tile_at(11, 2, 2);

        let first = animator.schedule_move(0.0, &mut a, GridPos::new(3, 3));
        let second = animator.schedule_move(0.01, &mut b, GridPos::new(3, 2));
        assert_eq!(second.start_time, first.end_time);
        assert_eq!(second.end_time, first.end_time + DURATION);
    }

    #[test]
    fn test_late_move_starts_now() {
        let mut animator = TileAnimator::new(DURATION);
        let mut tile = tile_at(12, 3, 2);
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));
        let later = animator.schedule_move(5.0, &mut tile, GridPos::new(3, 2));
        assert_eq!(later.start_time, 5.0);
    }

    #[test]
    fn test_sample_interpolates_with_smoothstep() {
        let mut animator = TileAnimator::new(1.0);
        let mut tile = tile_at(12, 3, 2);
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));

        assert_eq!(animator.sample(&mut tile, 0.0), vec2(3.0, 2.0));
        assert_eq!(animator.sample(&mut tile, 0.5), vec2(3.0, 2.5));
        let quarter = animator.sample(&mut tile, 0.25);
        assert!((quarter.y - (2.0 + smoothstep(0.25))).abs() < 1e-6);
        assert_eq!(animator.sample(&mut tile, 1.0), vec2(3.0, 3.0));
        // exactly at the end the keyframe is still queued
        assert_eq!(tile.keyframes().len(), 1);
    }

    #[test]
    fn test_sample_before_start_holds_position() {
        let mut animator = TileAnimator::new(DURATION);
        let mut a = tile_at(12, 3, 2);
        let mut b = tile_at(11, 2, 2);
        animator.schedule_move(0.0, &mut a, GridPos::new(3, 3));
        animator.schedule_move(0.0, &mut b, GridPos::new(3, 2));

        // b's slide is queued behind a's
        assert_eq!(animator.sample(&mut b, 0.1), vec2(2.0, 2.0));
    }

    #[test]
    fn test_sample_drains_finished_keyframes() {
        let mut animator = TileAnimator::new(DURATION);
        let mut tile = tile_at(15, 2, 3);
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));
        animator.schedule_move(0.0, &mut tile, GridPos::new(2, 3));
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));
        assert_eq!(tile.keyframes().len(), 3);

        // one dropped frame far past the end still commits every target in order
        let pos = animator.sample(&mut tile, 10.0);
        assert_eq!(pos, vec2(3.0, 3.0));
        assert_eq!(tile.last_position(), GridPos::new(3, 3));
        assert!(tile.keyframes().is_empty());
        assert!(!tile.is_animating());
    }

    #[test]
    fn test_sample_partial_drain() {
        let mut animator = TileAnimator::new(1.0);
        let mut tile = tile_at(15, 2, 3);
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));
        animator.schedule_move(0.0, &mut tile, GridPos::new(2, 3));

        // halfway through the second slide
        let pos = animator.sample(&mut tile, 1.5);
        assert_eq!(tile.keyframes().len(), 1);
        assert_eq!(tile.last_position(), GridPos::new(3, 3));
        assert_eq!(pos, vec2(2.5, 3.0));
    }

    #[test]
    fn test_settle_and_reset() {
        let mut animator = TileAnimator::new(DURATION);
        let mut tile = tile_at(1, 0, 0);
        animator.schedule_move(3.0, &mut tile, GridPos::new(1, 0));
        animator.settle(&mut tile, GridPos::new(2, 2));
        animator.reset();

        assert!(tile.keyframes().is_empty());
        assert_eq!(animator.watermark(), 0.0);
        assert_eq!(animator.sample(&mut tile, 3.05), vec2(2.0, 2.0));
    }
}

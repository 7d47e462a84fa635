//! Integration tests for keyframe scheduling and sampling.

use almost15::animation::TileAnimator;
use almost15::models::{GridPos, Tile, TileId};
use almost15::utilities::easing::smoothstep;
use proptest::prelude::*;

const DURATION: f32 = 0.125;

fn tile() -> Tile {
    Tile::new(TileId::new(12).unwrap(), GridPos::new(3, 2))
}

#[test]
fn chained_moves_do_not_overlap() {
    let mut animator = TileAnimator::new(DURATION);
    let mut a = tile();
    let mut b = Tile::new(TileId::new(11).unwrap(), GridPos::new(2, 2));

    let first = animator.schedule_move(0.0, &mut a, GridPos::new(3, 3));
    let second = animator.schedule_move(0.01, &mut b, GridPos::new(3, 2));
    assert_eq!(second.start_time, first.end_time);
    assert_ne!(second.start_time, 0.01 + DURATION);
}

#[test]
fn draining_reaches_target_exactly() {
    let mut animator = TileAnimator::new(DURATION);
    let mut tile = tile();
    animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));
    let before = tile.keyframes().len();

    let pos = animator.sample(&mut tile, 1.0);
    assert_eq!((pos.x, pos.y), (3.0, 3.0));
    assert!(tile.keyframes().len() < before);
    assert_eq!(tile.last_position(), GridPos::new(3, 3));
}

#[test]
fn repeated_sampling_is_idempotent() {
    let mut animator = TileAnimator::new(DURATION);
    let mut tile = tile();
    animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));

    let a = animator.sample(&mut tile, 0.06);
    let b = animator.sample(&mut tile, 0.06);
    let c = animator.sample(&mut tile, 0.06);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(tile.keyframes().len(), 1);
}

proptest! {
    #[test]
    fn sampling_is_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let mut animator = TileAnimator::new(1.0);
        let mut tile = tile();
        animator.schedule_move(0.0, &mut tile, GridPos::new(3, 3));

        let y_lo = animator.sample(&mut tile, lo).y;
        let y_hi = animator.sample(&mut tile, hi).y;
        prop_assert!(y_lo <= y_hi, "{} at {} > {} at {}", y_lo, lo, y_hi, hi);
        prop_assert!(smoothstep(lo) <= smoothstep(hi));
    }

    #[test]
    fn keyframes_are_chronological(gaps in prop::collection::vec(0.0f32..0.5, 1..30)) {
        let mut animator = TileAnimator::new(DURATION);
        let mut tile = tile();
        let mut now = 0.0;
        let mut empty = GridPos::new(3, 3);
        let mut last_end = f32::MIN;

        for gap in gaps {
            now += gap;
            let kf = animator.schedule_move(now, &mut tile, empty);
            prop_assert!(kf.start_time >= last_end);
            prop_assert!(kf.start_time >= now);
            prop_assert!(kf.end_time > kf.start_time);
            last_end = kf.end_time;
            empty = if empty == GridPos::new(3, 3) { GridPos::new(3, 2) } else { GridPos::new(3, 3) };
        }

        let pos = animator.sample(&mut tile, animator.watermark() + 1.0);
        prop_assert!(tile.keyframes().is_empty());
        prop_assert_eq!((pos.x as i32, pos.y as i32), (tile.last_position().x, tile.last_position().y));
    }
}

#[test]
fn smoothstep_endpoints_exact() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
}

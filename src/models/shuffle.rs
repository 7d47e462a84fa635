// src/models/shuffle.rs
//
// Scrambles a board by walking the hole around at random. Every step is a
// legal move, so the result is always reachable from where the walk started.

use rand::Rng;

use crate::models::{Grid, GridPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Cells swapped once before the walk when `pre_swap` is on: the last two
/// occupied cells of a solved board (tiles 14 and 15).
pub const PRE_SWAP_CELLS: (GridPos, GridPos) = (GridPos::new(1, 3), GridPos::new(2, 3));

#[derive(Debug, Clone)]
pub struct Shuffler {
    pub steps: usize,
    pub pre_swap: bool,
}

impl Shuffler {
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            pre_swap: false,
        }
    }

    pub fn with_pre_swap(mut self, pre_swap: bool) -> Self {
        self.pre_swap = pre_swap;
        self
    }

    pub fn shuffle<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        if self.pre_swap {
            grid.swap_tiles(PRE_SWAP_CELLS.0, PRE_SWAP_CELLS.1);
        }

        for _ in 0..self.steps {
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let target = step_target(grid.empty(), direction);
            let moved = grid.apply_move(target);
            debug_assert!(moved, "shuffle step to {} was illegal", target);
        }
    }
}

/// The cell the hole moves into for `direction`, bouncing off the edge.
pub fn step_target(empty: GridPos, direction: Direction) -> GridPos {
    let (dx, dy) = direction.delta();
    let target = empty.offset(dx, dy);
    if target.in_bounds() {
        target
    } else {
        let (dx, dy) = direction.opposite().delta();
        empty.offset(dx, dy)
    }
}

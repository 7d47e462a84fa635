// src/models/session.rs
//
// One game: the board, its tiles and their animation, and whether it was won.
// Owned by the app model and mutated only from the frame update.

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::animation::TileAnimator;
use crate::config::Config;
use crate::models::shuffle::Shuffler;
use crate::models::tile::tile_arena;
use crate::models::{Grid, GridPos, Tile, TileId};

/// Where one tile should be drawn this frame, in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSample {
    pub id: TileId,
    pub position: Vec2,
}

pub struct GameSession {
    grid: Grid,
    tiles: Vec<Tile>,
    animator: TileAnimator,
    shuffler: Shuffler,
    rng: StdRng,
    victory_time: Option<f32>,
}

impl GameSession {
    /// A solved, unshuffled session. Call `reshuffle` to start playing.
    pub fn new(shuffler: Shuffler, move_duration: f32, rng: StdRng) -> Self {
        Self {
            grid: Grid::new(),
            tiles: tile_arena(),
            animator: TileAnimator::new(move_duration),
            shuffler,
            rng,
            victory_time: None,
        }
    }

    /// A freshly shuffled session built from config.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.shuffle.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let shuffler = Shuffler::new(config.shuffle.steps).with_pre_swap(config.shuffle.pre_swap);

        let mut session = Self::new(shuffler, config.animation.move_duration, rng);
        session.reshuffle();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    pub fn animator(&self) -> &TileAnimator {
        &self.animator
    }

    pub fn is_won(&self) -> bool {
        self.victory_time.is_some()
    }

    pub fn victory_time(&self) -> Option<f32> {
        self.victory_time
    }

    /// Starts a new game: solved board, shuffled, tiles snapped into place
    /// without replaying the shuffle, victory cleared.
    pub fn reshuffle(&mut self) {
        self.grid.initialize();
        self.shuffler.shuffle(&mut self.grid, &mut self.rng);

        self.animator.reset();
        for (pos, tile) in self.grid.cells() {
            if let Some(id) = tile {
                self.animator.settle(&mut self.tiles[id.index()], pos);
            }
        }
        self.victory_time = None;

        info!(
            steps = self.shuffler.steps,
            pre_swap = self.shuffler.pre_swap,
            correct = self.grid.correct_count(),
            solvable = self.grid.is_solvable(),
            "shuffled board"
        );
        debug!("\n{}", self.grid);
    }

    /// Slides the tile at `target` into the hole if that is a legal move,
    /// queueing its animation and checking for a win.
    pub fn try_move(&mut self, target: GridPos, now: f32) -> bool {
        let destination = self.grid.empty();
        if !self.grid.apply_move(target) {
            trace!(%target, empty = %destination, "ignored move");
            return false;
        }

        if let Some(id) = self.grid.tile_at(destination) {
            let keyframe =
                self.animator
                    .schedule_move(now, &mut self.tiles[id.index()], destination);
            debug!(
                tile = %id,
                from = %target,
                to = %destination,
                start = keyframe.start_time,
                "moved tile"
            );
        }

        self.update_victory(now);
        true
    }

    /// Latches victory the first time the board counts as solved.
    /// Returns true only on the frame the win is detected.
    pub fn update_victory(&mut self, now: f32) -> bool {
        if self.victory_time.is_some() || !self.grid.check_victory() {
            return false;
        }
        self.victory_time = Some(now);
        info!(time = now, correct = self.grid.correct_count(), "puzzle solved");
        true
    }

    /// Samples every tile's animated position at `now`.
    pub fn sample(&mut self, now: f32) -> Vec<TileSample> {
        let animator = &self.animator;
        self.tiles
            .iter_mut()
            .map(|tile| TileSample {
                id: tile.id(),
                position: animator.sample(tile, now),
            })
            .collect()
    }
}

// src/models/tile.rs
//
// A numbered tile. The grid only knows tile ids; the per-tile animation
// state lives here and is driven by `TileAnimator`.

use std::collections::VecDeque;

use crate::animation::Keyframe;
use crate::models::{GridPos, TileId};

#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    pub(crate) keyframes: VecDeque<Keyframe>,
    pub(crate) last_position: GridPos,
}

impl Tile {
    pub fn new(id: TileId, position: GridPos) -> Self {
        Self {
            id,
            keyframes: VecDeque::new(),
            last_position: position,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn label(&self) -> String {
        self.id.to_string()
    }

    /// The most recently settled cell.
    pub fn last_position(&self) -> GridPos {
        self.last_position
    }

    pub fn keyframes(&self) -> &VecDeque<Keyframe> {
        &self.keyframes
    }

    pub fn is_animating(&self) -> bool {
        !self.keyframes.is_empty()
    }
}

/// One tile per id, indexed by `TileId::index`.
pub fn tile_arena() -> Vec<Tile> {
    TileId::all().map(|id| Tile::new(id, id.home())).collect()
}

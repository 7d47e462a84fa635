// src/models/grid_model.rs
//
// The logical 4x4 board: which tile sits in which cell, and where the hole is.
// Moves are instant here; the animation layer smooths them out on screen.

use std::fmt;

pub const GRID_SIZE: usize = 4;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const TILE_COUNT: usize = CELL_COUNT - 1;

/// A cell on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE as i32).contains(&self.x) && (0..GRID_SIZE as i32).contains(&self.y)
    }

    pub fn manhattan(&self, other: GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> GridPos {
        GridPos::new(self.x + dx, self.y + dy)
    }

    /// Row-major index; only meaningful for in-bounds positions.
    pub fn index(&self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }

    pub fn from_index(index: usize) -> Self {
        GridPos::new((index % GRID_SIZE) as i32, (index / GRID_SIZE) as i32)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile identity, 1..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u8);

impl TileId {
    pub fn new(id: u8) -> Option<Self> {
        (1..=TILE_COUNT as u8).contains(&id).then_some(Self(id))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Slot in the tile arena.
    pub fn index(&self) -> usize {
        self.0 as usize - 1
    }

    /// Where this tile sits on a solved board.
    pub fn home(&self) -> GridPos {
        GridPos::from_index(self.index())
    }

    pub fn all() -> impl Iterator<Item = TileId> {
        (1..=TILE_COUNT as u8).map(TileId)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of correctly placed cells (out of 16) that still counts as solved.
pub const VICTORY_THRESHOLD: usize = CELL_COUNT - 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<TileId>; GRID_SIZE]; GRID_SIZE], // [row][col]
    empty: GridPos,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A solved board: tile `4*row + col + 1` at (col, row), hole bottom-right.
    pub fn new() -> Self {
        let mut grid = Grid {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            empty: GridPos::new(GRID_SIZE as i32 - 1, GRID_SIZE as i32 - 1),
        };
        grid.initialize();
        grid
    }

    pub fn initialize(&mut self) {
        for id in TileId::all() {
            let home = id.home();
            self.cells[home.y as usize][home.x as usize] = Some(id);
        }
        let last = GRID_SIZE - 1;
        self.cells[last][last] = None;
        self.empty = GridPos::new(last as i32, last as i32);
    }

    pub fn empty(&self) -> GridPos {
        self.empty
    }

    pub fn tile_at(&self, pos: GridPos) -> Option<TileId> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.y as usize][pos.x as usize]
    }

    pub fn position_of(&self, id: TileId) -> Option<GridPos> {
        self.cells().find(|(_, tile)| *tile == Some(id)).map(|(pos, _)| pos)
    }

    /// Every cell in row-major order with its occupant.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, Option<TileId>)> + '_ {
        (0..CELL_COUNT).map(move |i| {
            let pos = GridPos::from_index(i);
            (pos, self.cells[pos.y as usize][pos.x as usize])
        })
    }

    /// Slides the tile at `target` into the hole. Only a cell orthogonally
    /// adjacent to the hole is a legal target; anything else is a no-op.
    pub fn apply_move(&mut self, target: GridPos) -> bool {
        if !target.in_bounds() || target.manhattan(self.empty) != 1 {
            return false;
        }

        let tile = self.cells[target.y as usize][target.x as usize].take();
        self.cells[self.empty.y as usize][self.empty.x as usize] = tile;
        self.empty = target;
        true
    }

    /// Swaps two occupied cells directly, bypassing move rules.
    /// Returns false (and does nothing) if either cell is the hole or out of bounds.
    pub fn swap_tiles(&mut self, a: GridPos, b: GridPos) -> bool {
        if a == b || self.tile_at(a).is_none() || self.tile_at(b).is_none() {
            return false;
        }
        let tmp = self.cells[a.y as usize][a.x as usize];
        self.cells[a.y as usize][a.x as usize] = self.cells[b.y as usize][b.x as usize];
        self.cells[b.y as usize][b.x as usize] = tmp;
        true
    }

    /// How many of the 16 cells hold what a solved board holds there.
    /// The hole counts as tile 16.
    pub fn correct_count(&self) -> usize {
        self.cells()
            .filter(|(pos, tile)| {
                let expected = match tile {
                    Some(id) => id.index(),
                    None => CELL_COUNT - 1,
                };
                pos.index() == expected
            })
            .count()
    }

    pub fn check_victory(&self) -> bool {
        self.correct_count() >= VICTORY_THRESHOLD
    }

    pub fn is_solved(&self) -> bool {
        self.correct_count() == CELL_COUNT
    }

    /// Parity test for an even-width board: reachable from the solved board iff
    /// the tile inversions plus the hole's row (counted from the bottom, from 0)
    /// is even.
    pub fn is_solvable(&self) -> bool {
        let order: Vec<u8> = self
            .cells()
            .filter_map(|(_, tile)| tile.map(|id| id.get()))
            .collect();

        let mut inversions = 0;
        for i in 0..order.len() {
            for j in i + 1..order.len() {
                if order[i] > order[j] {
                    inversions += 1;
                }
            }
        }

        let row_from_bottom = GRID_SIZE as i32 - 1 - self.empty.y;
        (inversions + row_from_bottom) % 2 == 0
    }

    /// Checks the structural invariants: one hole, every id exactly once,
    /// and `empty` pointing at the hole.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; TILE_COUNT];
        let mut holes = 0;
        for (pos, tile) in self.cells() {
            match tile {
                Some(id) => {
                    if seen[id.index()] {
                        return false;
                    }
                    seen[id.index()] = true;
                }
                None => {
                    holes += 1;
                    if pos != self.empty {
                        return false;
                    }
                }
            }
        }
        holes == 1 && seen.iter().all(|s| *s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|tile| match tile {
                    Some(id) => format!("{:>2}", id.get()),
                    None => " .".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

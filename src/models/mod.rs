pub mod grid_model;
pub mod session;
pub mod shuffle;
pub mod tile;

pub use grid_model::{Grid, GridPos, TileId, GRID_SIZE};
pub use session::{GameSession, TileSample};
pub use shuffle::{Direction, Shuffler};
pub use tile::Tile;

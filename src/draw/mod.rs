// src/draw/mod.rs
// Board drawing with nannou

pub mod board_draw;

pub use board_draw::{draw_board, BoardStyle};

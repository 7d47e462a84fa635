// src/views/mod.rs

pub mod board_frame;
pub mod board_layout;

pub use board_frame::{BoardFrame, TileSprite};
pub use board_layout::{device_to_world, world_to_device, BoardLayout, ScreenRect};

// src/views/board_layout.rs
//
// Cell <-> pixel mapping for the board.
// Everything here is in device pixels: origin top-left, y pointing down.
// nannou draws in world space (origin at the window centre, y up), so the
// conversions to and from world space live here too.

use nannou::prelude::*;

use crate::config::{BoardConfig, WindowConfig};
use crate::models::{GridPos, GRID_SIZE};

/// Axis-aligned rectangle in device pixels, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x && point.x < self.x + self.w && self.y <= point.y && point.y < self.y + self.h
    }

    /// The same rectangle as a nannou world-space `Rect` inside `window`.
    pub fn to_world(&self, window: Rect) -> Rect {
        let center = device_to_world(self.center(), window);
        Rect::from_xy_wh(center, vec2(self.w, self.h))
    }
}

pub fn device_to_world(point: Vec2, window: Rect) -> Vec2 {
    vec2(window.left() + point.x, window.top() - point.y)
}

pub fn world_to_device(point: Vec2, window: Rect) -> Vec2 {
    vec2(point.x - window.left(), window.top() - point.y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
    pub cell_margin: u32,
    pub cell_offset: u32, // cell plus margin on both sides
    pub board_size: u32,
    pub board_start_x: u32,
    pub board_start_y: u32,
}

impl BoardLayout {
    pub fn new(window: &WindowConfig, board: &BoardConfig) -> Self {
        let cell_size = 2 * board.cell_size_half;
        let cell_offset = cell_size + 2 * board.cell_margin;
        let board_size = GRID_SIZE as u32 * cell_offset;

        Self {
            screen_width: window.width,
            screen_height: window.height,
            cell_size,
            cell_margin: board.cell_margin,
            cell_offset,
            board_size,
            board_start_x: window.width.saturating_sub(board_size) / 2,
            board_start_y: window.height.saturating_sub(board_size) / 2,
        }
    }

    /// Top-left pixel of a (possibly fractional) cell coordinate.
    pub fn cell_to_screen(&self, cell: Vec2) -> Vec2 {
        vec2(
            self.board_start_x as f32 + self.cell_offset as f32 * cell.x,
            self.board_start_y as f32 + self.cell_offset as f32 * cell.y,
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.board_rect().contains(point)
    }

    /// The cell under `point`, or None when the point is off the board.
    pub fn cell_at(&self, point: Vec2) -> Option<GridPos> {
        if !self.contains(point) {
            return None;
        }
        let x = (point.x - self.board_start_x as f32) / self.cell_offset as f32;
        let y = (point.y - self.board_start_y as f32) / self.cell_offset as f32;
        Some(GridPos::new(x.floor() as i32, y.floor() as i32))
    }

    /// Board area without the outer margin; the clickable region.
    pub fn board_rect(&self) -> ScreenRect {
        ScreenRect::new(
            self.board_start_x as f32,
            self.board_start_y as f32,
            self.board_size as f32,
            self.board_size as f32,
        )
    }

    /// Dark backing behind the tiles, one margin wider on every side.
    pub fn outer_rect(&self) -> ScreenRect {
        let margin = self.cell_margin as f32;
        let board = self.board_rect();
        ScreenRect::new(
            board.x - margin,
            board.y - margin,
            board.w + 2.0 * margin,
            board.h + 2.0 * margin,
        )
    }

    /// The face of a tile drawn at `cell` (fractional while sliding).
    pub fn tile_rect(&self, cell: Vec2) -> ScreenRect {
        let top_left = self.cell_to_screen(cell);
        let margin = self.cell_margin as f32;
        let size = self.cell_size as f32;
        ScreenRect::new(top_left.x + margin, top_left.y + margin, size, size)
    }

    /// A whole cell including its margins, used for the hover highlight.
    pub fn cell_rect(&self, cell: GridPos) -> ScreenRect {
        let top_left = self.cell_to_screen(vec2(cell.x as f32, cell.y as f32));
        let size = self.cell_offset as f32;
        ScreenRect::new(top_left.x, top_left.y, size, size)
    }
}

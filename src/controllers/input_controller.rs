// src/controllers/input_controller.rs
//
// Turns raw pointer state into "which cell is under the pointer" and
// "was there a fresh press this frame". Mouse and touch are unified: a touch
// starting (no touches last frame, some now) counts as a left-button press.

use nannou::prelude::*;
use std::collections::BTreeMap;

use crate::models::GridPos;
use crate::views::BoardLayout;

/// Remembers one frame of input to report rising edges only.
#[derive(Debug, Default, Clone)]
pub struct PressEdgeDetector {
    prev_mouse_down: bool,
    prev_touch_count: usize,
}

impl PressEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds this frame's state; true when a press began this frame.
    pub fn update(&mut self, mouse_down: bool, touch_count: usize) -> bool {
        let mouse_pressed = mouse_down && !self.prev_mouse_down;
        let touch_pressed = touch_count > 0 && self.prev_touch_count == 0;
        self.prev_mouse_down = mouse_down;
        self.prev_touch_count = touch_count;
        mouse_pressed || touch_pressed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl From<nannou::event::TouchPhase> for TouchPhase {
    fn from(phase: nannou::event::TouchPhase) -> Self {
        match phase {
            nannou::event::TouchPhase::Started => TouchPhase::Started,
            nannou::event::TouchPhase::Moved => TouchPhase::Moved,
            nannou::event::TouchPhase::Ended => TouchPhase::Ended,
            nannou::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
        }
    }
}

/// Active touches by id, positions in device pixels.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    active: BTreeMap<u64, Vec2>,
}

impl TouchTracker {
    pub fn handle(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.active.insert(id, position);
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active.remove(&id);
            }
        }
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    /// The oldest-id active touch.
    pub fn primary(&self) -> Option<Vec2> {
        self.active.values().next().copied()
    }
}

/// The input result for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerFrame {
    pub hovered: Option<GridPos>,
    pub pressed: bool,
}

impl PointerFrame {
    /// The cell to move, when a press landed on the board.
    pub fn move_request(&self) -> Option<GridPos> {
        if self.pressed {
            self.hovered
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct InputController {
    edges: PressEdgeDetector,
    touches: TouchTracker,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        self.touches.handle(id, phase, position);
    }

    pub fn touch_count(&self) -> usize {
        self.touches.count()
    }

    /// Resolves the pointer (first touch if any, else the mouse) against the
    /// board and advances the edge detector. Call exactly once per frame.
    pub fn frame(&mut self, layout: &BoardLayout, mouse: Vec2, mouse_down: bool) -> PointerFrame {
        let pointer = self.touches.primary().unwrap_or(mouse);
        let pressed = self.edges.update(mouse_down, self.touches.count());
        PointerFrame {
            hovered: layout.cell_at(pointer),
            pressed,
        }
    }
}

pub mod input_controller;

pub use input_controller::{InputController, PointerFrame, PressEdgeDetector, TouchPhase, TouchTracker};

pub mod keyframe;
pub mod tile_animator;

pub use keyframe::Keyframe;
pub use tile_animator::TileAnimator;

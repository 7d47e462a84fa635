pub mod victory_fx;

pub use victory_fx::{VictoryFade, VictoryOverlay};

// src/config/config_types.rs
//
// Config types for the game

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Almost 15"),
            width: 900,
            height: 900,
        }
    }
}

/// Board geometry in device pixels.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub cell_size_half: u32,
    pub cell_margin: u32,
    pub font_size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size_half: 80,
            cell_margin: 3,
            font_size: 40,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShuffleConfig {
    pub steps: usize,
    pub pre_swap: bool,
    pub seed: Option<u64>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            steps: 10_000,
            pre_swap: false,
            seed: None,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub move_duration: f32, // seconds per tile slide
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            move_duration: 0.125,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VictoryConfig {
    pub banner: String,
    pub message: String,
    pub banner_font_size: u32,
    pub message_font_size: u32,
    pub message_delay: f32, // seconds after the win before the message fades in
    pub message_fade: f32,  // fade-in length
}

impl Default for VictoryConfig {
    fn default() -> Self {
        Self {
            banner: String::from("You win!"),
            message: String::from("Press R to shuffle again"),
            banner_font_size: 72,
            message_font_size: 32,
            message_delay: 3.0,
            message_fade: 5.0,
        }
    }
}

/// RGBA colors, 0-255 per channel.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub background: [u8; 4],
    pub board: [u8; 4],
    pub tile: [u8; 4],
    pub text: [u8; 4],
    pub highlight: [u8; 4],
    pub overlay: [u8; 4],
    pub banner: [u8; 4],
    pub message: [u8; 4],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [245, 245, 245, 255],
            board: [16, 16, 16, 255],
            tile: [245, 245, 245, 255],
            text: [16, 16, 16, 255],
            highlight: [0, 0, 255, 64],
            overlay: [0, 0, 0, 160],
            banner: [255, 161, 0, 255],
            message: [245, 245, 245, 255],
        }
    }
}

// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::config_types::*;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub shuffle: ShuffleConfig,
    pub animation: AnimationConfig,
    pub victory: VictoryConfig,
    pub style: StyleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_path) = Self::exe_dir_config_path() {
            if exe_path.exists() {
                return Self::load_from_path(&exe_path);
            }
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }

    /// Rejects values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.animation.move_duration > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "animation.move_duration must be positive, got {}",
                self.animation.move_duration
            )));
        }
        if !(self.victory.message_fade > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "victory.message_fade must be positive, got {}",
                self.victory.message_fade
            )));
        }
        if self.board.cell_size_half == 0 {
            return Err(ConfigError::Invalid(
                "board.cell_size_half must be non-zero".to_string(),
            ));
        }

        let board_outer = 4 * (2 * self.board.cell_size_half + 2 * self.board.cell_margin)
            + 2 * self.board.cell_margin;
        if board_outer > self.window.width.min(self.window.height) {
            return Err(ConfigError::Invalid(format!(
                "board needs {}px but the window is {}x{}",
                board_outer, self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.shuffle.steps, 10_000);
        assert_eq!(config.animation.move_duration, 0.125);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [shuffle]
            steps = 50
            pre_swap = true
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.shuffle.steps, 50);
        assert!(config.shuffle.pre_swap);
        assert_eq!(config.shuffle.seed, Some(7));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_shipped_config_parses() {
        let content = include_str!("../../config.toml");
        let config = Config::from_toml_str(content).unwrap();
        assert_eq!(config.window.width, 900);
        assert!(config.shuffle.pre_swap);
        assert_eq!(config.style.highlight, [0, 0, 255, 64]);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = Config::from_toml_str("[animation]\nmove_duration = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_board_larger_than_window() {
        let err = Config::from_toml_str("[window]\nwidth = 300\nheight = 300").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[shuffle]\nsteps = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_path(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, hex_to_rgb};
use crate::error::BoardResult;
use crate::tool::{Swatch, Tool};

/// Environment variable naming a JSON config file for the desktop app
pub const CONFIG_ENV: &str = "NOODLE_BOARD_CONFIG";

/// Freestyle drawing, or buddy mode where a prompt is shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMode {
    #[default]
    Freestyle,
    Buddy,
}

impl BoardMode {
    pub fn toggled(self) -> Self {
        match self {
            BoardMode::Freestyle => BoardMode::Buddy,
            BoardMode::Buddy => BoardMode::Freestyle,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoardMode::Freestyle => "freestyle",
            BoardMode::Buddy => "buddy mode",
        }
    }
}

/// Host-supplied settings of a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub background: String,
    pub initial_tool: Tool,
    pub initial_color: String,
    pub mode: BoardMode,
    /// Shown above the board in buddy mode
    pub prompt: String,
    pub buddy_message: String,
    pub swatches: Vec<Swatch>,
    /// Where the desktop app writes saved drawings
    pub save_dir: PathBuf,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_owned(),
            initial_tool: Tool::Pen,
            initial_color: "#000000".to_owned(),
            mode: BoardMode::Freestyle,
            prompt: "dinosaur's birthday".to_owned(),
            buddy_message: "start drawing! i'll give you tips along the way".to_owned(),
            swatches: Swatch::defaults(),
            save_dir: PathBuf::from("."),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Config named by [`CONFIG_ENV`], defaults when unset.
    pub fn from_env() -> BoardResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Background colour, white if the configured one does not parse
    pub fn background_rgb(&self) -> Rgb {
        hex_to_rgb(&self.background).unwrap_or(Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = BoardConfig::from_json_str(r#"{ "mode": "buddy", "prompt": "a rocket" }"#).unwrap();
        assert_eq!(config.mode, BoardMode::Buddy);
        assert_eq!(config.prompt, "a rocket");
        assert_eq!(config.initial_tool, Tool::Pen);
        assert_eq!(config.swatches.len(), 4);
    }

    #[test]
    fn tools_are_lowercase_in_json() {
        let config = BoardConfig::from_json_str(r#"{ "initial_tool": "pencil" }"#).unwrap();
        assert_eq!(config.initial_tool, Tool::Pencil);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(BoardConfig::from_json_str("{ mode: buddy").is_err());
    }

    #[test]
    fn bad_background_falls_back_to_white() {
        let config = BoardConfig {
            background: "white".to_owned(),
            ..BoardConfig::default()
        };
        assert_eq!(config.background_rgb(), Rgb::WHITE);
    }

    #[test]
    fn mode_toggles() {
        assert_eq!(BoardMode::Freestyle.toggled(), BoardMode::Buddy);
        assert_eq!(BoardMode::Buddy.toggled(), BoardMode::Freestyle);
    }
}

//! Configuration file loading for piece boxes.
//!
//! A box configuration is a small TOML document; every key is optional:
//!
//! ```toml
//! capacity = 32
//! side1_color = "black"
//! side2_color = "white"
//! board_length = 8
//! ```

use std::path::Path;

use chess_core::{
    Board, BOARD_LENGTH, DEFAULT_SIDE1_COLOR, DEFAULT_SIDE2_COLOR, MAX_BOARD_LENGTH,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::container::DEFAULT_CAPACITY;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Board length is zero or above [`MAX_BOARD_LENGTH`].
    #[error("Invalid board length: {0}")]
    InvalidBoardLength(usize),
}

/// Settings for an inventory and the boards its pieces move on.
///
/// Capacity and side colors are handed to
/// [`PieceInventory::new`](crate::PieceInventory::new) as is, so malformed
/// values are corrected there rather than rejected here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BoxConfig {
    /// Slots per side. Non-positive values mean the default of 64.
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    #[serde(default = "default_side1_color")]
    pub side1_color: String,
    #[serde(default = "default_side2_color")]
    pub side2_color: String,
    /// Side length of the board, from 1 to 256. Defaults to 8.
    #[serde(default = "default_board_length")]
    pub board_length: usize,
}

fn default_capacity() -> i64 {
    DEFAULT_CAPACITY as i64
}

fn default_side1_color() -> String {
    DEFAULT_SIDE1_COLOR.to_string()
}

fn default_side2_color() -> String {
    DEFAULT_SIDE2_COLOR.to_string()
}

fn default_board_length() -> usize {
    BOARD_LENGTH
}

impl Default for BoxConfig {
    fn default() -> Self {
        BoxConfig {
            capacity: default_capacity(),
            side1_color: default_side1_color(),
            side2_color: default_side2_color(),
            board_length: default_board_length(),
        }
    }
}

impl BoxConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for invalid TOML and
    /// [`ConfigError::InvalidBoardLength`] for a board length of zero or
    /// above [`MAX_BOARD_LENGTH`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BoxConfig = toml::from_str(content)?;
        if config.board_length == 0 || config.board_length > MAX_BOARD_LENGTH {
            return Err(ConfigError::InvalidBoardLength(config.board_length));
        }
        Ok(config)
    }

    /// Loads a configuration file, or the defaults if `path` does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// otherwise the errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no box config found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded box config");
        Ok(config)
    }

    /// An empty board of the configured size.
    pub fn board(&self) -> Board {
        Board::new(self.board_length)
    }
}

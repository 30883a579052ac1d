//! Run configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock setup: search (White, depth 3) against random (Black), one game.
//! Command-line flags are applied on top of whatever the file says.

use std::path::Path;

use chess_core::Color;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::agents::AgentKind;
use crate::error::{ArenaError, ArenaResult};
use crate::match_runner::MatchConfig;

/// Pacing used in interactive games unless configured otherwise.
pub const DEFAULT_PLAY_MOVE_MS: u64 = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub batch: BatchConfig,
    pub play: PlayConfig,
}

/// `[batch]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub games: u32,
    pub depth: u8,
    pub white: AgentKind,
    pub black: AgentKind,
    /// Base seed for random agents; game `i` is seeded with `seed + i`
    pub seed: Option<u64>,
    pub max_plies: Option<u32>,
    pub fen: Option<String>,
    pub min_move_ms: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games: 1,
            depth: 3,
            white: AgentKind::Search,
            black: AgentKind::Random,
            seed: None,
            max_plies: None,
            fen: None,
            min_move_ms: None,
        }
    }
}

impl BatchConfig {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games,
            depth: self.depth,
            min_move_ms: self.min_move_ms,
            max_plies: self.max_plies,
            start_fen: self.fen.clone(),
        }
    }
}

/// Side of the board, as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

/// `[play]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Search depth of the engine opponent
    pub depth: u8,
    /// Color the human plays
    pub color: Side,
    pub min_move_ms: u64,
    pub fen: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            color: Side::White,
            min_move_ms: DEFAULT_PLAY_MOVE_MS,
            fen: None,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from a file.
    pub fn load(path: &Path) -> ArenaResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ArenaError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text).map_err(|e| ArenaError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> ArenaResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

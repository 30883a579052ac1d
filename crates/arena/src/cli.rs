//! Command-line surface of the `chessbot` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::agents::AgentKind;
use crate::config::{BatchConfig, PlayConfig, Side};

#[derive(Debug, Parser)]
#[command(name = "chessbot", version, about = "Fixed-depth chess engine: self-play batches and interactive games")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play a batch of engine-vs-engine games and print the tallies
    Batch(BatchArgs),
    /// Play one game against the search engine in the terminal
    Play(PlayArgs),
}

#[derive(Debug, Args, Default)]
pub struct BatchArgs {
    /// Number of games
    #[arg(long)]
    pub games: Option<u32>,
    /// Search depth in plies
    #[arg(long)]
    pub depth: Option<u8>,
    #[arg(long, value_enum)]
    pub white: Option<AgentKind>,
    #[arg(long, value_enum)]
    pub black: Option<AgentKind>,
    /// Base seed for random agents
    #[arg(long)]
    pub seed: Option<u64>,
    /// Minimum time each engine takes per move
    #[arg(long)]
    pub min_move_ms: Option<u64>,
    /// Stop each game as a draw after this many plies
    #[arg(long)]
    pub max_plies: Option<u32>,
    /// Start every game from this position
    #[arg(long)]
    pub fen: Option<String>,
    /// Write the full report as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl BatchArgs {
    /// Overwrite config values with the flags that were given.
    pub fn apply(&self, config: &mut BatchConfig) {
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(white) = self.white {
            config.white = white;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.min_move_ms.is_some() {
            config.min_move_ms = self.min_move_ms;
        }
        if self.max_plies.is_some() {
            config.max_plies = self.max_plies;
        }
        if self.fen.is_some() {
            config.fen.clone_from(&self.fen);
        }
    }
}

#[derive(Debug, Args, Default)]
pub struct PlayArgs {
    /// Search depth of the engine
    #[arg(long)]
    pub depth: Option<u8>,
    /// Color you play
    #[arg(long, value_enum)]
    pub color: Option<Side>,
    /// Minimum time the engine takes per move
    #[arg(long)]
    pub min_move_ms: Option<u64>,
    /// Start from this position
    #[arg(long)]
    pub fen: Option<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    pub fn apply(&self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(ms) = self.min_move_ms {
            config.min_move_ms = ms;
        }
        if self.fen.is_some() {
            config.fen.clone_from(&self.fen);
        }
    }
}

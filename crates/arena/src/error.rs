//! Error types for the arena.

use std::path::PathBuf;

use chess_core::ChessError;
use thiserror::Error;

/// Errors raised while running games or loading run configuration.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// An engine found no move in a position that is not over
    #[error("{engine} returned no move in {fen}, but the game is not over")]
    NoMoveAvailable { engine: String, fen: String },

    /// An engine proposed a move outside the legal set
    #[error("{engine} proposed illegal move {mv} in {fen}")]
    IllegalEngineMove {
        engine: String,
        mv: String,
        fen: String,
    },

    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ArenaResult<T> = Result<T, ArenaError>;

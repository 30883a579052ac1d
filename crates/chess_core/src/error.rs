//! Error types for the rules adapter.

use thiserror::Error;

/// Errors raised by [`crate::Game`] and the notation helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A board-interchange string could not be parsed
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// A move was proposed that is not legal in the current position
    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    /// A square or move could not be parsed from coordinate notation
    #[error("invalid coordinate `{0}`")]
    InvalidCoordinate(String),

    /// `undo` was called with no applied move on the stack
    #[error("no move to undo")]
    NothingToUndo,
}

/// Result type alias for rules operations
pub type ChessResult<T> = Result<T, ChessError>;

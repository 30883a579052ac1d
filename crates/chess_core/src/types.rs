use std::fmt;

use cozy_chess::Color;
use serde::{Serialize, Serializer};

/// Final outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win(Color),
    Draw,
}

impl GameResult {
    /// Classify a finished game. Only checkmate has a winner: the side that
    /// is not to move in the final position.
    pub fn from_termination(termination: Termination, side_to_move: Color) -> Self {
        match termination {
            Termination::Checkmate => GameResult::Win(!side_to_move),
            _ => GameResult::Draw,
        }
    }

    /// Result in PGN notation.
    pub fn pgn(self) -> &'static str {
        match self {
            GameResult::Win(Color::White) => "1-0",
            GameResult::Win(Color::Black) => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pgn())
    }
}

impl Serialize for GameResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.pgn())
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
    /// Stopped by the arbiter's ply cap
    MoveLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoveRule => "seventy-five-move rule",
            Termination::FivefoldRepetition => "fivefold repetition",
            Termination::MoveLimit => "move limit",
        };
        f.write_str(text)
    }
}

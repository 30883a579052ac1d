//! Static position evaluation: material plus piece-square tables.
//!
//! Scores are in centipawns from White's point of view. The search never
//! reads [`evaluate`] directly; it goes through [`evaluate_relative`], which
//! flips the sign when Black is to move.

use chess_core::{Color, Game, Piece, Square};

/// Score of a checkmated position.
pub const MATE_SCORE: i32 = 1_000_000;

/// Non-king material (both sides, centipawns) below which the endgame
/// tables are used.
pub const ENDGAME_MATERIAL_THRESHOLD: i32 = 2600;

/// Material values in centipawns, indexed by `Piece as usize`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Midgame,
    Endgame,
}

/// Which terms the evaluation includes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvalMode {
    /// Material only; phase and square tables are ignored
    Material,
    /// Material plus phase-dependent piece-square tables
    #[default]
    PieceSquare,
}

// Tables are laid out as seen from White's side of the board: the first row
// is rank 8, the last row rank 1.

#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    80,  80,  80,  80,  80,  80,  80,  80,
    50,  50,  50,  50,  50,  50,  50,  50,
    30,  30,  30,  30,  30,  30,  30,  30,
    20,  20,  20,  20,  20,  20,  20,  20,
    10,  10,  10,  10,  10,  10,  10,  10,
    10,  10,  10,  10,  10,  10,  10,  10,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -30, -40, -40, -50, -50, -40, -40, -30,
   -20, -30, -30, -40, -40, -30, -30, -20,
   -10, -20, -20, -20, -20, -20, -20, -10,
    20,  20,   0,   0,   0,   0,  20,  20,
    20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
   -50, -40, -30, -20, -20, -30, -40, -50,
   -30, -20, -10,   0,   0, -10, -20, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  30,  40,  40,  30, -10, -30,
   -30, -10,  20,  30,  30,  20, -10, -30,
   -30, -30,   0,   0,   0,   0, -30, -30,
   -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Piece-square tables indexed by phase, then `Piece as usize`.
const PSQT: [[&[i32; 64]; 6]; 2] = [
    [&PAWN_MG, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING_MG],
    [&PAWN_EG, &KNIGHT, &BISHOP, &ROOK, &QUEEN, &KING_EG],
];

/// Material value of a piece in centipawns.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece as usize]
}

/// Positional bonus for `piece` of `color` standing on `square`.
///
/// Black reads the White tables mirrored top to bottom.
#[inline]
pub fn psqt_bonus(piece: Piece, color: Color, square: Square, phase: GamePhase) -> i32 {
    let sq = square as usize;
    let index = match color {
        Color::White => sq ^ 56,
        Color::Black => sq,
    };
    PSQT[phase as usize][piece as usize][index]
}

/// Total non-king material of both sides.
pub fn non_king_material(game: &Game) -> i32 {
    let board = game.board();
    Piece::ALL
        .iter()
        .map(|&piece| piece_value(piece) * board.pieces(piece).len() as i32)
        .sum()
}

/// Midgame or endgame, recomputed from the material on the board.
pub fn game_phase(game: &Game) -> GamePhase {
    if non_king_material(game) < ENDGAME_MATERIAL_THRESHOLD {
        GamePhase::Endgame
    } else {
        GamePhase::Midgame
    }
}

/// Score of a checkmate, stalemate or insufficient-material position.
fn terminal_score(game: &Game) -> Option<i32> {
    if !game.has_legal_moves() {
        if game.in_check() {
            // The side to move has been mated
            return Some(match game.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            });
        }
        return Some(0);
    }
    if game.is_insufficient_material() {
        return Some(0);
    }
    None
}

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - ±[`MATE_SCORE`] = checkmate
pub fn evaluate(game: &Game) -> i32 {
    evaluate_with(game, EvalMode::PieceSquare)
}

/// Material-only evaluation from White's perspective.
pub fn evaluate_material(game: &Game) -> i32 {
    evaluate_with(game, EvalMode::Material)
}

pub fn evaluate_with(game: &Game, mode: EvalMode) -> i32 {
    if let Some(score) = terminal_score(game) {
        return score;
    }

    let phase = match mode {
        EvalMode::PieceSquare => Some(game_phase(game)),
        EvalMode::Material => None,
    };

    let board = game.board();
    let mut score = 0i32;
    for color in Color::ALL {
        let sign = if color == Color::White { 1 } else { -1 };
        for piece in Piece::ALL {
            for square in board.colored_pieces(color, piece) {
                let mut value = piece_value(piece);
                if let Some(phase) = phase {
                    value += psqt_bonus(piece, color, square, phase);
                }
                score += sign * value;
            }
        }
    }
    score
}

/// Evaluation from the side to move's perspective (negamax convention).
#[inline]
pub fn evaluate_relative(game: &Game, mode: EvalMode) -> i32 {
    let score = evaluate_with(game, mode);
    match game.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

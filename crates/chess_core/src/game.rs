//! The authoritative game state.
//!
//! [`Game`] wraps a `cozy_chess::Board` with the pieces of the rules contract
//! the rest of the workspace relies on: an undo stack, the draw predicates
//! that the board itself does not track (insufficient material, fivefold
//! repetition, the seventy-five-move rule) and move construction from a pair
//! of squares in standard notation.

use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};

use crate::error::{ChessError, ChessResult};
use crate::guard::MoveGuard;
use crate::notation::display_move;
use crate::types::Termination;

/// Halfmove clock value at which the game ends automatically.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Number of occurrences of one position that ends the game automatically.
pub const FIVEFOLD: usize = 5;

/// Highest halfmove clock the rules crate accepts in a FEN.
const BOARD_CLOCK_LIMIT: u32 = 100;

/// A chess game: the current board plus every board it passed through.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Plies since the last capture or pawn move. Tracked here because the
    /// board's own clock stops at the fifty-move mark.
    halfmove_clock: u32,
    /// State before each applied move, oldest first
    history: Vec<Snapshot>,
}

#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    halfmove_clock: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    /// Parse a position from FEN. The history starts empty.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let invalid = |reason: String| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = match fields.get(4) {
            Some(field) => field
                .parse::<u32>()
                .map_err(|_| invalid(format!("bad halfmove clock `{field}`")))?,
            None => 0,
        };
        let clamped = halfmove_clock.min(BOARD_CLOCK_LIMIT).to_string();
        if fields.len() > 4 {
            fields[4] = &clamped;
        }

        let board =
            Board::from_fen(&fields.join(" "), false).map_err(|e| invalid(format!("{e:?}")))?;
        Ok(Self {
            board,
            halfmove_clock,
            history: Vec::new(),
        })
    }

    /// Serialize the current position to FEN.
    pub fn fen(&self) -> String {
        let fen = self.board.to_string();
        let clock = self.halfmove_clock.to_string();
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        if let Some(field) = fields.get_mut(4) {
            *field = &clock;
        }
        fields.join(" ")
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Number of moves applied since the game was created.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        let piece = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some((color, piece))
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// All legal moves in generation order.
    ///
    /// The order depends only on the position, so search tie-breaks and
    /// pruning are reproducible.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|piece_moves| !piece_moves.is_empty())
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.board.is_legal(mv)
    }

    /// Apply a move after validating it.
    pub fn apply(&mut self, mv: Move) -> ChessResult<()> {
        if !self.board.is_legal(mv) {
            return Err(ChessError::IllegalMove {
                mv: display_move(&self.board, mv),
                fen: self.fen(),
            });
        }
        self.play(mv);
        Ok(())
    }

    /// Take back the most recently applied move.
    pub fn undo(&mut self) -> ChessResult<()> {
        if self.restore_previous() {
            Ok(())
        } else {
            Err(ChessError::NothingToUndo)
        }
    }

    /// Apply a legal move and return a guard that undoes it when dropped.
    ///
    /// Intended for search: `mv` must come from [`Game::legal_moves`].
    pub fn push_guarded(&mut self, mv: Move) -> MoveGuard<'_> {
        debug_assert!(self.board.is_legal(mv), "push_guarded with illegal move");
        self.play(mv);
        MoveGuard::new(self)
    }

    fn play(&mut self, mv: Move) {
        let side = self.board.side_to_move();
        let irreversible = self.board.piece_on(mv.from) == Some(Piece::Pawn)
            || self.board.color_on(mv.to) == Some(!side);
        self.history.push(Snapshot {
            board: self.board.clone(),
            halfmove_clock: self.halfmove_clock,
        });
        self.board.play_unchecked(mv);
        self.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock + 1
        };
    }

    pub(crate) fn restore_previous(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous.board;
                self.halfmove_clock = previous.halfmove_clock;
                true
            }
            None => false,
        }
    }

    /// Build a move from an origin and destination square.
    ///
    /// Castling may be given in standard form (`e1g1`) and is translated to
    /// the king-takes-rook form used internally. A pawn reaching the last
    /// rank without an explicit promotion piece promotes to a queen. The
    /// returned move is not validated; check it with [`Game::is_legal`].
    pub fn move_from_squares(&self, from: Square, to: Square, promotion: Option<Piece>) -> Move {
        let side = self.side_to_move();
        let mut to = to;
        let mut promotion = promotion;

        match self.board.piece_on(from) {
            Some(Piece::King) if self.board.color_on(from) == Some(side) => {
                let file_distance = (to.file() as i8 - from.file() as i8).abs();
                if from.rank() == to.rank() && file_distance == 2 {
                    let rook_file = if to.file() as usize > from.file() as usize {
                        File::H
                    } else {
                        File::A
                    };
                    to = Square::new(rook_file, from.rank());
                }
            }
            Some(Piece::Pawn) if promotion.is_none() => {
                let last_rank = match side {
                    Color::White => Rank::Eighth,
                    Color::Black => Rank::First,
                };
                if to.rank() == last_rank {
                    promotion = Some(Piece::Queen);
                }
            }
            _ => {}
        }

        Move {
            from,
            to,
            promotion,
        }
    }

    // =========================================================================
    // Game-over predicates
    // =========================================================================

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    /// Neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool {
        Color::ALL
            .iter()
            .all(|&color| self.has_insufficient_material(color))
    }

    /// `color` cannot deliver mate with the material it has left.
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let board = &self.board;
        let ours = board.colors(color);
        let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !(ours & heavy).is_empty() {
            return false;
        }

        if !(ours & board.pieces(Piece::Knight)).is_empty() {
            // A lone knight mates only with help from enemy minor pieces or pawns
            let theirs = board.colors(!color);
            let helpers = theirs & !board.pieces(Piece::King) & !board.pieces(Piece::Queen);
            return ours.len() <= 2 && helpers.is_empty();
        }

        let bishops = board.pieces(Piece::Bishop);
        if !(ours & bishops).is_empty() {
            let same_shade = bishops_on_one_shade(bishops);
            return same_shade
                && board.pieces(Piece::Pawn).is_empty()
                && board.pieces(Piece::Knight).is_empty();
        }

        true
    }

    pub fn is_seventy_five_move_rule(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES && self.has_legal_moves()
    }

    /// The current position occurred at least five times.
    pub fn is_fivefold_repetition(&self) -> bool {
        let hash = self.board.hash();
        let earlier = self
            .history
            .iter()
            .filter(|snapshot| snapshot.board.hash() == hash)
            .count();
        earlier + 1 >= FIVEFOLD
    }

    /// Why the game is over, or `None` while it continues.
    pub fn termination(&self) -> Option<Termination> {
        let has_moves = self.has_legal_moves();
        if !has_moves && self.in_check() {
            return Some(Termination::Checkmate);
        }
        if self.is_insufficient_material() {
            return Some(Termination::InsufficientMaterial);
        }
        if !has_moves {
            return Some(Termination::Stalemate);
        }
        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(Termination::SeventyFiveMoveRule);
        }
        if self.is_fivefold_repetition() {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }

    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }
}

fn bishops_on_one_shade(bishops: BitBoard) -> bool {
    let mut dark = false;
    let mut light = false;
    for square in bishops {
        if (square.file() as usize + square.rank() as usize) % 2 == 0 {
            dark = true;
        } else {
            light = true;
        }
    }
    !(dark && light)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

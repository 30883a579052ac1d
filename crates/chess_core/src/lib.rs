pub mod error;
pub mod game;
pub mod guard;
pub mod notation;
pub mod time_control;
pub mod types;

// Re-export the rules adapter and the shared vocabulary types
pub use cozy_chess::{Color, File, Move, Piece, Rank, Square};
pub use error::*;
pub use game::*;
pub use guard::MoveGuard;
pub use notation::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move-selection strategy (search, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position without legal moves.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all move-selection strategies implement.
///
/// The game is borrowed mutably because strategies explore it in place
/// through [`Game::push_guarded`]; on return it must be identical to the
/// position it was handed.
pub trait Engine: Send {
    /// Choose a move for the side to move.
    ///
    /// # Arguments
    /// * `game` - The authoritative game state
    /// * `limits` - Search depth and optional pacing
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, game: &mut Game, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn search(&mut self, game: &mut Game, limits: &SearchLimits) -> SearchResult {
        (**self).search(game, limits)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn new_game(&mut self) {
        (**self).new_game()
    }
}

//! Classical Chess Engine
//!
//! Fixed-depth negamax with alpha-beta pruning over a material plus
//! piece-square-table evaluation. No transposition table, no move ordering,
//! no quiescence: the depth given in [`SearchLimits`] is the whole budget.

pub mod eval;
pub mod search;

use chess_core::{Engine, Game, SearchLimits, SearchResult};
use tracing::debug;

pub use eval::{
    evaluate, evaluate_material, evaluate_relative, evaluate_with, game_phase, EvalMode,
    GamePhase, ENDGAME_MATERIAL_THRESHOLD, MATE_SCORE,
};
pub use search::{minimax_best_move, minimax_score, pick_best_move};

/// Classical chess engine using negamax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    mode: EvalMode,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    /// Engine evaluating material and piece-square tables.
    pub fn new() -> Self {
        Self::with_mode(EvalMode::PieceSquare)
    }

    /// Engine that only counts material.
    pub fn material_only() -> Self {
        Self::with_mode(EvalMode::Material)
    }

    pub fn with_mode(mode: EvalMode) -> Self {
        Self { mode, nodes: 0 }
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, game: &mut Game, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let pacing = limits.start();

        let best = pick_best_move(game, limits.depth, self.mode, &mut self.nodes);

        debug!(
            depth = limits.depth,
            nodes = self.nodes,
            elapsed_ms = pacing.elapsed().as_millis() as u64,
            score = best.map(|(_, score)| score),
            "search finished"
        );
        pacing.finish();

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map(|(_, score)| score).unwrap_or(0),
            depth: limits.depth.max(1),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        match self.mode {
            EvalMode::PieceSquare => "Classical",
            EvalMode::Material => "Classical (material)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

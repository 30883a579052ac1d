//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. It is the
//! opponent the search engine is measured against in batch play.
//!
//! The random source is injected so that games can be replayed: build the
//! engine with [`RandomEngine::seeded`] for reproducible play, or
//! [`RandomEngine::from_entropy`] when any game will do.

use chess_core::{Engine, Game, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Engine whose choices are fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, game: &mut Game, limits: &SearchLimits) -> SearchResult {
        let pacing = limits.start();

        let moves = game.legal_moves();
        let best_move = moves.choose(&mut self.rng).copied();
        trace!(candidates = moves.len(), "random move drawn");

        pacing.finish();
        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

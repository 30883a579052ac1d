//! Search properties over random positions.

use chess_core::{Engine, Game, SearchLimits};
use classical_engine::{minimax_best_move, pick_best_move, ClassicalEngine, EvalMode};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays `plies` random moves from the initial position, stopping early if
/// the game ends.
fn random_playout(seed: u64, plies: usize) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    for _ in 0..plies {
        if game.is_game_over() {
            break;
        }
        let moves = game.legal_moves();
        let mv = *moves.choose(&mut rng).unwrap();
        game.apply(mv).unwrap();
    }
    game
}

fn mode_strategy() -> impl Strategy<Value = EvalMode> {
    prop_oneof![Just(EvalMode::Material), Just(EvalMode::PieceSquare)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Alpha-beta returns the same move and score as exhaustive negamax.
    #[test]
    fn prop_pruning_matches_minimax(
        seed in any::<u64>(),
        plies in 0usize..40,
        depth in 1u8..=3,
        mode in mode_strategy(),
    ) {
        let mut game = random_playout(seed, plies);
        let before = game.fen();

        let mut nodes = 0;
        let pruned = pick_best_move(&mut game, depth, mode, &mut nodes);
        let exhaustive = minimax_best_move(&mut game, depth, mode);

        prop_assert_eq!(pruned, exhaustive);
        prop_assert_eq!(game.fen(), before);
    }

    /// The engine only ever proposes legal moves.
    #[test]
    fn prop_engine_moves_are_legal(seed in any::<u64>(), plies in 0usize..60) {
        let mut game = random_playout(seed, plies);
        let mut engine = ClassicalEngine::new();
        let result = engine.search(&mut game, &SearchLimits::depth(2));
        match result.best_move {
            Some(mv) => prop_assert!(game.legal_moves().contains(&mv)),
            None => prop_assert!(!game.has_legal_moves()),
        }
    }
}

#[test]
fn test_engine_is_deterministic() {
    let mut a = ClassicalEngine::new();
    let mut b = ClassicalEngine::new();
    let mut game = random_playout(7, 12);
    let first = a.search(&mut game, &SearchLimits::depth(3));
    let second = b.search(&mut game, &SearchLimits::depth(3));
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

//! Apply/undo fidelity: every legal move taken back restores the exact FEN.

use chess_core::Game;
use proptest::prelude::*;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    // Kiwipete: castling both ways, en passant, promotions nearby
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    // En passant capture available
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    // Promotions with and without capture
    "r3k3/1P6/8/8/8/8/6p1/4K2R b K - 0 1",
];

fn assert_undo_fidelity(game: &mut Game) {
    let before = game.fen();
    let ply = game.ply();
    for mv in game.legal_moves() {
        game.apply(mv).unwrap();
        game.undo().unwrap();
        assert_eq!(game.fen(), before, "undo of {mv} changed the position");
        assert_eq!(game.ply(), ply);
    }
}

#[test]
fn test_undo_restores_every_move_in_reference_positions() {
    for fen in POSITIONS {
        let mut game = Game::from_fen(fen).unwrap();
        assert_undo_fidelity(&mut game);
    }
}

#[test]
fn test_guarded_moves_restore_every_move() {
    for fen in POSITIONS {
        let mut game = Game::from_fen(fen).unwrap();
        let before = game.fen();
        for mv in game.legal_moves() {
            let child = game.push_guarded(mv);
            assert_ne!(child.fen(), before);
        }
        assert_eq!(game.fen(), before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Random playouts from the initial position keep undo exact at every step.
    #[test]
    fn prop_undo_fidelity_along_random_playouts(choices in proptest::collection::vec(any::<u16>(), 0..40)) {
        let mut game = Game::new();
        for choice in choices {
            if game.is_game_over() {
                break;
            }
            assert_undo_fidelity(&mut game);
            let moves = game.legal_moves();
            let mv = moves[choice as usize % moves.len()];
            game.apply(mv).unwrap();
        }

        let depth = game.ply();
        let fens: Vec<String> = std::iter::from_fn(|| {
            let fen = game.fen();
            game.undo().ok().map(|_| fen)
        })
        .collect();
        prop_assert_eq!(fens.len(), depth);
        prop_assert_eq!(game.fen(), Game::new().fen());
    }
}

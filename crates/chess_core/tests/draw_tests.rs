//! Tests for draw detection
//!
//! Covers the terminal conditions the arbiter relies on:
//! - Stalemate
//! - Insufficient material
//! - Checkmate is not confused with either

use chess_core::{Color, Game, Termination};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).unwrap_or_else(|e| panic!("{fen}: {e}"))
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, white queen on b6, white king on c7
    let pos = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(pos.legal_moves().is_empty());
    assert!(!pos.in_check(), "Stalemate means king is not in check");
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert_eq!(pos.termination(), Some(Termination::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let pos = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(pos.is_stalemate());
    assert_eq!(pos.termination(), Some(Termination::Stalemate));
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = game("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
    assert_eq!(pos.termination(), Some(Termination::InsufficientMaterial));
}

#[test]
fn test_insufficient_material_king_bishop_vs_king() {
    let pos = game("8/8/8/4k3/8/4KB2/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    let pos = game("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1");
    assert!(pos.has_insufficient_material(Color::White));
    assert!(pos.is_insufficient_material());
    assert_eq!(pos.termination(), Some(Termination::InsufficientMaterial));
}

#[test]
fn test_insufficient_material_king_vs_king_knight() {
    let pos = game("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_insufficient_material_same_color_bishops() {
    // Bishops on f8 and c1 both stand on dark squares
    let pos = game("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_opposite_color_bishops() {
    // c8 is light, c1 is dark: a mate is still constructible
    let pos = game("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_knight_against_minor_piece() {
    // Knight mates are possible when the defender has blocking material
    let pos = game("8/8/4b3/4k3/8/4K3/8/4N3 w - - 0 1");
    assert!(!pos.has_insufficient_material(Color::White));
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_pawn() {
    let pos = game("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1");
    assert!(!pos.is_insufficient_material());
    assert!(pos.has_insufficient_material(Color::Black));
}

#[test]
fn test_sufficient_material_with_rook() {
    let pos = game("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_queen() {
    let pos = game("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

#[test]
fn test_sufficient_material_two_knights() {
    let pos = game("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1");
    assert!(!pos.is_insufficient_material());
}

// =============================================================================
// Checkmate vs. check
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let pos = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_check_is_not_checkmate() {
    let pos = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(pos.in_check());
    assert!(!pos.is_checkmate());
    assert!(!pos.is_game_over());
}

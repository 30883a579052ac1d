//! Negamax search with alpha-beta pruning

use chess_core::{Game, Move};

use crate::eval::{evaluate_relative, EvalMode, MATE_SCORE};

/// Bound wider than any score the evaluator can produce.
pub const INFINITY: i32 = MATE_SCORE + 1;

/// Searches the position and returns the best move with its score.
///
/// # Arguments
/// * `game` - The position to search; explored in place and restored on return
/// * `depth` - Search depth in plies (0 is searched as 1)
/// * `mode` - Evaluation terms used at the leaves
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The best move and its score from the side to move's perspective, or
/// `None` when there is no legal move. Ties go to the move generated first.
pub fn pick_best_move(
    game: &mut Game,
    depth: u8,
    mode: EvalMode,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let moves = game.legal_moves();
    let depth = depth.max(1);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -INFINITY;
    let beta = INFINITY;

    for mv in moves {
        let score = {
            let mut child = game.push_guarded(mv);
            -negamax(&mut child, depth - 1, -beta, -alpha, mode, nodes)
        };

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    best
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Fail-soft: the returned score may lie outside `(alpha, beta)`.
fn negamax(
    game: &mut Game,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    mode: EvalMode,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game.is_game_over() {
        return evaluate_relative(game, mode);
    }

    let mut best = -INFINITY;
    for mv in game.legal_moves() {
        let mut child = game.push_guarded(mv);
        let score = -negamax(&mut child, depth - 1, -beta, -alpha, mode, nodes);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    best
}

/// Best move by exhaustive negamax, without pruning.
///
/// Same tie-break and depth handling as [`pick_best_move`]; the reference
/// the pruned search is checked against.
pub fn minimax_best_move(game: &mut Game, depth: u8, mode: EvalMode) -> Option<(Move, i32)> {
    let depth = depth.max(1);
    let mut best: Option<(Move, i32)> = None;
    for mv in game.legal_moves() {
        let mut child = game.push_guarded(mv);
        let score = -minimax_score(&mut child, depth - 1, mode);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best
}

/// Exact negamax value of the position to `depth` plies.
pub fn minimax_score(game: &mut Game, depth: u8, mode: EvalMode) -> i32 {
    if depth == 0 || game.is_game_over() {
        return evaluate_relative(game, mode);
    }

    let mut best = -INFINITY;
    for mv in game.legal_moves() {
        let mut child = game.push_guarded(mv);
        best = best.max(-minimax_score(&mut child, depth - 1, mode));
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

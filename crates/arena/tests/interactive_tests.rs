//! Interactive games driven by a scripted player.

use std::collections::VecDeque;
use std::io;

use arena::{InteractiveGame, InteractiveOutcome, MoveInput, MoveSource, Presenter};
use chess_core::{Color, Game, GameResult, SearchLimits, Termination};
use classical_engine::ClassicalEngine;

/// Plays a fixed list of moves and records everything it is shown.
#[derive(Default)]
struct Script {
    moves: VecDeque<MoveInput>,
    renders: Vec<String>,
    messages: Vec<String>,
}

impl Script {
    fn new(moves: &[&str]) -> Self {
        Self {
            moves: moves.iter().map(|m| MoveInput::parse(m).unwrap()).collect(),
            ..Default::default()
        }
    }
}

impl MoveSource for Script {
    fn next_move(&mut self) -> Option<MoveInput> {
        self.moves.pop_front()
    }
}

impl Presenter for Script {
    fn render(&mut self, fen: &str) -> io::Result<()> {
        self.renders.push(fen.to_string());
        Ok(())
    }

    fn announce(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

fn versus_engine(game: Game, human: Color) -> InteractiveGame {
    InteractiveGame::new(
        game,
        human,
        Box::new(ClassicalEngine::new()),
        SearchLimits::depth(1),
    )
}

#[test]
fn test_illegal_move_is_rejected_and_turn_repeats() {
    let mut interactive = versus_engine(Game::new(), Color::White);
    let mut script = Script::new(&["e2e5", "e2e4"]);
    let start = interactive.game().fen();

    let outcome = interactive.run(&mut script).unwrap();

    assert_eq!(outcome, InteractiveOutcome::Quit);
    // e2e4 and the engine's reply; the rejected move left no trace
    assert_eq!(interactive.game().ply(), 2);
    assert_eq!(script.renders[0], start);
    assert_eq!(script.renders[1], start);
    assert_ne!(script.renders[2], start);
    assert_eq!(script.messages[0], "Engine thinking...");
    assert!(script.messages.iter().any(|m| m.starts_with("Engine plays")));
}

#[test]
fn test_engine_moves_first_when_human_is_black() {
    let mut interactive = versus_engine(Game::new(), Color::Black);
    let mut script = Script::new(&[]);

    interactive.run(&mut script).unwrap();

    assert_eq!(interactive.game().ply(), 1);
    assert_eq!(interactive.game().side_to_move(), Color::Black);
}

#[test]
fn test_human_delivers_mate() {
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mut interactive = versus_engine(game, Color::White);
    let mut script = Script::new(&["a1a8"]);

    let outcome = interactive.run(&mut script).unwrap();

    assert_eq!(
        outcome,
        InteractiveOutcome::Finished {
            result: GameResult::Win(Color::White),
            termination: Termination::Checkmate,
        }
    );
    assert_eq!(
        script.messages.last().map(String::as_str),
        Some("Checkmate! White wins (1-0)")
    );
}

#[test]
fn test_castling_in_standard_notation() {
    let game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let mut interactive = versus_engine(game, Color::White);

    let played = interactive
        .play_human(MoveInput::parse("e1g1").unwrap())
        .unwrap();

    assert_eq!(played, "e1g1");
    assert!(interactive.game().fen().starts_with("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 b kq"));
}

#[test]
fn test_stalemate_is_announced_as_draw() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let mut interactive = versus_engine(game, Color::White);
    let mut script = Script::new(&[]);

    let outcome = interactive.run(&mut script).unwrap();

    assert_eq!(
        outcome,
        InteractiveOutcome::Finished {
            result: GameResult::Draw,
            termination: Termination::Stalemate,
        }
    );
    assert_eq!(script.messages, vec!["Draw by stalemate (1/2-1/2)"]);
}

#[test]
fn test_play_human_rejects_without_mutating() {
    let mut interactive = versus_engine(Game::new(), Color::White);
    let before = interactive.game().fen();

    let err = interactive
        .play_human(MoveInput::parse("e1e2").unwrap())
        .unwrap_err();

    assert!(err.to_string().starts_with("illegal move e1e2"));
    assert_eq!(interactive.game().fen(), before);
    assert_eq!(interactive.game().ply(), 0);
}

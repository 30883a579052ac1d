//! A single game between a human and the search engine.
//!
//! The game itself knows nothing about terminals: moves come in through a
//! [`MoveSource`] and the board goes out through a [`Presenter`]. The
//! terminal implementation lives in [`crate::terminal`]; tests drive the same
//! loop with scripted moves.

use std::io;
use std::time::Duration;

use chess_core::{
    display_move, parse_coordinates, ChessError, ChessResult, Color, Engine, Game, GameResult,
    Piece, SearchLimits, Square, Termination,
};
use classical_engine::ClassicalEngine;
use tracing::{debug, info};

use crate::config::PlayConfig;
use crate::error::{ArenaError, ArenaResult};

/// A move proposed by the human: two squares and an optional promotion piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl MoveInput {
    /// Parse coordinate notation such as `e2e4` or `e7e8n`.
    pub fn parse(text: &str) -> ChessResult<Self> {
        let (from, to, promotion) = parse_coordinates(text)?;
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

/// Where the human's moves come from.
pub trait MoveSource {
    /// Next proposed move, or `None` when the player quits.
    fn next_move(&mut self) -> Option<MoveInput>;
}

/// Shows the game to the human.
pub trait Presenter {
    /// Draw the position given as FEN.
    fn render(&mut self, fen: &str) -> io::Result<()>;

    /// Show a one-line message.
    fn announce(&mut self, message: &str) -> io::Result<()>;
}

/// How an interactive game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveOutcome {
    Finished {
        result: GameResult,
        termination: Termination,
    },
    /// The human stopped before the game was over
    Quit,
}

/// Text shown when the game is over.
pub fn describe_outcome(result: GameResult, termination: Termination) -> String {
    match result {
        GameResult::Win(winner) => {
            let winner = match winner {
                Color::White => "White",
                Color::Black => "Black",
            };
            format!("{}! {winner} wins ({result})", capitalize(termination))
        }
        GameResult::Draw => format!("Draw by {termination} ({result})"),
    }
}

fn capitalize(termination: Termination) -> String {
    let text = termination.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

pub struct InteractiveGame {
    game: Game,
    human: Color,
    engine: Box<dyn Engine>,
    limits: SearchLimits,
}

impl InteractiveGame {
    pub fn new(game: Game, human: Color, engine: Box<dyn Engine>, limits: SearchLimits) -> Self {
        Self {
            game,
            human,
            engine,
            limits,
        }
    }

    /// Human against [`ClassicalEngine`] as described by the `[play]` section.
    pub fn from_config(config: &PlayConfig) -> ArenaResult<Self> {
        let game = match &config.fen {
            Some(fen) => Game::from_fen(fen)?,
            None => Game::new(),
        };
        let limits = SearchLimits::depth(config.depth)
            .with_min_duration(Duration::from_millis(config.min_move_ms));
        Ok(Self::new(
            game,
            config.color.into(),
            Box::new(ClassicalEngine::new()),
            limits,
        ))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn human(&self) -> Color {
        self.human
    }

    /// Play until the game is over or the move source runs dry.
    pub fn run<F>(&mut self, frontend: &mut F) -> ArenaResult<InteractiveOutcome>
    where
        F: Presenter + MoveSource,
    {
        self.engine.new_game();

        loop {
            frontend.render(&self.game.fen())?;

            if let Some(termination) = self.game.termination() {
                let result = GameResult::from_termination(termination, self.game.side_to_move());
                info!(%result, %termination, plies = self.game.ply(), "interactive game finished");
                frontend.announce(&describe_outcome(result, termination))?;
                return Ok(InteractiveOutcome::Finished {
                    result,
                    termination,
                });
            }

            if self.game.side_to_move() == self.human {
                let Some(input) = frontend.next_move() else {
                    info!(plies = self.game.ply(), "player quit");
                    return Ok(InteractiveOutcome::Quit);
                };
                // Illegal proposals are dropped silently and the turn repeats
                if let Err(err) = self.play_human(input) {
                    debug!(error = %err, "rejected human move");
                }
            } else {
                frontend.announce("Engine thinking...")?;
                let text = self.play_engine()?;
                frontend.announce(&format!("Engine plays {text}"))?;
            }
        }
    }

    /// Validate and apply the human's move. An illegal move leaves the game
    /// untouched.
    pub fn play_human(&mut self, input: MoveInput) -> ChessResult<String> {
        let mv = self
            .game
            .move_from_squares(input.from, input.to, input.promotion);
        if !self.game.is_legal(mv) {
            return Err(ChessError::IllegalMove {
                mv: display_move(self.game.board(), mv),
                fen: self.game.fen(),
            });
        }
        let text = display_move(self.game.board(), mv);
        self.game.apply(mv)?;
        Ok(text)
    }

    fn play_engine(&mut self) -> ArenaResult<String> {
        let result = self.engine.search(&mut self.game, &self.limits);
        let mv = result.best_move.ok_or_else(|| ArenaError::NoMoveAvailable {
            engine: self.engine.name().to_string(),
            fen: self.game.fen(),
        })?;
        let text = display_move(self.game.board(), mv);
        if !self.game.is_legal(mv) {
            return Err(ArenaError::IllegalEngineMove {
                engine: self.engine.name().to_string(),
                mv: text,
                fen: self.game.fen(),
            });
        }
        self.game.apply(mv)?;
        Ok(text)
    }
}

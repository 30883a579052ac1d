//! Match runner for playing games between engines

use chess_core::{
    display_move, ChessError, Color, Engine, Game, GameResult, SearchLimits, Termination,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ArenaError, ArenaResult};
use crate::results::{BatchReport, MatchTally};

/// Configuration for a batch of games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Minimum wall-clock time per move in milliseconds (None = no pacing)
    pub min_move_ms: Option<u64>,
    /// Plies after which a game is stopped as a draw (None = play to the end)
    pub max_plies: Option<u32>,
    /// Start position in FEN (None = standard initial position)
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 1,
            depth: 3,
            min_move_ms: None,
            max_plies: None,
            start_fen: None,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    pub fn search_limits(&self) -> SearchLimits {
        let limits = SearchLimits::depth(self.depth);
        match self.min_move_ms {
            Some(ms) => limits.with_min_duration(Duration::from_millis(ms)),
            None => limits,
        }
    }

    fn start_position(&self) -> Result<Game, ChessError> {
        match &self.start_fen {
            Some(fen) => Game::from_fen(fen),
            None => Ok(Game::new()),
        }
    }
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub termination: Termination,
    /// Moves in coordinate notation, castling as the two-square king step
    pub moves: Vec<String>,
    pub final_fen: String,
}

/// Runs games between engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a single game to its end.
    ///
    /// Fails with [`ArenaError::Chess`] if the start position cannot be
    /// parsed, and with [`ArenaError::NoMoveAvailable`] or
    /// [`ArenaError::IllegalEngineMove`] if an engine breaks the rules.
    pub fn run_game<'a>(
        &self,
        white: &'a mut dyn Engine,
        black: &'a mut dyn Engine,
    ) -> ArenaResult<GameRecord> {
        let mut game = self.config.start_position()?;
        white.new_game();
        black.new_game();

        let limits = self.config.search_limits();
        let mut moves = Vec::new();

        let termination = loop {
            if let Some(termination) = game.termination() {
                break termination;
            }
            if let Some(max_plies) = self.config.max_plies {
                if moves.len() as u32 >= max_plies {
                    break Termination::MoveLimit;
                }
            }

            let engine = match game.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let result = engine.search(&mut game, &limits);

            let mv = result.best_move.ok_or_else(|| ArenaError::NoMoveAvailable {
                engine: engine.name().to_string(),
                fen: game.fen(),
            })?;
            let text = display_move(game.board(), mv);
            if !game.is_legal(mv) {
                return Err(ArenaError::IllegalEngineMove {
                    engine: engine.name().to_string(),
                    mv: text,
                    fen: game.fen(),
                });
            }

            debug!(
                ply = moves.len(),
                engine = engine.name(),
                mv = %text,
                score = result.score,
                nodes = result.nodes,
                "move played"
            );
            game.apply(mv)?;
            moves.push(text);
        };

        let result = GameResult::from_termination(termination, game.side_to_move());
        info!(
            white = white.name(),
            black = black.name(),
            result = %result,
            %termination,
            plies = moves.len(),
            "game finished"
        );

        Ok(GameRecord {
            result,
            termination,
            moves,
            final_fen: game.fen(),
        })
    }

    /// Play `num_games` independent games and count the outcomes.
    ///
    /// `white` and `black` build a fresh engine for each game from its index.
    pub fn run_batch<W, B>(&self, white: W, black: B) -> ArenaResult<MatchTally>
    where
        W: FnMut(u32) -> Box<dyn Engine>,
        B: FnMut(u32) -> Box<dyn Engine>,
    {
        self.run_batch_report(white, black).map(|report| report.tally)
    }

    /// Like [`MatchRunner::run_batch`], keeping every game record.
    ///
    /// A game whose start position does not parse is abandoned and the batch
    /// moves on; any other error aborts the batch.
    pub fn run_batch_report<W, B>(&self, mut white: W, mut black: B) -> ArenaResult<BatchReport>
    where
        W: FnMut(u32) -> Box<dyn Engine>,
        B: FnMut(u32) -> Box<dyn Engine>,
    {
        let mut report: Option<BatchReport> = None;

        for game_index in 0..self.config.num_games {
            let mut white_engine = white(game_index);
            let mut black_engine = black(game_index);
            let batch = report.get_or_insert_with(|| {
                BatchReport::new(white_engine.name(), black_engine.name(), self.config.clone())
            });

            match self.run_game(white_engine.as_mut(), black_engine.as_mut()) {
                Ok(record) => {
                    info!(
                        game = game_index + 1,
                        of = self.config.num_games,
                        result = %record.result,
                        "batch progress"
                    );
                    batch.add_game(record);
                }
                Err(ArenaError::Chess(err @ ChessError::InvalidFen { .. })) => {
                    warn!(game = game_index + 1, error = %err, "game abandoned");
                    batch.tally.record_abandoned();
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report.unwrap_or_else(|| BatchReport::new("-", "-", self.config.clone())))
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

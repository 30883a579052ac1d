//! Batch tallies, reports and their storage

use chess_core::{Color, GameResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ArenaResult;
use crate::match_runner::{GameRecord, MatchConfig};

/// Outcome counts over a batch of games.
///
/// Every game of the batch lands in exactly one bucket, so the fields always
/// sum to the number of games played or abandoned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    /// Games that could not start (malformed start position)
    pub abandoned: u32,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win(Color::White) => self.white_wins += 1,
            GameResult::Win(Color::Black) => self.black_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn record_abandoned(&mut self) {
        self.abandoned += 1;
    }

    pub fn total_games(&self) -> u32 {
        self.white_wins + self.black_wins + self.draws + self.abandoned
    }

    /// Lines printed at the end of a batch.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("White wins: {}", self.white_wins),
            format!("Black wins: {}", self.black_wins),
            format!("Draws: {}", self.draws),
        ];
        if self.abandoned > 0 {
            lines.push(format!("Abandoned: {}", self.abandoned));
        }
        lines
    }
}

/// Complete batch results
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Engine playing White
    pub white: String,
    /// Engine playing Black
    pub black: String,
    /// Configuration used
    pub config: MatchConfig,
    pub tally: MatchTally,
    /// Finished games in the order they were played
    pub games: Vec<GameRecord>,
}

impl BatchReport {
    pub fn new(white: &str, black: &str, config: MatchConfig) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            config,
            tally: MatchTally::new(),
            games: Vec::new(),
        }
    }

    /// Add a finished game
    pub fn add_game(&mut self, record: GameRecord) {
        self.tally.record(record.result);
        self.games.push(record);
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> ArenaResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== {} (White) vs {} (Black) ===\n", self.white, self.black));
        report.push_str(&format!(
            "Config: {} games, depth {}\n\n",
            self.config.num_games, self.config.depth
        ));

        for (index, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "Game {:>3}: {:<7} {:<22} {:>4} plies\n",
                index + 1,
                game.result.pgn(),
                game.termination.to_string(),
                game.moves.len()
            ));
        }
        report.push('\n');

        for line in self.tally.summary_lines() {
            report.push_str(&line);
            report.push('\n');
        }
        report
    }
}

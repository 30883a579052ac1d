//! Game runner for the fixed-depth chess engine
//!
//! This crate provides infrastructure for:
//! - Running batches of self-play games and tallying the outcomes
//! - Playing one interactive game against the search engine
//! - Loading run configuration and writing batch reports
//!
//! # Usage
//!
//! ```bash
//! # Search (White) against random (Black), 20 games at depth 3
//! cargo run -p arena --bin chessbot -- batch --games 20 --depth 3
//!
//! # Play Black against the engine
//! cargo run -p arena --bin chessbot -- play --color black
//! ```

pub mod agents;
pub mod cli;
pub mod config;
mod error;
pub mod interactive;
mod match_runner;
mod results;
pub mod terminal;

pub use agents::*;
pub use config::*;
pub use error::*;
pub use interactive::{InteractiveGame, InteractiveOutcome, MoveInput, MoveSource, Presenter};
pub use match_runner::*;
pub use results::*;
pub use terminal::{TerminalContext, TerminalPresenter};

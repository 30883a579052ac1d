//! Search limits and move pacing.
//!
//! Search depth is the only thing that bounds the work an engine does.
//! Pacing is purely cosmetic: a minimum wall-clock duration per move so that
//! games watched by a human do not flash past. It never cuts a search short.

use std::time::{Duration, Instant};

/// Limits handed to an [`crate::Engine`] for one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Minimum time a move takes to be returned (None = return immediately)
    pub min_duration: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only a depth (no pacing).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            min_duration: None,
        }
    }

    /// Add a minimum duration per move.
    pub fn with_min_duration(mut self, min_duration: Duration) -> Self {
        self.min_duration = Some(min_duration);
        self
    }

    /// Start the pacing clock. Call this when the search begins.
    pub fn start(&self) -> Pacing {
        Pacing::new(self.min_duration)
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Clock started at the beginning of a move search.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    started: Instant,
    min_duration: Option<Duration>,
}

impl Pacing {
    pub fn new(min_duration: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            min_duration,
        }
    }

    /// Get elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time still to wait before the move may be returned.
    pub fn remaining(&self) -> Duration {
        match self.min_duration {
            Some(min) => min.saturating_sub(self.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Block until the minimum duration has passed.
    pub fn finish(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;

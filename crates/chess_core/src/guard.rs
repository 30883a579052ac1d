//! Scoped move application.

use std::ops::{Deref, DerefMut};

use crate::game::Game;

/// A move applied to a [`Game`] for the lifetime of the guard.
///
/// Dropping the guard takes the move back, so the board is restored on every
/// exit path of the code holding it: normal return, an early `break` after a
/// cutoff, `?` propagation and unwinding.
#[must_use = "dropping the guard immediately undoes the move"]
pub struct MoveGuard<'a> {
    game: &'a mut Game,
}

impl<'a> MoveGuard<'a> {
    pub(crate) fn new(game: &'a mut Game) -> Self {
        Self { game }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let restored = self.game.restore_previous();
        debug_assert!(restored, "move guard dropped with an empty history");
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod guard_tests;

//! The contract every stateful engine implements.
//!
//! Engines are created lazily (on first use), mutated by one action at a
//! time, and rendered on demand:
//! - `apply`: handle one user action, returning a typed outcome
//! - `result`: `Some` once the engine is in a terminal state
//! - `view`: project the current state for the presentation surface

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, ViewModel};

/// How a finished round ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The player won.
    Win,
    /// The player lost (including busts and lockouts).
    Loss,
    /// Tie; nothing changes hands.
    Push,
}

impl GameResult {
    /// Check if the player won.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Win
    }
}

/// Engine trait.
///
/// ## Implementation Notes
///
/// - `apply` must not mutate state when it rejects malformed input
/// - `apply` after a terminal state is a no-op that reports `GameOver`-style outcomes
/// - `rng` is only consulted by engines that draw cards mid-game
pub trait GameEngine {
    /// One discrete user action.
    type Action;

    /// What the action did.
    type Outcome;

    /// Apply an action.
    fn apply(&mut self, action: Self::Action, rng: &mut GameRng) -> Result<Self::Outcome>;

    /// Check if the round is over.
    ///
    /// Returns `Some(result)` if it has ended, `None` if play continues.
    fn result(&self) -> Option<GameResult>;

    /// Render the current state.
    fn view(&self) -> ViewModel;

    // === Convenience Methods ===

    /// Whether further actions are refused until reset.
    ///
    /// Defaults to "a result exists". Engines that play many rounds on one
    /// state override it.
    fn is_terminal(&self) -> bool {
        self.result().is_some()
    }
}

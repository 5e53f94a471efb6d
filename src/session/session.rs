//! One player's engine slots.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ArcadeConfig, GameRng};
use crate::games::bagels::BagelsGame;
use crate::games::blackjack::BlackjackTable;
use crate::games::hacking::HackingGame;
use crate::games::hangman::HangmanGame;
use crate::router::Route;

/// Session identifier chosen by the front-end.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A player's isolated set of engine states.
///
/// Each slot is created on first access and dropped by `reset`. The
/// session owns its RNG, so secrets and shuffles are reproducible per
/// session when the store is seeded.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    config: ArcadeConfig,
    rng: GameRng,
    hangman: Option<HangmanGame>,
    bagels: Option<BagelsGame>,
    hacking: Option<HackingGame>,
    blackjack: Option<BlackjackTable>,
    last_ciphertext: Option<String>,
}

impl Session {
    /// A session with no engines started yet.
    #[must_use]
    pub fn new(id: SessionId, config: ArcadeConfig, rng: GameRng) -> Self {
        Self {
            id,
            config,
            rng,
            hangman: None,
            bagels: None,
            hacking: None,
            blackjack: None,
            last_ciphertext: None,
        }
    }

    /// This session's ID.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Hangman slot, started on first access, plus the session RNG.
    pub fn hangman(&mut self) -> (&mut HangmanGame, &mut GameRng) {
        let rng = &mut self.rng;
        let game = self.hangman.get_or_insert_with(|| HangmanGame::new(rng));
        (game, rng)
    }

    /// Bagels slot, started on first access, plus the session RNG.
    pub fn bagels(&mut self) -> (&mut BagelsGame, &mut GameRng) {
        let rng = &mut self.rng;
        let game = self.bagels.get_or_insert_with(|| BagelsGame::new(rng));
        (game, rng)
    }

    /// Terminal Hacking slot, started on first access, plus the session RNG.
    pub fn hacking(&mut self) -> (&mut HackingGame, &mut GameRng) {
        let rng = &mut self.rng;
        let game = self.hacking.get_or_insert_with(|| HackingGame::new(rng));
        (game, rng)
    }

    /// Blackjack slot plus the RNG its deals shuffle with.
    pub fn blackjack(&mut self) -> (&mut BlackjackTable, &mut GameRng) {
        let config = &self.config;
        let table = self.blackjack.get_or_insert_with(|| BlackjackTable::new(config));
        (table, &mut self.rng)
    }

    /// Put a prepared engine into its slot, replacing what was there.
    pub fn install_hangman(&mut self, game: HangmanGame) {
        self.hangman = Some(game);
    }

    /// Put a prepared engine into its slot, replacing what was there.
    pub fn install_bagels(&mut self, game: BagelsGame) {
        self.bagels = Some(game);
    }

    /// Put a prepared engine into its slot, replacing what was there.
    pub fn install_hacking(&mut self, game: HackingGame) {
        self.hacking = Some(game);
    }

    /// Last ciphertext submitted to the Caesar solver.
    #[must_use]
    pub fn last_ciphertext(&self) -> Option<&str> {
        self.last_ciphertext.as_deref()
    }

    /// Remember the ciphertext so the full ranking can be shown later.
    pub fn set_last_ciphertext(&mut self, ciphertext: impl Into<String>) {
        self.last_ciphertext = Some(ciphertext.into());
    }

    /// Whether the engine behind `route` has been started.
    #[must_use]
    pub fn is_started(&self, route: Route) -> bool {
        match route {
            Route::Hangman => self.hangman.is_some(),
            Route::Bagels => self.bagels.is_some(),
            Route::Hacking => self.hacking.is_some(),
            Route::Blackjack => self.blackjack.is_some(),
            Route::Caesar => self.last_ciphertext.is_some(),
            Route::Home | Route::Powerball => false,
        }
    }

    /// Discard the engine behind `route`. The next access starts fresh.
    ///
    /// For blackjack this is the full reset: the bankroll goes back to
    /// its starting value.
    pub fn reset(&mut self, route: Route) {
        info!(session_id = %self.id, %route, "Resetting engine");
        match route {
            Route::Hangman => self.hangman = None,
            Route::Bagels => self.bagels = None,
            Route::Hacking => self.hacking = None,
            Route::Blackjack => {
                if let Some(table) = self.blackjack.as_mut() {
                    table.reset();
                }
            }
            Route::Caesar => self.last_ciphertext = None,
            Route::Home | Route::Powerball => debug!(%route, "Nothing to reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::blackjack::BlackjackAction;
    use crate::rules::GameEngine;

    fn session() -> Session {
        Session::new(SessionId::new("test"), ArcadeConfig::default(), GameRng::new(42))
    }

    #[test]
    fn test_slots_are_lazy() {
        let mut s = session();
        assert!(!s.is_started(Route::Hangman));
        let secret = s.hangman().0.secret().to_string();
        assert!(s.is_started(Route::Hangman));
        // Same game on second access.
        assert_eq!(s.hangman().0.secret(), secret);
        assert!(!s.is_started(Route::Bagels));
    }

    #[test]
    fn test_reset_redraws() {
        let mut s = session();
        s.hangman().0.guess("E");
        s.reset(Route::Hangman);
        assert!(!s.is_started(Route::Hangman));
        assert!(s.hangman().0.missed().is_empty());
    }

    #[test]
    fn test_blackjack_reset_restores_bankroll() {
        let mut s = session();
        {
            let (table, rng) = s.blackjack();
            table.apply(BlackjackAction::Deal(100), rng).unwrap();
            table.apply(BlackjackAction::Stand, rng).unwrap();
        }
        s.reset(Route::Blackjack);
        let (table, _) = s.blackjack();
        assert_eq!(table.bankroll(), 1000);
        assert!(table.round().is_none());
    }

    #[test]
    fn test_session_id_conversions() {
        let a: SessionId = "alice".into();
        let b: SessionId = String::from("alice").into();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "alice");
        assert_eq!(a.as_str(), "alice");
    }
}

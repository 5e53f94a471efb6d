//! Engine error types.
//!
//! Malformed guesses are not errors: engines answer them with a rejected
//! outcome and leave their state alone. `ArcadeError` covers what remains:
//! wagers outside the table limits, actions in the wrong blackjack phase,
//! an exhausted deck, and configuration or routing failures.

/// Errors raised by engines, the session store, and the router.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ArcadeError {
    /// Wager outside `[min, max]`, where `max` is the current bankroll.
    #[display("Wager {wager} is outside the allowed range {min}..={max}")]
    WagerOutOfRange {
        /// Requested wager.
        wager: u32,
        /// Table minimum.
        min: u32,
        /// Current bankroll.
        max: u32,
    },

    /// Bankroll is below the table minimum; only a full reset helps.
    #[display("Bankroll {bankroll} is below the minimum wager {min}")]
    Broke {
        /// Current bankroll.
        bankroll: u32,
        /// Table minimum.
        min: u32,
    },

    /// Tried to draw from an empty deck.
    #[display("Deck exhausted")]
    DeckExhausted,

    /// A hand is already being played.
    #[display("A hand is already in progress")]
    HandInProgress,

    /// Hit or stand without a hand waiting on the player.
    #[display("No hand is waiting for a player decision")]
    NoHandInProgress,

    /// A secret that breaks the engine's shape rules.
    #[display("Invalid secret {secret:?}")]
    InvalidSecret {
        /// The rejected secret.
        secret: String,
    },

    /// A route name that doesn't match any engine.
    #[display("Unknown route {name:?}")]
    UnknownRoute {
        /// The name that was requested.
        name: String,
    },

    /// Unreadable or inconsistent configuration.
    #[display("Config error: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },
}

impl std::error::Error for ArcadeError {}

/// Result alias for arcade operations.
pub type Result<T> = std::result::Result<T, ArcadeError>;

//! # arcade
//!
//! A small collection of single-player games behind one routing layer.
//!
//! ## Design Principles
//!
//! 1. **Engines are state machines**: each game takes one discrete action at
//!    a time and returns a typed outcome plus a view model. No engine renders
//!    markup or talks to another engine.
//!
//! 2. **Injected randomness**: every draw goes through a seedable `GameRng`,
//!    so a seeded arcade replays identically.
//!
//! 3. **Explicit sessions**: per-player state lives in a `SessionStore`
//!    passed to the router, never in globals.
//!
//! ## Modules
//!
//! - `core`: RNG, secret pools, configuration, errors, view models
//! - `rules`: `GameEngine` trait for stateful games
//! - `games`: Hangman, Bagels, Terminal Hacking, Caesar, Blackjack, Powerball
//! - `session`: per-player engine slots and the keyed store
//! - `router`: routes, commands, and the `Arcade` dispatcher

pub mod core;
pub mod rules;
pub mod games;
pub mod session;
pub mod router;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, ArcadeError, GameRng, Notice, NoticeLevel, Result, SecretPool, ViewModel,
};

pub use crate::rules::{GameEngine, GameResult};

pub use crate::session::{Session, SessionId, SessionStore};

pub use crate::router::{Arcade, Command, Route};

//! Shared engine contract.
//!
//! Stateful games implement `GameEngine` to define:
//! - How a user action changes their state
//! - When the round is over and who won
//! - What the player currently sees
//!
//! The router drives engines only through this trait plus each engine's
//! reset and hint helpers. Engines never call each other.

pub mod engine;

pub use engine::{GameEngine, GameResult};

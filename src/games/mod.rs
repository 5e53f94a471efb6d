//! Game engines.
//!
//! Each engine is self-contained: its own secret, its own rules, its own
//! view. None of them call each other.
//!
//! - `hangman`, `bagels`, `hacking`, `blackjack`: stateful, implement `GameEngine`
//! - `caesar`, `powerball`: stateless, recomputed per request

pub mod bagels;
pub mod blackjack;
pub mod caesar;
pub mod hacking;
pub mod hangman;
pub mod powerball;

//! Hangman: guess a secret word one letter at a time.
//!
//! - The word is drawn from a fixed pool
//! - Correct letters are revealed in place
//! - Six misses complete the gallows and lose the round

mod game;

pub use game::{HangmanGame, HangmanOutcome, GALLOWS, MAX_MISSES, WORDS};

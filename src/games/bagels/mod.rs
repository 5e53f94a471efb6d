//! Bagels: deduce a 3-digit code from positional clues.
//!
//! - The code has three distinct digits
//! - Each guess costs one of ten tries and is scored Fermi/Pico/Bagels
//! - An exact match wins immediately

mod game;

pub use game::{
    excluded_digit, score, BagelsGame, BagelsOutcome, BagelsTurn, Clue, Feedback, CODE_LEN, MAX_TRIES,
};

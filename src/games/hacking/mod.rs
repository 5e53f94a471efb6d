//! Terminal Hacking: find the password by likeness elimination.
//!
//! Eight seven-letter candidates are shown in a memory dump. Every wrong
//! pick costs one of four tries and reports how many positions match.

mod game;

pub use game::{likeness, HackingGame, HackingOutcome, MAX_TRIES, NO_SELECTION, PASSWORDS};

//! Caesar cipher hacker.
//!
//! Stateless: every request brute-forces all 26 shift keys, scores each
//! candidate by the marker words it contains, and ranks them. The same
//! ciphertext always yields the same ranked list.

mod solver;

pub use solver::{
    decrypt, decrypt_with, encrypt, marker_score, CaesarReport, Candidate, ALPHABET_LEN,
    DEFAULT_CIPHERTEXT, MARKER_WORDS,
};

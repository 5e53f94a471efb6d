//! Brute-force Caesar decryption with marker-word scoring.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Notice, ViewModel};

/// Letters a shift acts on.
pub const ALPHABET_LEN: u8 = 26;

/// Common English words; each one found in a candidate adds a point.
pub const MARKER_WORDS: [&str; 9] = ["THE", "AND", "ARE", "FOR", "WAS", "YOU", "NOT", "WITH", "THIS"];

/// Ciphertext offered when the player has typed nothing.
pub const DEFAULT_CIPHERTEXT: &str = "QEB NRFZH YOLTK CLU GRJMP LSBO QEB IXWV ALD";

const INSTRUCTIONS: &str = "Enter an encrypted message. This tool uses brute force to try all 26 \
possible shift keys and ranks them by how many common words appear.";

fn shift_letter(c: char, forward: u8) -> char {
    if c.is_ascii_uppercase() {
        let offset = (c as u8 - b'A' + forward) % ALPHABET_LEN;
        (b'A' + offset) as char
    } else {
        c
    }
}

/// Shift every letter of the uppercased text backward by `key`.
///
/// Non-letters pass through untouched.
#[must_use]
pub fn decrypt_with(ciphertext: &str, key: u8) -> String {
    let back = ALPHABET_LEN - key % ALPHABET_LEN;
    ciphertext
        .to_ascii_uppercase()
        .chars()
        .map(|c| shift_letter(c, back))
        .collect()
}

/// Shift every letter of the uppercased text forward by `key`.
#[must_use]
pub fn encrypt(plaintext: &str, key: u8) -> String {
    let forward = key % ALPHABET_LEN;
    plaintext
        .to_ascii_uppercase()
        .chars()
        .map(|c| shift_letter(c, forward))
        .collect()
}

/// Count marker words occurring anywhere in `text`.
#[must_use]
pub fn marker_score(text: &str) -> usize {
    MARKER_WORDS.iter().filter(|w| text.contains(*w)).count()
}

/// One decryption attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Shift key tried.
    pub key: u8,
    /// Decoded text.
    pub plaintext: String,
    /// Marker words found.
    pub score: usize,
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key {}: {}", self.key, self.plaintext)
    }
}

/// All 26 candidates for one ciphertext, best first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaesarReport {
    ciphertext: String,
    ranked: Vec<Candidate>,
}

impl CaesarReport {
    /// The input.
    #[must_use]
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Highest scoring candidate; lowest key wins ties.
    #[must_use]
    pub fn best(&self) -> &Candidate {
        &self.ranked[0]
    }

    /// Every candidate, best first.
    #[must_use]
    pub fn ranked(&self) -> &[Candidate] {
        &self.ranked
    }

    /// Render the report. `show_all` lists every key.
    #[must_use]
    pub fn view(&self, show_all: bool) -> ViewModel {
        let best = self.best();
        let mut view = ViewModel::new("Caesar Cipher Hacker", INSTRUCTIONS)
            .with_board_line(format!("Ciphertext: {}", self.ciphertext))
            .with_board_line(format!("Best match: {}", best))
            .with_prompt("Encrypted Message:");

        if show_all {
            view.feedback = self.ranked.iter().map(ToString::to_string).collect();
        }

        let notice = if best.score > 0 {
            Notice::success(format!("Key {} scored {} common words.", best.key, best.score))
        } else {
            Notice::warning("No common words found under any key.")
        };
        view.with_notice(notice)
    }
}

/// Try every shift key and rank the results.
///
/// Candidates are sorted by score, descending. The sort is stable over the
/// key order 0..26, so equal scores keep ascending keys.
#[instrument(skip(ciphertext), fields(len = ciphertext.len()))]
pub fn decrypt(ciphertext: &str) -> CaesarReport {
    let mut ranked: Vec<Candidate> = (0..ALPHABET_LEN)
        .map(|key| {
            let plaintext = decrypt_with(ciphertext, key);
            let score = marker_score(&plaintext);
            Candidate { key, plaintext, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(best_key = ranked[0].key, best_score = ranked[0].score, "Caesar ranked");

    CaesarReport {
        ciphertext: ciphertext.to_string(),
        ranked,
    }
}

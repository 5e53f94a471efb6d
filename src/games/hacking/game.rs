//! Terminal Hacking engine implementation.

use tracing::{debug, info, instrument};

use crate::core::{ArcadeError, GameRng, Notice, Result, SecretPool, ViewModel};
use crate::rules::{GameEngine, GameResult};

/// Candidate passwords: eight words of seven letters.
pub const PASSWORDS: SecretPool = SecretPool::new(&[
    "NETWORK", "STORAGE", "CIRCUIT", "MONITOR", "VIRTUAL", "DIGITAL", "LOGICAL", "CONSOLE",
]);

/// Wrong guesses allowed before lockout.
pub const MAX_TRIES: u8 = 4;

/// Menu placeholder meaning "nothing picked yet".
pub const NO_SELECTION: &str = "---";

const INSTRUCTIONS: &str = "Find the password in the list. You have 4 tries. 'Likeness' tells you \
how many characters are in the exact same position as the password.";

/// Count positions where `a` and `b` hold the same character.
///
/// Compares over the shorter of the two words.
#[must_use]
pub fn likeness(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x == y).count()
}

/// What a single authentication attempt did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HackingOutcome {
    /// Placeholder selection; nothing changed.
    NoSelection,
    /// Correct password.
    AccessGranted,
    /// Wrong password, tries remain.
    Denied {
        /// Matching positions.
        likeness: usize,
        /// Tries left after this one.
        tries_left: u8,
    },
    /// Wrong password, no tries remain.
    LockedOut {
        /// Matching positions.
        likeness: usize,
        /// The password.
        password: String,
    },
    /// The terminal is already unlocked or locked out; nothing changed.
    GameOver,
}

impl HackingOutcome {
    /// Message for the player.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            HackingOutcome::NoSelection => Notice::warning("Select a password first."),
            HackingOutcome::AccessGranted => Notice::success("ACCESS GRANTED"),
            HackingOutcome::Denied { likeness, tries_left } => {
                Notice::error(format!("Likeness={}. Remaining Tries: {}", likeness, tries_left))
            }
            HackingOutcome::LockedOut { likeness, password } => Notice::error(format!(
                "Likeness={}. TERMINAL LOCKED. The password was {}",
                likeness, password
            )),
            HackingOutcome::GameOver => Notice::warning("Terminal session ended. Run a system reset."),
        }
    }
}

/// One round of Terminal Hacking.
#[derive(Clone, Debug)]
pub struct HackingGame {
    secret: &'static str,
    addresses: Vec<u32>,
    tries_left: u8,
    granted: bool,
}

impl HackingGame {
    /// Start a round with a random password and memory addresses.
    pub fn new(rng: &mut GameRng) -> Self {
        let secret = PASSWORDS.draw(rng);
        let addresses = (0..PASSWORDS.len()).map(|_| rng.gen_range(4000..9001)).collect();
        debug!("Hacking password drawn");
        Self::build(secret, addresses)
    }

    /// Start a round with a known password from `PASSWORDS`.
    pub fn with_secret(secret: &str) -> Result<Self> {
        let secret = PASSWORDS
            .entries()
            .iter()
            .copied()
            .find(|w| *w == secret)
            .ok_or_else(|| ArcadeError::InvalidSecret { secret: secret.to_string() })?;
        let addresses = (0..PASSWORDS.len() as u32).map(|i| 4000 + i * 16).collect();
        Ok(Self::build(secret, addresses))
    }

    fn build(secret: &'static str, addresses: Vec<u32>) -> Self {
        Self {
            secret,
            addresses,
            tries_left: MAX_TRIES,
            granted: false,
        }
    }

    /// Try a password.
    ///
    /// Accepts a word (case-insensitive) or a 1-based index into the word
    /// list. Empty input and `---` are the no-selection placeholder.
    #[instrument(skip(self), fields(tries_left = self.tries_left))]
    pub fn authenticate(&mut self, selection: &str) -> HackingOutcome {
        if self.tries_left == 0 {
            return HackingOutcome::GameOver;
        }

        let Some(word) = self.resolve(selection) else {
            return HackingOutcome::NoSelection;
        };

        if word == self.secret {
            self.granted = true;
            self.tries_left = 0;
            info!("Access granted");
            return HackingOutcome::AccessGranted;
        }

        self.tries_left -= 1;
        let likeness = likeness(&word, self.secret);
        if self.tries_left == 0 {
            info!("Terminal locked out");
            return HackingOutcome::LockedOut {
                likeness,
                password: self.secret.to_string(),
            };
        }

        debug!(likeness, "Access denied");
        HackingOutcome::Denied {
            likeness,
            tries_left: self.tries_left,
        }
    }

    fn resolve(&self, selection: &str) -> Option<String> {
        let selection = selection.trim();
        if selection.is_empty() || selection == NO_SELECTION {
            return None;
        }
        if let Ok(index) = selection.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| PASSWORDS.entries().get(i))
                .map(|w| w.to_string());
        }
        Some(selection.to_ascii_uppercase())
    }

    /// The password.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret
    }

    /// Attempts left.
    #[must_use]
    pub fn tries_left(&self) -> u8 {
        self.tries_left
    }

    /// Memory dump lines: `0xADDR WORD` for every candidate.
    #[must_use]
    pub fn memory_dump(&self) -> Vec<String> {
        PASSWORDS
            .entries()
            .iter()
            .zip(&self.addresses)
            .map(|(word, addr)| format!("0x{:X} {}", addr, word))
            .collect()
    }
}

impl GameEngine for HackingGame {
    type Action = String;
    type Outcome = HackingOutcome;

    fn apply(&mut self, action: String, _rng: &mut GameRng) -> Result<HackingOutcome> {
        Ok(self.authenticate(&action))
    }

    fn result(&self) -> Option<GameResult> {
        if self.granted {
            Some(GameResult::Win)
        } else if self.tries_left == 0 {
            Some(GameResult::Loss)
        } else {
            None
        }
    }

    fn view(&self) -> ViewModel {
        let mut view = ViewModel::new("Terminal Hacking", INSTRUCTIONS).terminal(self.tries_left == 0);
        view.board = self.memory_dump();

        match self.result() {
            Some(GameResult::Win) => view = view.with_notice(HackingOutcome::AccessGranted.notice()),
            Some(_) => view = view.with_notice(Notice::error("TERMINAL LOCKED")),
            None => {
                view = view.with_prompt(format!(
                    "Select Password (1-{} or word), {} tries left:",
                    PASSWORDS.len(),
                    self.tries_left
                ));
            }
        }
        view
    }
}

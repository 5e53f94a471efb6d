//! Hangman engine implementation.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::{ArcadeError, GameRng, Notice, Result, SecretPool, ViewModel};
use crate::rules::{GameEngine, GameResult};

/// Words the secret is drawn from.
pub const WORDS: SecretPool = SecretPool::new(&[
    "PYTHON",
    "INFORMATICS",
    "NETWORK",
    "LINUX",
    "TERMINAL",
    "CODING",
    "DATABASE",
]);

/// Misses allowed before the gallows is complete.
pub const MAX_MISSES: usize = 6;

/// Gallows art, indexed by number of misses.
pub const GALLOWS: [&str; MAX_MISSES + 1] = [
    "+--+\n|  |\n   |\n   |\n   |\n   |\n=====",
    "+--+\n|  |\nO  |\n   |\n   |\n   |\n=====",
    "+--+\n|  |\nO  |\n|  |\n   |\n   |\n=====",
    "+--+\n|  |\nO  |\n/|  |\n   |\n   |\n=====",
    "+--+\n|  |\nO  |\n/|\\ |\n   |\n   |\n=====",
    "+--+\n|  |\nO  |\n/|\\ |\n/   |\n   |\n=====",
    "+--+\n|  |\nO  |\n/|\\ |\n/ \\ |\n   |\n=====",
];

const INSTRUCTIONS: &str = "Guess the secret word. You have 6 lives. Every incorrect letter \
draws a new part of the gallows. If the gallows is completed, you lose.";

/// What a single guess did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HangmanOutcome {
    /// Not a single letter; nothing changed.
    Invalid,
    /// Letter was guessed before; nothing changed.
    AlreadyTried(char),
    /// Letter is in the word.
    Correct(char),
    /// Letter is not in the word.
    Incorrect(char),
    /// Last hidden letter revealed.
    Won {
        /// The secret word.
        word: String,
    },
    /// Sixth miss.
    Lost {
        /// The secret word.
        word: String,
    },
    /// The round already ended; nothing changed.
    GameOver,
}

impl HangmanOutcome {
    /// Message for the player.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            HangmanOutcome::Invalid => Notice::warning("Please enter a single letter."),
            HangmanOutcome::AlreadyTried(c) => Notice::warning(format!("You already guessed {}.", c)),
            HangmanOutcome::Correct(c) => Notice::info(format!("{} is in the word.", c)),
            HangmanOutcome::Incorrect(c) => Notice::info(format!("{} is not in the word.", c)),
            HangmanOutcome::Won { word } => Notice::success(format!("Success. Word: {}", word)),
            HangmanOutcome::Lost { word } => Notice::error(format!("Defeat. Word: {}", word)),
            HangmanOutcome::GameOver => Notice::warning("The game is over. Start a new game."),
        }
    }
}

/// One round of Hangman.
#[derive(Clone, Debug)]
pub struct HangmanGame {
    secret: String,
    correct: FxHashSet<char>,
    missed: SmallVec<[char; MAX_MISSES]>,
    over: bool,
}

impl HangmanGame {
    /// Start a round with a word drawn from `WORDS`.
    pub fn new(rng: &mut GameRng) -> Self {
        let secret = WORDS.draw(rng);
        debug!(len = secret.len(), "Hangman secret drawn");
        Self::from_word(secret.to_string())
    }

    /// Start a round with a known word (uppercase A-Z only).
    pub fn with_secret(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ArcadeError::InvalidSecret { secret });
        }
        Ok(Self::from_word(secret))
    }

    fn from_word(secret: String) -> Self {
        Self {
            secret,
            correct: FxHashSet::default(),
            missed: SmallVec::new(),
            over: false,
        }
    }

    /// Guess a letter.
    ///
    /// The input is trimmed and uppercased; anything other than one ASCII
    /// letter is `Invalid`. Repeated letters are `AlreadyTried`.
    #[instrument(skip(self), fields(misses = self.missed.len()))]
    pub fn guess(&mut self, input: &str) -> HangmanOutcome {
        if self.over {
            return HangmanOutcome::GameOver;
        }

        let mut chars = input.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
            _ => return HangmanOutcome::Invalid,
        };

        if self.correct.contains(&letter) || self.missed.contains(&letter) {
            return HangmanOutcome::AlreadyTried(letter);
        }

        if self.secret.contains(letter) {
            self.correct.insert(letter);
            if self.is_solved() {
                self.over = true;
                info!("Hangman won");
                return HangmanOutcome::Won { word: self.secret.clone() };
            }
            debug!(%letter, "Correct guess");
            HangmanOutcome::Correct(letter)
        } else {
            self.missed.push(letter);
            if self.missed.len() >= MAX_MISSES {
                self.over = true;
                info!("Hangman lost");
                return HangmanOutcome::Lost { word: self.secret.clone() };
            }
            debug!(%letter, "Missed guess");
            HangmanOutcome::Incorrect(letter)
        }
    }

    fn is_solved(&self) -> bool {
        self.secret.chars().all(|c| self.correct.contains(&c))
    }

    /// The word with unguessed letters replaced by `_`, space separated.
    #[must_use]
    pub fn masked(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.correct.contains(&c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The secret word.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Missed letters in guess order.
    #[must_use]
    pub fn missed(&self) -> &[char] {
        &self.missed
    }

    /// Whether `letter` has been guessed correctly.
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.correct.contains(&letter)
    }

    /// Misses still allowed.
    #[must_use]
    pub fn lives_left(&self) -> usize {
        MAX_MISSES - self.missed.len()
    }

    /// Gallows frame for the current miss count.
    #[must_use]
    pub fn gallows(&self) -> &'static str {
        GALLOWS[self.missed.len().min(MAX_MISSES)]
    }

    /// Hint text; never changes state.
    #[must_use]
    pub fn hint(&self) -> Notice {
        Notice::info(format!("The word has {} letters.", self.secret.len()))
    }
}

impl GameEngine for HangmanGame {
    type Action = String;
    type Outcome = HangmanOutcome;

    fn apply(&mut self, action: String, _rng: &mut GameRng) -> Result<HangmanOutcome> {
        Ok(self.guess(&action))
    }

    fn result(&self) -> Option<GameResult> {
        if !self.over {
            None
        } else if self.is_solved() {
            Some(GameResult::Win)
        } else {
            Some(GameResult::Loss)
        }
    }

    fn view(&self) -> ViewModel {
        let missed: Vec<String> = self.missed.iter().map(|c| c.to_string()).collect();
        let mut view = ViewModel::new("Hangman", INSTRUCTIONS)
            .with_board_line(self.gallows())
            .with_board_line(format!("Missed: {}", missed.join(", ")))
            .with_board_line(self.masked())
            .terminal(self.over);

        match self.result() {
            Some(GameResult::Win) => {
                view = view.with_notice(HangmanOutcome::Won { word: self.secret.clone() }.notice());
            }
            Some(_) => {
                view = view.with_notice(HangmanOutcome::Lost { word: self.secret.clone() }.notice());
            }
            None => view = view.with_prompt("Guess a letter:"),
        }
        view
    }
}

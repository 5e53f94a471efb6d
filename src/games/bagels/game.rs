//! Bagels engine implementation.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::{ArcadeError, GameRng, Notice, Result, ViewModel};
use crate::rules::{GameEngine, GameResult};

/// Digits in a code.
pub const CODE_LEN: usize = 3;

/// Guesses allowed per round.
pub const MAX_TRIES: u8 = 10;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const INSTRUCTIONS: &str = "Deduce the 3-digit secret number. You have 10 tries. \
'Fermi' = correct digit/place. 'Pico' = correct digit/wrong place. 'Bagels' = no correct digits.";

/// One feedback token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Clue {
    /// Right digit, right place.
    Fermi,
    /// Right digit, wrong place.
    Pico,
    /// No digit matches at all.
    Bagels,
}

/// Feedback for one guess: tokens in guess-digit order, or a lone `Bagels`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback(SmallVec<[Clue; CODE_LEN]>);

impl Feedback {
    /// The tokens.
    #[must_use]
    pub fn clues(&self) -> &[Clue] {
        &self.0
    }

    /// Count of `Fermi` tokens.
    #[must_use]
    pub fn fermi_count(&self) -> usize {
        self.0.iter().filter(|c| **c == Clue::Fermi).count()
    }

    /// True for the lone `Bagels` answer.
    #[must_use]
    pub fn is_bagels(&self) -> bool {
        self.0.as_slice() == [Clue::Bagels]
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let words: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", words.join(" "))
    }
}

/// Score `guess` against `secret`.
///
/// Each guess digit, left to right, yields `Fermi` when it sits at the same
/// position in the secret, `Pico` when it appears elsewhere, and nothing
/// otherwise. No tokens at all collapses to a single `Bagels`.
#[must_use]
pub fn score(secret: &str, guess: &str) -> Feedback {
    let secret: Vec<char> = secret.chars().collect();
    let mut clues: SmallVec<[Clue; CODE_LEN]> = SmallVec::new();

    for (i, digit) in guess.chars().enumerate() {
        if secret.get(i) == Some(&digit) {
            clues.push(Clue::Fermi);
        } else if secret.contains(&digit) {
            clues.push(Clue::Pico);
        }
    }

    if clues.is_empty() {
        clues.push(Clue::Bagels);
    }
    Feedback(clues)
}

/// A digit guaranteed absent from `secret`.
///
/// Starts at `(first digit + 5) mod 10` and walks forward until it finds a
/// digit the secret doesn't use.
#[must_use]
pub fn excluded_digit(secret: &str) -> char {
    let start = secret
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map_or(0, |d| (d + 5) % 10);

    (0..10)
        .map(|offset| DIGITS[((start + offset) % 10) as usize])
        .find(|d| !secret.contains(*d))
        .unwrap_or('0')
}

/// One logged guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagelsTurn {
    /// 1-based try number.
    pub attempt: u8,
    /// The guess as typed.
    pub guess: String,
    /// Its feedback.
    pub feedback: Feedback,
}

impl std::fmt::Display for BagelsTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Try {}: {} -> {}", self.attempt, self.guess, self.feedback)
    }
}

/// What a single guess did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BagelsOutcome {
    /// Not exactly three digits; no try consumed.
    Invalid,
    /// A scored miss.
    Clues(BagelsTurn),
    /// Exact match.
    Won {
        /// The secret code.
        secret: String,
        /// Try it was found on.
        attempt: u8,
    },
    /// Tenth try missed.
    Lost {
        /// The secret code.
        secret: String,
        /// Feedback for the final guess.
        last: BagelsTurn,
    },
    /// The round already ended; nothing changed.
    GameOver,
}

impl BagelsOutcome {
    /// Message for the player.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            BagelsOutcome::Invalid => Notice::warning("Enter exactly 3 digits."),
            BagelsOutcome::Clues(turn) => Notice::info(turn.to_string()),
            BagelsOutcome::Won { secret, .. } => Notice::success(format!("Confirmed: {}", secret)),
            BagelsOutcome::Lost { secret, .. } => {
                Notice::error(format!("Game Over. The secret was {}", secret))
            }
            BagelsOutcome::GameOver => Notice::warning("The game is over. Restart to play again."),
        }
    }
}

/// One round of Bagels.
#[derive(Clone, Debug)]
pub struct BagelsGame {
    secret: String,
    history: Vector<BagelsTurn>,
    tries: u8,
    won: bool,
}

impl BagelsGame {
    /// Start a round with three distinct random digits.
    pub fn new(rng: &mut GameRng) -> Self {
        let secret: String = rng.sample_distinct(&DIGITS, CODE_LEN).into_iter().collect();
        debug!("Bagels secret drawn");
        Self::from_code(secret)
    }

    /// Start a round with a known code: three distinct digits.
    pub fn with_secret(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        let digits: Vec<char> = secret.chars().collect();
        let distinct = digits.iter().enumerate().all(|(i, d)| !digits[..i].contains(d));
        if digits.len() != CODE_LEN || !digits.iter().all(char::is_ascii_digit) || !distinct {
            return Err(ArcadeError::InvalidSecret { secret });
        }
        Ok(Self::from_code(secret))
    }

    fn from_code(secret: String) -> Self {
        Self {
            secret,
            history: Vector::new(),
            tries: 0,
            won: false,
        }
    }

    /// Submit a guess.
    #[instrument(skip(self), fields(tries = self.tries))]
    pub fn guess(&mut self, input: &str) -> BagelsOutcome {
        if self.is_locked() {
            return BagelsOutcome::GameOver;
        }
        if input.chars().count() != CODE_LEN || !input.chars().all(|c| c.is_ascii_digit()) {
            return BagelsOutcome::Invalid;
        }

        self.tries += 1;
        let turn = BagelsTurn {
            attempt: self.tries,
            guess: input.to_string(),
            feedback: score(&self.secret, input),
        };
        self.history.push_back(turn.clone());

        if input == self.secret {
            self.won = true;
            info!(attempt = self.tries, "Bagels cracked");
            return BagelsOutcome::Won {
                secret: self.secret.clone(),
                attempt: self.tries,
            };
        }

        if self.tries >= MAX_TRIES {
            info!("Bagels out of tries");
            return BagelsOutcome::Lost {
                secret: self.secret.clone(),
                last: turn,
            };
        }

        debug!(feedback = %turn.feedback, "Bagels clue");
        BagelsOutcome::Clues(turn)
    }

    fn is_locked(&self) -> bool {
        self.won || self.tries >= MAX_TRIES
    }

    /// The secret code.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Valid guesses made so far.
    #[must_use]
    pub fn tries(&self) -> u8 {
        self.tries
    }

    /// Guess log, oldest first. Cheap to clone.
    #[must_use]
    pub fn history(&self) -> &Vector<BagelsTurn> {
        &self.history
    }

    /// Hint naming a digit the code doesn't contain. Costs nothing.
    #[must_use]
    pub fn hint(&self) -> Notice {
        Notice::info(format!("One of the digits is NOT {}", excluded_digit(&self.secret)))
    }
}

impl GameEngine for BagelsGame {
    type Action = String;
    type Outcome = BagelsOutcome;

    fn apply(&mut self, action: String, _rng: &mut GameRng) -> Result<BagelsOutcome> {
        Ok(self.guess(&action))
    }

    fn result(&self) -> Option<GameResult> {
        if self.won {
            Some(GameResult::Win)
        } else if self.tries >= MAX_TRIES {
            Some(GameResult::Loss)
        } else {
            None
        }
    }

    fn view(&self) -> ViewModel {
        let mut view = ViewModel::new("Bagels Logic", INSTRUCTIONS).terminal(self.is_locked());
        view.feedback = self.history.iter().rev().map(ToString::to_string).collect();

        match self.result() {
            Some(GameResult::Win) => {
                view = view.with_notice(Notice::success(format!("Confirmed: {}", self.secret)));
            }
            Some(_) => {
                view = view.with_notice(Notice::error(format!("Game Over. The secret was {}", self.secret)));
            }
            None => view = view.with_prompt(format!("Guess ({}/{}):", self.tries + 1, MAX_TRIES)),
        }
        view
    }
}

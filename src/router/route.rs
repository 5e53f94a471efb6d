//! Route names and the home page.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ArcadeError, Result, ViewModel};

/// One screen of the arcade.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Hangman,
    Caesar,
    Bagels,
    Hacking,
    Blackjack,
    Powerball,
}

impl Route {
    /// Parse a route name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| ArcadeError::UnknownRoute {
            name: name.trim().to_string(),
        })
    }

    /// Whether this route keeps per-session state.
    #[must_use]
    pub fn is_stateful(self) -> bool {
        !matches!(self, Route::Home | Route::Powerball)
    }
}

const HOME_INTRO: &str = "A collection of small logic, cryptography, and probability games. \
Pick one below.";

/// The landing page with the navigation guide.
#[must_use]
pub fn home_view() -> ViewModel {
    ViewModel::new("Arcade Hub", HOME_INTRO)
        .with_board_line("Logic & Deduction: hangman, bagels, hacking")
        .with_board_line("Cryptography: caesar")
        .with_board_line("Probability & Math: powerball, blackjack")
        .with_board_line("Progress lives in memory and is lost when the arcade exits.")
        .with_prompt("Choose a game:")
}

//! Arcade configuration.
//!
//! `ArcadeConfig` holds the few knobs the engines expose: the RNG seed and the
//! blackjack table limits. Word pools and try limits are fixed rules of each
//! game and live next to the engine that owns them.
//!
//! Configuration can be built in code (`Default` + `with_*`), or parsed from
//! TOML:
//!
//! ```
//! use arcade::core::ArcadeConfig;
//!
//! let config = ArcadeConfig::from_toml_str("seed = 7\nstarting_bankroll = 500").unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.starting_bankroll, 500);
//! assert_eq!(config.min_wager, 10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::{ArcadeError, Result};

/// Arcade-wide configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Root RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Blackjack bankroll for a fresh session (and after a full reset).
    pub starting_bankroll: u32,

    /// Smallest wager the blackjack table accepts.
    pub min_wager: u32,

    /// Wager suggested by the front-end when none is given.
    pub default_wager: u32,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_bankroll: 1000,
            min_wager: 10,
            default_wager: 100,
        }
    }
}

impl ArcadeConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting bankroll.
    #[must_use]
    pub fn with_starting_bankroll(mut self, bankroll: u32) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Set the minimum wager.
    #[must_use]
    pub fn with_min_wager(mut self, min_wager: u32) -> Self {
        self.min_wager = min_wager;
        self
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ArcadeError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ArcadeError::Config {
            message: format!("Failed to read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the table limits make a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.min_wager == 0 {
            return Err(ArcadeError::Config {
                message: "min_wager must be at least 1".to_string(),
            });
        }
        if self.starting_bankroll < self.min_wager {
            return Err(ArcadeError::Config {
                message: format!(
                    "starting_bankroll {} is below min_wager {}",
                    self.starting_bankroll, self.min_wager
                ),
            });
        }
        Ok(())
    }

    /// The default wager clamped into `[min_wager, bankroll]`.
    #[must_use]
    pub fn suggested_wager(&self, bankroll: u32) -> u32 {
        self.default_wager.min(bankroll).max(self.min_wager)
    }
}

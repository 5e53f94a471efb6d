//! Command-line interface for the arcade.

use std::path::PathBuf;

use clap::Parser;

/// Arcade - logic, cryptography, and probability games in the terminal
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Play Hangman, Bagels, Terminal Hacking, Caesar, Blackjack and Powerball", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for reproducible secrets and shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting blackjack bankroll
    #[arg(long)]
    pub bankroll: Option<u32>,

    /// TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print each view as one JSON line
    #[arg(long)]
    pub json: bool,

    /// Route to open first (home, hangman, caesar, bagels, hacking, blackjack, powerball)
    #[arg(default_value = "home")]
    pub route: String,
}

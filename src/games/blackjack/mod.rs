//! Blackjack against a dealer who stands on 17.
//!
//! - `card`: ranks, suits, and the 52-card deck
//! - `hand`: hand values with soft/hard aces
//! - `table`: bankroll and the per-hand state machine
//!
//! Every hand is dealt from its own freshly shuffled deck. The bankroll
//! carries over between hands until the table is reset.

mod card;
mod hand;
mod table;

pub use card::{Card, Deck, Rank, Suit, DECK_SIZE};
pub use hand::{Hand, BLACKJACK};
pub use table::{
    settle, BlackjackAction, BlackjackOutcome, BlackjackTable, HandOutcome, Phase, Round, DEALER_STANDS_ON,
};

//! Cards and the 52-card deck.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::core::{ArcadeError, GameRng, Result};

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Rank {
    /// Ace (1 or 11).
    Ace,
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// Blackjack value with aces counted high (11).
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// Short label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Suit {
    /// ♥
    Hearts,
    /// ♦
    Diamonds,
    /// ♠
    Spades,
    /// ♣
    Clubs,
}

impl Suit {
    /// Suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank.
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Cards left to deal. Drawing pops from the end; a deck is never refilled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// All 52 cards in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::standard();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A stacked deck: the first card given is the first card drawn.
    #[must_use]
    pub fn from_top(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Deal the next card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(ArcadeError::DeckExhausted)
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when nothing is left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_unique() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: FxHashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(42));
        let b = Deck::shuffled(&mut GameRng::new(42));
        let c = Deck::shuffled(&mut GameRng::new(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::standard());
    }

    #[test]
    fn test_draw_until_exhausted() {
        let mut deck = Deck::shuffled(&mut GameRng::new(7));
        let mut seen = FxHashSet::default();
        for _ in 0..DECK_SIZE {
            let card = deck.draw().unwrap();
            assert!(seen.insert(card), "card dealt twice: {}", card);
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(ArcadeError::DeckExhausted));
    }

    #[test]
    fn test_from_top_order() {
        let mut deck = Deck::from_top([
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(deck.draw().unwrap().rank, Rank::King);
        assert_eq!(deck.draw().unwrap().rank, Rank::Two);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::King, Suit::Spades).to_string(), "K♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
    }
}

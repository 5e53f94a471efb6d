//! Hand evaluation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};

/// Best total without busting.
pub const BLACKJACK: u32 = 21;

/// A player's or dealer's cards, in deal order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    /// Empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Add a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True with no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total and how many aces are still counted as 11.
    fn evaluate(&self) -> (u32, usize) {
        let mut total: u32 = self.cards.iter().map(|c| c.rank.value()).sum();
        let mut soft_aces = self.cards.iter().filter(|c| c.rank == Rank::Ace).count();
        while total > BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        (total, soft_aces)
    }

    /// Blackjack value.
    ///
    /// Aces start at 11 and drop to 1 one at a time while the hand is over 21.
    /// Gives the best total at or under 21 when one exists, and the smallest
    /// bust total otherwise.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.evaluate().0
    }

    /// True when an ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.evaluate().1 > 0
    }

    /// True when over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::blackjack::card::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(r, Suit::Clubs)))
    }

    #[test]
    fn test_face_cards_are_ten() {
        assert_eq!(hand(&[Rank::King, Rank::Seven]).value(), 17);
        assert_eq!(hand(&[Rank::Jack, Rank::Queen]).value(), 20);
    }

    #[test]
    fn test_two_aces() {
        let h = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(h.value(), 12);
        assert!(h.is_soft());
    }

    #[test]
    fn test_ace_nine_nine() {
        let h = hand(&[Rank::Ace, Rank::Nine, Rank::Nine]);
        assert_eq!(h.value(), 19);
        assert!(!h.is_soft());
    }

    #[test]
    fn test_soft_seventeen() {
        let h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());
    }

    #[test]
    fn test_bust_reports_minimum() {
        let h = hand(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(h.value(), 26);
        assert!(h.is_bust());
    }

    #[test]
    fn test_four_aces_and_seven() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Seven]).value(), 21);
    }

    #[test]
    fn test_display() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ten]).to_string(), "A♣ 10♣");
        assert_eq!(Hand::new().value(), 0);
    }
}

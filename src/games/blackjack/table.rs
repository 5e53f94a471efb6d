//! The blackjack table: bankroll plus the hand in play.
//!
//! A hand moves `Dealing -> PlayerTurn -> DealerTurn -> Settled`. A player
//! bust skips the dealer turn. The wager is only moved at settlement, and a
//! win saturates at `u32::MAX` rather than wrapping.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::card::{Card, Deck};
use super::hand::Hand;
use crate::core::{ArcadeConfig, ArcadeError, GameRng, Notice, Result, ViewModel};
use crate::rules::{GameEngine, GameResult};

/// The dealer draws below this total and stands at or above it.
pub const DEALER_STANDS_ON: u32 = 17;

const INSTRUCTIONS: &str = "Get as close to 21 as possible. If you exceed 21, you bust. \
The dealer stands on 17.";

/// Where a hand is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Initial cards going out. Dealing finishes before the round is
    /// stored, so a stored `Round` never reports this phase.
    Dealing,
    /// Waiting on hit or stand.
    PlayerTurn,
    /// Dealer drawing to 17.
    DealerTurn,
    /// Outcome decided and paid.
    Settled,
}

/// How a settled hand ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beats dealer total.
    PlayerHigher,
    /// Dealer total beats player total.
    DealerHigher,
    /// Equal totals.
    Push,
}

impl HandOutcome {
    /// Result from the player's side.
    #[must_use]
    pub fn result(self) -> GameResult {
        match self {
            HandOutcome::DealerBust | HandOutcome::PlayerHigher => GameResult::Win,
            HandOutcome::PlayerBust | HandOutcome::DealerHigher => GameResult::Loss,
            HandOutcome::Push => GameResult::Push,
        }
    }
}

/// Decide a finished hand.
///
/// In priority order: player bust loses, dealer bust wins, then the higher
/// total wins and equal totals push.
#[must_use]
pub fn settle(player: &Hand, dealer: &Hand) -> HandOutcome {
    let (p, d) = (player.value(), dealer.value());
    if player.is_bust() {
        HandOutcome::PlayerBust
    } else if dealer.is_bust() {
        HandOutcome::DealerBust
    } else if p > d {
        HandOutcome::PlayerHigher
    } else if p < d {
        HandOutcome::DealerHigher
    } else {
        HandOutcome::Push
    }
}

/// One hand: its own deck, both hands, and the wager riding on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    wager: u32,
    phase: Phase,
    outcome: Option<HandOutcome>,
}

impl Round {
    /// Player's hand.
    #[must_use]
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// Dealer's hand, hole card included.
    #[must_use]
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Cards left in this hand's deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Amount riding on the hand.
    #[must_use]
    pub fn wager(&self) -> u32 {
        self.wager
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set once settled.
    #[must_use]
    pub fn outcome(&self) -> Option<HandOutcome> {
        self.outcome
    }
}

/// A player action at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlackjackAction {
    /// Start a hand with this wager.
    Deal(u32),
    /// Take a card.
    Hit,
    /// Hand over to the dealer.
    Stand,
}

/// What an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlackjackOutcome {
    /// Initial cards are out; the player acts next.
    Dealt {
        /// Player total after the deal.
        player_value: u32,
    },
    /// Player drew without busting.
    Drew {
        /// The card.
        card: Card,
        /// New total.
        player_value: u32,
    },
    /// The hand is over and the bankroll updated.
    Settled {
        /// How it ended.
        outcome: HandOutcome,
        /// Amount that was riding.
        wager: u32,
        /// Bankroll after payment.
        bankroll: u32,
    },
}

impl BlackjackOutcome {
    /// Message for the player.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            BlackjackOutcome::Dealt { player_value } => {
                Notice::info(format!("Cards dealt. You have {}. Hit or stand?", player_value))
            }
            BlackjackOutcome::Drew { card, player_value } => {
                Notice::info(format!("You drew {}. You have {}.", card, player_value))
            }
            BlackjackOutcome::Settled { outcome, wager, .. } => match outcome {
                HandOutcome::PlayerBust => Notice::error(format!("Bust. -${}", wager)),
                HandOutcome::DealerHigher => Notice::error(format!("Loss. -${}", wager)),
                HandOutcome::DealerBust => Notice::success(format!("Dealer busts. Win. +${}", wager)),
                HandOutcome::PlayerHigher => Notice::success(format!("Win. +${}", wager)),
                HandOutcome::Push => Notice::info("Push. Wager returned."),
            },
        }
    }
}

/// Bankroll and the current hand. The bankroll outlives individual hands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackTable {
    starting_bankroll: u32,
    min_wager: u32,
    bankroll: u32,
    round: Option<Round>,
}

impl BlackjackTable {
    /// A table with the configured bankroll and minimum wager.
    #[must_use]
    pub fn new(config: &ArcadeConfig) -> Self {
        Self {
            starting_bankroll: config.starting_bankroll,
            min_wager: config.min_wager,
            bankroll: config.starting_bankroll,
            round: None,
        }
    }

    /// Current bankroll.
    #[must_use]
    pub fn bankroll(&self) -> u32 {
        self.bankroll
    }

    /// Smallest accepted wager.
    #[must_use]
    pub fn min_wager(&self) -> u32 {
        self.min_wager
    }

    /// The current or last hand.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// True while the dealer's second card must stay face down.
    #[must_use]
    pub fn hole_card_hidden(&self) -> bool {
        self.round.as_ref().is_some_and(|r| r.phase != Phase::Settled)
    }

    /// True when the bankroll can't cover the minimum wager.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.bankroll < self.min_wager
    }

    /// Shuffle a fresh deck and deal a hand.
    pub fn new_hand(&mut self, wager: u32, rng: &mut GameRng) -> Result<BlackjackOutcome> {
        self.check_wager(wager)?;
        self.deal(wager, Deck::shuffled(rng))
    }

    /// Deal a hand from a prepared deck.
    pub fn new_hand_with_deck(&mut self, wager: u32, deck: Deck) -> Result<BlackjackOutcome> {
        self.check_wager(wager)?;
        self.deal(wager, deck)
    }

    fn check_wager(&self, wager: u32) -> Result<()> {
        if self.round.as_ref().is_some_and(|r| r.phase != Phase::Settled) {
            return Err(ArcadeError::HandInProgress);
        }
        if self.is_broke() {
            warn!(bankroll = self.bankroll, "Bankroll below minimum wager");
            return Err(ArcadeError::Broke {
                bankroll: self.bankroll,
                min: self.min_wager,
            });
        }
        if wager < self.min_wager || wager > self.bankroll {
            warn!(wager, bankroll = self.bankroll, "Wager rejected");
            return Err(ArcadeError::WagerOutOfRange {
                wager,
                min: self.min_wager,
                max: self.bankroll,
            });
        }
        Ok(())
    }

    #[instrument(skip(self, deck), fields(bankroll = self.bankroll))]
    fn deal(&mut self, wager: u32, mut deck: Deck) -> Result<BlackjackOutcome> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.push(deck.draw()?);
            dealer.push(deck.draw()?);
        }

        let player_value = player.value();
        debug!(player_value, "Hand dealt");
        self.round = Some(Round {
            deck,
            player,
            dealer,
            wager,
            phase: Phase::PlayerTurn,
            outcome: None,
        });
        Ok(BlackjackOutcome::Dealt { player_value })
    }

    /// Draw a card for the player. Busting settles the hand at once.
    #[instrument(skip(self))]
    pub fn hit(&mut self) -> Result<BlackjackOutcome> {
        let round = self
            .round
            .as_mut()
            .filter(|r| r.phase == Phase::PlayerTurn)
            .ok_or(ArcadeError::NoHandInProgress)?;

        let card = round.deck.draw()?;
        round.player.push(card);
        let player_value = round.player.value();
        debug!(%card, player_value, "Player hits");

        if round.player.is_bust() {
            return Ok(Self::finish(round, &mut self.bankroll));
        }
        Ok(BlackjackOutcome::Drew { card, player_value })
    }

    /// End the player's turn; the dealer draws to 17 and the hand settles.
    #[instrument(skip(self))]
    pub fn stand(&mut self) -> Result<BlackjackOutcome> {
        let round = self
            .round
            .as_mut()
            .filter(|r| r.phase == Phase::PlayerTurn)
            .ok_or(ArcadeError::NoHandInProgress)?;

        round.phase = Phase::DealerTurn;
        while round.dealer.value() < DEALER_STANDS_ON {
            let card = round.deck.draw()?;
            debug!(%card, "Dealer draws");
            round.dealer.push(card);
        }
        Ok(Self::finish(round, &mut self.bankroll))
    }

    fn finish(round: &mut Round, bankroll: &mut u32) -> BlackjackOutcome {
        let outcome = settle(&round.player, &round.dealer);
        match outcome.result() {
            GameResult::Win => *bankroll = bankroll.saturating_add(round.wager),
            GameResult::Loss => *bankroll = bankroll.saturating_sub(round.wager),
            GameResult::Push => {}
        }
        round.phase = Phase::Settled;
        round.outcome = Some(outcome);
        info!(
            ?outcome,
            player = round.player.value(),
            dealer = round.dealer.value(),
            bankroll = *bankroll,
            "Hand settled"
        );
        BlackjackOutcome::Settled {
            outcome,
            wager: round.wager,
            bankroll: *bankroll,
        }
    }

    /// Back to the starting bankroll with no hand.
    pub fn reset(&mut self) {
        info!(bankroll = self.starting_bankroll, "Blackjack table reset");
        self.bankroll = self.starting_bankroll;
        self.round = None;
    }

    fn dealer_line(&self, round: &Round) -> String {
        match round.dealer.cards().first() {
            Some(up) if self.hole_card_hidden() => {
                format!("Dealer: {} ?? ({}+)", up, up.rank.value())
            }
            _ => format!("Dealer: {} ({})", round.dealer, round.dealer.value()),
        }
    }
}

impl GameEngine for BlackjackTable {
    type Action = BlackjackAction;
    type Outcome = BlackjackOutcome;

    fn apply(&mut self, action: BlackjackAction, rng: &mut GameRng) -> Result<BlackjackOutcome> {
        match action {
            BlackjackAction::Deal(wager) => self.new_hand(wager, rng),
            BlackjackAction::Hit => self.hit(),
            BlackjackAction::Stand => self.stand(),
        }
    }

    fn result(&self) -> Option<GameResult> {
        self.round.as_ref().and_then(|r| r.outcome).map(HandOutcome::result)
    }

    /// A settled hand still accepts the next deal; only a broke table is done.
    fn is_terminal(&self) -> bool {
        self.is_broke()
    }

    fn view(&self) -> ViewModel {
        let mut view = ViewModel::new("Blackjack", INSTRUCTIONS)
            .with_board_line(format!("Total Bankroll: ${}", self.bankroll));

        if let Some(round) = &self.round {
            view = view
                .with_board_line(self.dealer_line(round))
                .with_board_line(format!("Player: {} ({})", round.player, round.player.value()))
                .with_board_line(format!("Wager: ${}", round.wager));
            if round.phase == Phase::PlayerTurn {
                view = view.with_prompt("hit or stand?");
            } else if let Some(outcome) = round.outcome {
                let settled = BlackjackOutcome::Settled {
                    outcome,
                    wager: round.wager,
                    bankroll: self.bankroll,
                };
                view = view.with_notice(settled.notice());
            }
        }

        if self.hole_card_hidden() {
            return view;
        }
        if self.is_broke() {
            view.with_notice(Notice::error("Out of money. Reset the table to play again."))
                .terminal(true)
        } else {
            view.with_prompt(format!("deal <wager> ({}-{})", self.min_wager, self.bankroll))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::blackjack::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    /// Deck dealing player, dealer, player, dealer, then `rest` in order.
    fn stacked(player: [Rank; 2], dealer: [Rank; 2], rest: &[Rank]) -> Deck {
        let mut cards = vec![card(player[0]), card(dealer[0]), card(player[1]), card(dealer[1])];
        cards.extend(rest.iter().map(|&r| card(r)));
        Deck::from_top(cards)
    }

    fn table() -> BlackjackTable {
        BlackjackTable::new(&ArcadeConfig::default())
    }

    #[test]
    fn test_deal_order() {
        let mut t = table();
        let out = t
            .new_hand_with_deck(100, stacked([Rank::King, Rank::Seven], [Rank::Nine, Rank::Nine], &[]))
            .unwrap();
        assert_eq!(out, BlackjackOutcome::Dealt { player_value: 17 });
        let round = t.round().unwrap();
        assert_eq!(round.dealer().value(), 18);
        assert_eq!(round.phase(), Phase::PlayerTurn);
        assert!(t.hole_card_hidden());
    }

    #[test]
    fn test_stand_loses_to_higher_dealer() {
        let mut t = table();
        t.new_hand_with_deck(100, stacked([Rank::King, Rank::Seven], [Rank::Nine, Rank::Nine], &[]))
            .unwrap();
        let out = t.stand().unwrap();
        assert_eq!(
            out,
            BlackjackOutcome::Settled {
                outcome: HandOutcome::DealerHigher,
                wager: 100,
                bankroll: 900
            }
        );
        assert_eq!(t.bankroll(), 900);
        assert!(!t.hole_card_hidden());
        assert_eq!(t.result(), Some(GameResult::Loss));
    }

    #[test]
    fn test_dealer_draws_to_seventeen() {
        let mut t = table();
        t.new_hand_with_deck(
            50,
            stacked([Rank::King, Rank::Nine], [Rank::Two, Rank::Three], &[Rank::Four, Rank::Five, Rank::Ten]),
        )
        .unwrap();
        // Dealer: 5 -> 9 -> 14 -> 24
        let out = t.stand().unwrap();
        assert!(matches!(out, BlackjackOutcome::Settled { outcome: HandOutcome::DealerBust, .. }));
        assert_eq!(t.round().unwrap().dealer().len(), 5);
        assert_eq!(t.bankroll(), 1050);
    }

    #[test]
    fn test_dealer_stands_on_seventeen() {
        let mut t = table();
        t.new_hand_with_deck(50, stacked([Rank::King, Rank::Eight], [Rank::Ten, Rank::Seven], &[Rank::Two]))
            .unwrap();
        let out = t.stand().unwrap();
        assert!(matches!(out, BlackjackOutcome::Settled { outcome: HandOutcome::PlayerHigher, .. }));
        assert_eq!(t.round().unwrap().dealer().len(), 2);
        assert_eq!(t.round().unwrap().deck().len(), 1);
    }

    #[test]
    fn test_hit_bust_settles_without_dealer() {
        let mut t = table();
        t.new_hand_with_deck(
            200,
            stacked([Rank::King, Rank::Six], [Rank::Two, Rank::Three], &[Rank::Nine, Rank::Ten]),
        )
        .unwrap();
        let out = t.hit().unwrap();
        assert!(matches!(out, BlackjackOutcome::Settled { outcome: HandOutcome::PlayerBust, .. }));
        assert_eq!(t.round().unwrap().dealer().len(), 2);
        assert_eq!(t.bankroll(), 800);
        assert_eq!(t.hit(), Err(ArcadeError::NoHandInProgress));
        assert_eq!(t.stand(), Err(ArcadeError::NoHandInProgress));
    }

    #[test]
    fn test_push_keeps_bankroll() {
        let mut t = table();
        t.new_hand_with_deck(100, stacked([Rank::King, Rank::Eight], [Rank::Queen, Rank::Eight], &[]))
            .unwrap();
        let out = t.stand().unwrap();
        assert!(matches!(out, BlackjackOutcome::Settled { outcome: HandOutcome::Push, .. }));
        assert_eq!(t.bankroll(), 1000);
    }

    #[test]
    fn test_wager_limits() {
        let mut t = table();
        let mut rng = GameRng::new(1);
        assert_eq!(
            t.new_hand(5, &mut rng),
            Err(ArcadeError::WagerOutOfRange { wager: 5, min: 10, max: 1000 })
        );
        assert!(matches!(t.new_hand(1001, &mut rng), Err(ArcadeError::WagerOutOfRange { .. })));
        assert!(t.round().is_none());

        t.new_hand(1000, &mut rng).unwrap();
        assert_eq!(t.new_hand(10, &mut rng), Err(ArcadeError::HandInProgress));
    }

    #[test]
    fn test_broke_needs_full_reset() {
        let mut t = BlackjackTable::new(&ArcadeConfig::default().with_starting_bankroll(15));
        t.new_hand_with_deck(15, stacked([Rank::King, Rank::Six], [Rank::Ten, Rank::Nine], &[]))
            .unwrap();
        t.stand().unwrap();
        assert_eq!(t.bankroll(), 0);
        assert!(t.is_broke());
        assert!(t.view().terminal);
        assert_eq!(
            t.new_hand(10, &mut GameRng::new(1)),
            Err(ArcadeError::Broke { bankroll: 0, min: 10 })
        );

        t.reset();
        assert_eq!(t.bankroll(), 15);
        assert!(t.round().is_none());
    }

    #[test]
    fn test_win_saturates_bankroll() {
        let mut t = BlackjackTable::new(&ArcadeConfig::default().with_starting_bankroll(u32::MAX));
        let wager = u32::MAX / 2 + 1;
        t.new_hand_with_deck(wager, stacked([Rank::King, Rank::Queen], [Rank::Nine, Rank::Eight], &[]))
            .unwrap();
        let out = t.stand().unwrap();
        assert_eq!(
            out,
            BlackjackOutcome::Settled {
                outcome: HandOutcome::PlayerHigher,
                wager,
                bankroll: u32::MAX
            }
        );
        assert_eq!(t.bankroll(), u32::MAX);
    }

    #[test]
    fn test_terminal_only_when_broke() {
        let mut t = BlackjackTable::new(&ArcadeConfig::default().with_starting_bankroll(20));
        t.new_hand_with_deck(10, stacked([Rank::King, Rank::Six], [Rank::Ten, Rank::Nine], &[]))
            .unwrap();
        t.stand().unwrap();
        assert_eq!(t.result(), Some(GameResult::Loss));
        assert!(!t.is_terminal());
        assert!(!t.view().terminal);

        t.new_hand_with_deck(10, stacked([Rank::King, Rank::Six], [Rank::Ten, Rank::Nine], &[]))
            .unwrap();
        t.stand().unwrap();
        assert!(t.is_terminal());
        assert!(t.view().terminal);
    }

    #[test]
    fn test_exhausted_deck_is_an_error() {
        let mut t = table();
        let short = Deck::from_top([card(Rank::Two), card(Rank::Three), card(Rank::Four)]);
        assert_eq!(t.new_hand_with_deck(10, short), Err(ArcadeError::DeckExhausted));
        assert!(t.round().is_none());

        t.new_hand_with_deck(10, stacked([Rank::Two, Rank::Two], [Rank::Two, Rank::Two], &[]))
            .unwrap();
        assert_eq!(t.hit(), Err(ArcadeError::DeckExhausted));
    }

    #[test]
    fn test_view_hides_hole_card() {
        let mut t = table();
        t.new_hand_with_deck(100, stacked([Rank::King, Rank::Seven], [Rank::Nine, Rank::Ace], &[]))
            .unwrap();
        let view = t.view();
        assert_eq!(view.board[1], "Dealer: 9♠ ?? (9+)");
        assert_eq!(view.board[2], "Player: K♠ 7♠ (17)");
        assert_eq!(view.prompt.as_deref(), Some("hit or stand?"));

        t.stand().unwrap();
        let view = t.view();
        assert_eq!(view.board[1], "Dealer: 9♠ A♠ (20)");
        assert!(view.notice.is_some());
    }
}

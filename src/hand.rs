//! Hand representation and scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Difference between an Ace counted high (11) and low (1).
const ACE_ADJUSTMENT: u16 = 10;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += card.value();
    }

    if value <= BLACKJACK {
        return (value, aces > 0);
    }

    // Fewest aces that have to drop from 11 to 1.
    let needed = (value - BLACKJACK).div_ceil(ACE_ADJUSTMENT).min(aces);
    (value - ACE_ADJUSTMENT * needed, aces > needed)
}

/// Best total of the given cards.
///
/// Every Ace counts as 11 unless that would bust, in which case the fewest
/// Aces needed are counted as 1 instead.
///
/// ```
/// use bjsim::{Card, Suit, hand_total};
///
/// let aces = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 1)];
/// assert_eq!(hand_total(&aces), 12);
/// assert_eq!(hand_total(&[]), 0);
/// ```
#[must_use]
pub fn hand_total(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// A hand of cards held by the player or the dealer.
///
/// The most recently dealt card is at index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the front of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns the cards in the hand, newest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn total(&self) -> u16 {
        hand_total(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let (value, soft) = evaluate_cards(&self.cards);
        soft && value <= BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    /// Builds a hand in which the last yielded card is the newest.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::new();
        for card in iter {
            hand.add_card(card);
        }
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

//! Single-deck construction and shuffling.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered deck, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates the 52 canonical cards in a fixed order.
    ///
    /// Suits follow [`Suit::ALL`], ranks run from Ace to King within a suit.
    ///
    /// ```
    /// use bjsim::{Card, Deck, Suit};
    ///
    /// let deck = Deck::ordered();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.cards().next(), Some(&Card::new(Suit::Spades, 1)));
    /// ```
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut dyn RngCore) -> Self {
        let mut deck = Self::ordered();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that deals the given cards in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the remaining cards in deal order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

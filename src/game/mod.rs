//! Game state and dealing.

use rand::RngCore;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

mod dealer;
mod player;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Owner, TurnStatus};

/// Cards dealt before either turn starts.
const OPENING_CARDS: usize = 4;

/// The deck and both hands of one round.
///
/// Transitions take the state by value and return the next one, so a state
/// is never shared between rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    deck: Deck,
    player: Hand,
    dealer: Hand,
}

impl GameState {
    /// Shuffles a fresh deck and deals the opening hands.
    ///
    /// ```
    /// use bjsim::GameState;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let state = GameState::new_game(&mut rng);
    /// assert_eq!(state.player().len(), 2);
    /// assert_eq!(state.dealer().len(), 2);
    /// assert_eq!(state.cards_remaining(), 48);
    /// ```
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always covers the opening deal"
    )]
    pub fn new_game(rng: &mut dyn RngCore) -> Self {
        Self::deal(Deck::shuffled(rng)).expect("a full deck always covers the opening deal")
    }

    /// Deals the opening hands from the front of `deck`.
    ///
    /// Cards alternate between the hands the way a table deals: the first and
    /// third cards go to the player, the second and fourth to the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than four
    /// cards.
    pub fn deal(deck: Deck) -> Result<Self, DealError> {
        if deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut state = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
        };
        for owner in [Owner::Player, Owner::Dealer, Owner::Player, Owner::Dealer] {
            state = state.hit(owner)?;
        }
        Ok(state)
    }

    /// Moves the front card of the deck to the front of `owner`'s hand.
    ///
    /// The other hand and the rest of the deck are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if there is nothing left to deal.
    pub fn hit(self, owner: Owner) -> Result<Self, DealError> {
        self.hit_with_card(owner).map(|(state, _)| state)
    }

    /// Like [`GameState::hit`], also returning the card dealt.
    pub(crate) fn hit_with_card(mut self, owner: Owner) -> Result<(Self, Card), DealError> {
        let card = self.deck.draw().ok_or(DealError::EmptyDeck)?;
        self.hand_mut(owner).add_card(card);
        log::trace!("{owner} takes {card}");
        Ok((self, card))
    }

    fn hand_mut(&mut self, owner: Owner) -> &mut Hand {
        match owner {
            Owner::Player => &mut self.player,
            Owner::Dealer => &mut self.dealer,
        }
    }

    /// Returns the hand belonging to `owner`.
    #[must_use]
    pub const fn hand(&self, owner: Owner) -> &Hand {
        match owner {
            Owner::Player => &self.player,
            Owner::Dealer => &self.dealer,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}

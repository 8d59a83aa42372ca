use rand::RngCore;

use crate::error::DealError;
use crate::hand::BLACKJACK;
use crate::narration::{Event, GameLog};
use crate::strategy::Strategy;

use super::{GameState, Owner, TurnStatus};

impl GameState {
    /// Player plays their hand, asking `strategy` before every card.
    ///
    /// The strategy is not consulted once the hand is bust. Returns the final
    /// state and whether the player stood or busted.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the strategy keeps hitting after
    /// the deck is exhausted.
    pub fn player_turn(
        self,
        strategy: &mut dyn Strategy,
        rng: &mut dyn RngCore,
        log: &mut dyn GameLog,
    ) -> Result<(Self, TurnStatus), DealError> {
        let mut state = self;

        loop {
            let total = state.player().total();

            if total > BLACKJACK {
                log.record(&Event::Bust {
                    owner: Owner::Player,
                    total,
                });
                return Ok((state, TurnStatus::Busted));
            }
            if !strategy.decide(&state, rng) {
                log.record(&Event::Stand {
                    owner: Owner::Player,
                    total,
                });
                return Ok((state, TurnStatus::Standing));
            }

            let (next, card) = state.hit_with_card(Owner::Player)?;
            state = next;
            log.record(&Event::Hit {
                owner: Owner::Player,
                card,
                total: state.player().total(),
            });
        }
    }
}

use crate::error::DealError;
use crate::hand::BLACKJACK;
use crate::narration::{Event, GameLog};

use super::{GameState, Owner, TurnStatus};

/// The dealer draws below this total and stands from it up to 21.
pub const DEALER_STANDS_ON: u16 = 17;

impl GameState {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer draws while the total is below 17 and stands on any 17
    /// through 21, soft or hard. Returns the final state and whether the
    /// dealer stood or busted.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out while the dealer
    /// must draw.
    pub fn dealer_turn(
        self,
        log: &mut dyn GameLog,
    ) -> Result<(Self, TurnStatus), DealError> {
        let mut state = self;

        loop {
            let total = state.dealer().total();

            if total > BLACKJACK {
                log.record(&Event::Bust {
                    owner: Owner::Dealer,
                    total,
                });
                return Ok((state, TurnStatus::Busted));
            }
            if total >= DEALER_STANDS_ON {
                log.record(&Event::Stand {
                    owner: Owner::Dealer,
                    total,
                });
                return Ok((state, TurnStatus::Standing));
            }

            let (next, card) = state.hit_with_card(Owner::Dealer)?;
            state = next;
            log.record(&Event::Hit {
                owner: Owner::Dealer,
                card,
                total: state.dealer().total(),
            });
        }
    }
}

//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Not enough cards for the opening deal.
    #[error("not enough cards for the opening deal")]
    NotEnoughCards,
}

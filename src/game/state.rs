//! Turn state types.

use core::fmt;

/// Which hand a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// The player's hand.
    Player,
    /// The dealer's hand.
    Dealer,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        })
    }
}

/// Progress of a player or dealer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Still taking cards.
    Hitting,
    /// Went over 21 (terminal).
    Busted,
    /// Stopped taking cards (terminal).
    Standing,
}

impl TurnStatus {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Hitting)
    }
}

//! Round outcomes and the running tally.

use core::fmt;
use core::ops::AddAssign;

use crate::game::{GameState, TurnStatus};
use crate::hand::BLACKJACK;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Tie without either side busting.
    Draw,
}

impl RoundOutcome {
    /// All outcomes, in summary order.
    pub const ALL: [Self; 3] = [Self::PlayerWin, Self::DealerWin, Self::Draw];
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::PlayerWin => "Player wins",
            Self::DealerWin => "Dealer wins",
            Self::Draw => "Draw",
        })
    }
}

/// Decides a round from the two final totals.
///
/// A busted player always loses, even when the dealer busts with the same
/// total.
///
/// ```
/// use bjsim::{RoundOutcome, resolve};
///
/// assert_eq!(resolve(20, 19), RoundOutcome::PlayerWin);
/// assert_eq!(resolve(18, 23), RoundOutcome::PlayerWin);
/// assert_eq!(resolve(19, 19), RoundOutcome::Draw);
/// assert_eq!(resolve(22, 22), RoundOutcome::DealerWin);
/// ```
#[must_use]
pub const fn resolve(player_total: u16, dealer_total: u16) -> RoundOutcome {
    let player_live = player_total <= BLACKJACK;

    if player_live && (dealer_total > BLACKJACK || player_total > dealer_total) {
        RoundOutcome::PlayerWin
    } else if player_live && player_total == dealer_total {
        RoundOutcome::Draw
    } else {
        RoundOutcome::DealerWin
    }
}

/// Everything about one finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// The state after both turns.
    pub state: GameState,
    /// How the player's turn ended.
    pub player_status: TurnStatus,
    /// How the dealer's turn ended.
    pub dealer_status: TurnStatus,
    /// The player's final total.
    pub player_total: u16,
    /// The dealer's final total.
    pub dealer_total: u16,
    /// Who won.
    pub outcome: RoundOutcome,
}

/// Running count of round outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won by the player.
    pub player_wins: u32,
    /// Rounds won by the dealer.
    pub dealer_wins: u32,
    /// Rounds tied.
    pub draws: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
            draws: 0,
        }
    }

    /// Counts one more round with the given outcome.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.player_wins += 1,
            RoundOutcome::DealerWin => self.dealer_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    /// Returns the number of rounds with the given outcome.
    #[must_use]
    pub const fn count(&self, outcome: RoundOutcome) -> u32 {
        match outcome {
            RoundOutcome::PlayerWin => self.player_wins,
            RoundOutcome::DealerWin => self.dealer_wins,
            RoundOutcome::Draw => self.draws,
        }
    }

    /// Returns the number of rounds counted.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.player_wins + self.dealer_wins + self.draws
    }

    /// Share of rounds with the given outcome, from 0 to 100.
    ///
    /// An empty tally reports 0 for every outcome.
    #[must_use]
    pub fn percentage(&self, outcome: RoundOutcome) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(outcome)) * 100.0 / f64::from(total)
    }

    /// Adds the counts of `other` into this tally.
    pub const fn merge(&mut self, other: Self) {
        self.player_wins += other.player_wins;
        self.dealer_wins += other.dealer_wins;
        self.draws += other.draws;
    }
}

impl AddAssign<RoundOutcome> for Tally {
    fn add_assign(&mut self, outcome: RoundOutcome) {
        self.record(outcome);
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.merge(other);
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 16;
        const COUNT_WIDTH: usize = 10;
        const PERCENT_WIDTH: usize = 9;

        writeln!(f, "{:<LABEL_WIDTH$}{:>COUNT_WIDTH$}", "rounds played", self.total())?;
        for outcome in RoundOutcome::ALL {
            writeln!(
                f,
                "{:<LABEL_WIDTH$}{:>COUNT_WIDTH$}{:>PERCENT_WIDTH$.2}%",
                outcome,
                self.count(outcome),
                self.percentage(outcome)
            )?;
        }
        Ok(())
    }
}

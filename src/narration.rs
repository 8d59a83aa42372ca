//! Round narration events and sinks.
//!
//! The turn engine reports every transition to a [`GameLog`]. Pass `&mut ()`
//! to discard events, a `Vec<Event>` to keep them, or a `Transcript` to
//! print them as they happen. `None` discards like `()`.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::game::Owner;
use crate::hand::Hand;
use crate::result::RoundOutcome;

/// Something that happened during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opening hands after the deal.
    Dealt {
        /// The player's two cards.
        player: Hand,
        /// The dealer's two cards.
        dealer: Hand,
    },
    /// A card was dealt to a hand.
    Hit {
        /// Who took the card.
        owner: Owner,
        /// The card dealt.
        card: Card,
        /// Hand total after the card.
        total: u16,
    },
    /// A hand stopped taking cards.
    Stand {
        /// Who stood.
        owner: Owner,
        /// Final hand total.
        total: u16,
    },
    /// A hand went over 21.
    Bust {
        /// Who busted.
        owner: Owner,
        /// Final hand total.
        total: u16,
    },
    /// The round was resolved.
    Outcome {
        /// Who won.
        outcome: RoundOutcome,
        /// The player's final total.
        player_total: u16,
        /// The dealer's final total.
        dealer_total: u16,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dealt { player, dealer } => write!(
                f,
                "Player holds {player} ({}); Dealer holds {dealer} ({})",
                player.total(),
                dealer.total()
            ),
            Self::Hit { owner, card, total } => {
                write!(f, "{owner} draws {card} ({total})")
            }
            Self::Stand { owner, total } => write!(f, "{owner} stands on {total}"),
            Self::Bust { owner, total } => write!(f, "{owner} busts with {total}"),
            Self::Outcome {
                outcome,
                player_total,
                dealer_total,
            } => write!(f, "{outcome} ({player_total} to {dealer_total})"),
        }
    }
}

/// A sink for round events.
pub trait GameLog {
    /// Records one event.
    fn record(&mut self, event: &Event);
}

impl GameLog for () {
    fn record(&mut self, _event: &Event) {}
}

impl GameLog for Vec<Event> {
    fn record(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

impl<L: GameLog> GameLog for Option<L> {
    fn record(&mut self, event: &Event) {
        if let Some(log) = self {
            log.record(event);
        }
    }
}

impl<L: GameLog + ?Sized> GameLog for &mut L {
    fn record(&mut self, event: &Event) {
        (**self).record(event);
    }
}

#[cfg(feature = "std")]
pub use transcript::Transcript;

#[cfg(feature = "std")]
mod transcript {
    use std::io::Write;

    use super::{Event, GameLog};

    /// Writes each event as one line of text.
    ///
    /// Write failures are logged and otherwise ignored, so a closed pipe
    /// never aborts a simulation.
    #[derive(Debug)]
    pub struct Transcript<W: Write> {
        writer: W,
    }

    impl<W: Write> Transcript<W> {
        /// Creates a transcript writing to `writer`.
        pub const fn new(writer: W) -> Self {
            Self { writer }
        }

        /// Returns the underlying writer.
        pub fn into_inner(self) -> W {
            self.writer
        }
    }

    impl Transcript<std::io::Stdout> {
        /// Creates a transcript on standard output.
        #[must_use]
        pub fn stdout() -> Self {
            Self::new(std::io::stdout())
        }
    }

    impl<W: Write> GameLog for Transcript<W> {
        fn record(&mut self, event: &Event) {
            let separator = matches!(event, Event::Outcome { .. });
            let result = writeln!(self.writer, "{event}").and_then(|()| {
                if separator {
                    writeln!(self.writer)
                } else {
                    Ok(())
                }
            });
            if let Err(err) = result {
                log::warn!("failed to write transcript: {err}");
            }
        }
    }
}

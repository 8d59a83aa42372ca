//! A single-deck blackjack simulator with optional `no_std` support.
//!
//! The crate deals rounds between a fixed-rule dealer and a pluggable
//! [`Strategy`], and counts who wins over many trials with a [`Simulator`].
//!
//! # Example
//!
//! ```
//! use bjsim::{SimOptions, Simulator, strategy::Threshold};
//!
//! let mut sim = Simulator::new(SimOptions::default(), 42);
//! let tally = sim.run(&mut Threshold::greedy(), &mut ()).unwrap();
//! assert_eq!(tally.total(), 1000);
//! println!("{tally}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod narration;
pub mod options;
pub mod result;
pub mod sim;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{DEALER_STANDS_ON, GameState, Owner, TurnStatus};
pub use hand::{BLACKJACK, Hand, hand_total};
pub use narration::{Event, GameLog};
pub use options::SimOptions;
pub use result::{RoundOutcome, RoundReport, Tally, resolve};
pub use sim::{Simulator, play_round};
pub use strategy::{Strategy, StrategyKind};

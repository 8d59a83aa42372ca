//! Player decision strategies.
//!
//! A [`Strategy`] looks at the current [`GameState`] and answers one
//! question: take another card? The state is borrowed immutably, so a
//! strategy can inspect both hands and the remaining deck but never change
//! them. Any randomness must come from the generator passed in, which keeps
//! seeded simulations reproducible.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use rand::{Rng, RngCore};

use crate::game::GameState;

/// Decides whether the player hits.
pub trait Strategy {
    /// Returns `true` to take another card, `false` to stand.
    fn decide(&mut self, state: &GameState, rng: &mut dyn RngCore) -> bool;
}

impl<S: Strategy + ?Sized> Strategy for &mut S {
    fn decide(&mut self, state: &GameState, rng: &mut dyn RngCore) -> bool {
        (**self).decide(state, rng)
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn decide(&mut self, state: &GameState, rng: &mut dyn RngCore) -> bool {
        (**self).decide(state, rng)
    }
}

/// Always stands on the opening hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inactive;

impl Strategy for Inactive {
    fn decide(&mut self, _state: &GameState, _rng: &mut dyn RngCore) -> bool {
        false
    }
}

/// Hits while the player's total is below a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// The player hits on any total strictly below this.
    pub below: u16,
}

impl Threshold {
    /// Hits below `below`.
    #[must_use]
    pub const fn new(below: u16) -> Self {
        Self { below }
    }

    /// Hits below 15.
    #[must_use]
    pub const fn cautious() -> Self {
        Self::new(15)
    }

    /// Hits below 21.
    #[must_use]
    pub const fn greedy() -> Self {
        Self::new(21)
    }
}

impl Strategy for Threshold {
    fn decide(&mut self, state: &GameState, _rng: &mut dyn RngCore) -> bool {
        state.player().total() < self.below
    }
}

/// Hits or stands on a fair coin flip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinFlip;

impl Strategy for CoinFlip {
    fn decide(&mut self, _state: &GameState, rng: &mut dyn RngCore) -> bool {
        rng.random_bool(0.5)
    }
}

/// Adapts a closure into a [`Strategy`].
///
/// ```
/// use bjsim::strategy;
/// use bjsim::{GameState, Simulator, SimOptions};
///
/// let mut soft_hitter = strategy::from_fn(|state: &GameState| state.player().is_soft());
/// let mut sim = Simulator::new(SimOptions::default().with_trials(10), 3);
/// let tally = sim.run(&mut soft_hitter, &mut ()).unwrap();
/// assert_eq!(tally.total(), 10);
/// ```
pub const fn from_fn<F>(f: F) -> FromFn<F>
where
    F: FnMut(&GameState) -> bool,
{
    FromFn(f)
}

/// A [`Strategy`] backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

impl<F> Strategy for FromFn<F>
where
    F: FnMut(&GameState) -> bool,
{
    fn decide(&mut self, state: &GameState, _rng: &mut dyn RngCore) -> bool {
        (self.0)(state)
    }
}

#[cfg(feature = "std")]
pub use interactive::Interactive;

#[cfg(feature = "std")]
mod interactive {
    use std::io::{self, BufRead, Write};

    use rand::RngCore;

    use super::Strategy;
    use crate::game::GameState;

    /// Asks a person whether to hit.
    ///
    /// Each decision prints the player's hand to `output` and reads one line from
    /// `input`. An answer of `y` hits; anything else, including end of input
    /// or a read error, stands.
    #[derive(Debug)]
    pub struct Interactive<R, W> {
        input: R,
        output: W,
    }

    impl<R: BufRead, W: Write> Interactive<R, W> {
        /// Creates a strategy reading answers from `input`.
        pub const fn new(input: R, output: W) -> Self {
            Self { input, output }
        }

        fn prompt(&mut self, state: &GameState) -> io::Result<String> {
            writeln!(
                self.output,
                "Your hand: {} ({})",
                state.player(),
                state.player().total()
            )?;
            write!(self.output, "Hit? (y/n): ")?;
            self.output.flush()?;

            let mut answer = String::new();
            self.input.read_line(&mut answer)?;
            Ok(answer)
        }
    }

    impl Interactive<io::StdinLock<'static>, io::Stdout> {
        /// Creates a strategy prompting on the terminal.
        #[must_use]
        pub fn stdin() -> Self {
            Self::new(io::stdin().lock(), io::stdout())
        }
    }

    impl<R: BufRead, W: Write> Strategy for Interactive<R, W> {
        fn decide(&mut self, state: &GameState, _rng: &mut dyn RngCore) -> bool {
            match self.prompt(state) {
                Ok(answer) => answer.trim().eq_ignore_ascii_case("y"),
                Err(err) => {
                    log::warn!("failed to read decision, standing: {err}");
                    false
                }
            }
        }
    }
}

/// The built-in strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// [`Interactive`] on the terminal.
    #[cfg(feature = "std")]
    Interactive,
    /// [`Inactive`].
    Inactive,
    /// [`Threshold::cautious`].
    Cautious,
    /// [`Threshold::greedy`].
    Greedy,
    /// [`CoinFlip`].
    Random,
}

impl StrategyKind {
    /// Every built-in strategy.
    pub const ALL: &'static [Self] = &[
        #[cfg(feature = "std")]
        Self::Interactive,
        Self::Inactive,
        Self::Cautious,
        Self::Greedy,
        Self::Random,
    ];

    /// Every strategy that runs without a person at the keyboard.
    pub const AUTOMATED: [Self; 4] = [Self::Inactive, Self::Cautious, Self::Greedy, Self::Random];

    /// Name used on the command line and in summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "std")]
            Self::Interactive => "interactive",
            Self::Inactive => "inactive",
            Self::Cautious => "cautious",
            Self::Greedy => "greedy",
            Self::Random => "random",
        }
    }

    /// Builds the strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            #[cfg(feature = "std")]
            Self::Interactive => Box::new(Interactive::stdin()),
            Self::Inactive => Box::new(Inactive),
            Self::Cautious => Box::new(Threshold::cautious()),
            Self::Greedy => Box::new(Threshold::greedy()),
            Self::Random => Box::new(CoinFlip),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy")]
pub struct UnknownStrategy;

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownStrategy)
    }
}

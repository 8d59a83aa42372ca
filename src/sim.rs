//! Batch simulation of rounds.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::DealError;
use crate::game::GameState;
use crate::narration::{Event, GameLog};
use crate::options::SimOptions;
use crate::result::{RoundReport, Tally, resolve};
use crate::strategy::Strategy;

/// Plays one round to completion from an already dealt state.
///
/// The player's turn runs first, then the dealer's. The dealer always plays
/// out their hand, even after the player busts. The opening hands and the
/// outcome are reported to `log` alongside every card drawn.
///
/// # Errors
///
/// Returns [`DealError::EmptyDeck`] if the deck runs out mid-round.
pub fn play_round(
    state: GameState,
    strategy: &mut dyn Strategy,
    rng: &mut dyn RngCore,
    log: &mut dyn GameLog,
) -> Result<RoundReport, DealError> {
    log.record(&Event::Dealt {
        player: state.player().clone(),
        dealer: state.dealer().clone(),
    });

    let (state, player_status) = state.player_turn(strategy, rng, log)?;
    let (state, dealer_status) = state.dealer_turn(log)?;

    let player_total = state.player().total();
    let dealer_total = state.dealer().total();
    let outcome = resolve(player_total, dealer_total);
    log.record(&Event::Outcome {
        outcome,
        player_total,
        dealer_total,
    });
    log::debug!("{outcome}: player {player_total}, dealer {dealer_total}");

    Ok(RoundReport {
        state,
        player_status,
        dealer_status,
        player_total,
        dealer_total,
        outcome,
    })
}

/// Runs batches of rounds from a seeded generator.
///
/// The simulator owns the only generator used for shuffling and for random
/// strategies, so two simulators built with the same seed and fed the same
/// decisions play identical rounds.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Simulation options.
    pub options: SimOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Creates a new simulator with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{SimOptions, Simulator, strategy::Threshold};
    ///
    /// let mut sim = Simulator::new(SimOptions::default().with_trials(100), 42);
    /// let tally = sim.run(&mut Threshold::cautious(), &mut ()).unwrap();
    /// assert_eq!(tally.total(), 100);
    /// ```
    #[must_use]
    pub fn new(options: SimOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Deals a fresh round and plays it to completion.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out mid-round.
    pub fn play_round(
        &mut self,
        strategy: &mut dyn Strategy,
        log: &mut dyn GameLog,
    ) -> Result<RoundReport, DealError> {
        let state = GameState::new_game(&mut self.rng);
        play_round(state, strategy, &mut self.rng, log)
    }

    /// Plays exactly `rounds` rounds and counts the outcomes.
    ///
    /// # Errors
    ///
    /// Stops at the first aborted round and returns its error. The aborted
    /// round is never counted.
    pub fn run_many(
        &mut self,
        rounds: u32,
        strategy: &mut dyn Strategy,
        log: &mut dyn GameLog,
    ) -> Result<Tally, DealError> {
        log::info!("playing {rounds} rounds");

        let mut tally = Tally::new();
        for round in 1..=rounds {
            let report = self.play_round(strategy, log).inspect_err(|err| {
                log::error!("round {round} aborted: {err}");
            })?;
            tally.record(report.outcome);
        }

        log::info!(
            "finished {} rounds: {} player wins, {} dealer wins, {} draws",
            tally.total(),
            tally.player_wins,
            tally.dealer_wins,
            tally.draws
        );
        Ok(tally)
    }

    /// Plays the configured number of rounds.
    ///
    /// # Errors
    ///
    /// See [`Simulator::run_many`].
    pub fn run(
        &mut self,
        strategy: &mut dyn Strategy,
        log: &mut dyn GameLog,
    ) -> Result<Tally, DealError> {
        self.run_many(self.options.trials, strategy, log)
    }
}

//! Simulation configuration options.

/// Number of rounds played when none is configured.
pub const DEFAULT_TRIALS: u32 = 1000;

/// Configuration options for a batch of rounds.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::SimOptions;
///
/// let options = SimOptions::default().with_trials(10_000);
/// assert_eq!(options.trials, 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimOptions {
    /// Number of rounds to play.
    pub trials: u32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
        }
    }
}

impl SimOptions {
    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::SimOptions;
    ///
    /// let options = SimOptions::default().with_trials(50);
    /// assert_eq!(options.trials, 50);
    /// ```
    #[must_use]
    pub const fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }
}

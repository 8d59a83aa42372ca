//! Command-line driver: plays a batch of rounds and prints the tally.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::narration::Transcript;
use bjsim::{SimOptions, Simulator, StrategyKind, Tally};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Simulate single-deck blackjack", long_about = None)]
struct Args {
    /// Number of rounds to play per strategy.
    #[arg(short = 'n', long, default_value_t = bjsim::options::DEFAULT_TRIALS)]
    trials: u32,
    /// Player strategy, or `all` to compare every automated strategy.
    #[arg(short, long, value_enum, default_value_t = Choice::Cautious)]
    strategy: Choice,
    /// Seed for the shuffle and random decisions (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,
    /// Print every round as it is played.
    #[arg(long)]
    narrate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Choice {
    Interactive,
    Inactive,
    Cautious,
    Greedy,
    Random,
    All,
}

impl Choice {
    fn kinds(self) -> Vec<StrategyKind> {
        match self {
            Self::Interactive => vec![StrategyKind::Interactive],
            Self::Inactive => vec![StrategyKind::Inactive],
            Self::Cautious => vec![StrategyKind::Cautious],
            Self::Greedy => vec![StrategyKind::Greedy],
            Self::Random => vec![StrategyKind::Random],
            Self::All => StrategyKind::AUTOMATED.to_vec(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let options = SimOptions::default().with_trials(args.trials);

    for kind in args.strategy.kinds() {
        let narrate = args.narrate || kind == StrategyKind::Interactive;
        let mut strategy = kind.build();
        let mut transcript = narrate.then(Transcript::stdout);

        let mut sim = Simulator::new(options, seed);
        match sim.run(&mut strategy, &mut transcript) {
            Ok(tally) => print_summary(kind, &tally),
            Err(err) => {
                log::error!("{kind} simulation aborted: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_summary(kind: StrategyKind, tally: &Tally) {
    println!("{:-^36}", format!(" {kind} "));
    print!("{tally}");
    println!("{}", "-".repeat(36));
}

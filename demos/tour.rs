//! Improve a random travelling salesman tour with local search.
//!
//! ```text
//! tour --cities 30 --seed 3 --strategy all
//! ```

mod logging;

use std::process::ExitCode;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use pathfinder_core::Point;
use pathfinder_local::{
    HillClimbing, HillClimbingReset, LocalSearch, OptProblem, Report, Tabu, Tour, Tsp,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Hill,
    Reset,
    Tabu,
    All,
}

#[derive(Parser, Debug)]
#[command(name = "tour", version, about = "Local search on random TSP instances")]
struct Cli {
    /// Number of cities.
    #[arg(short, long, default_value_t = 20)]
    cities: usize,

    /// Side of the square the cities are scattered in.
    #[arg(long, default_value_t = 100)]
    side: i32,

    #[arg(short, long, value_enum, default_value_t = Strategy::All)]
    strategy: Strategy,

    /// Restarts for `reset`.
    #[arg(long, default_value_t = 100)]
    restarts: usize,

    /// Iteration budget for `tabu`.
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Tabu list length for `tabu`.
    #[arg(long, default_value_t = 40)]
    tenure: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON reports.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn solve(cli: &Cli, strategy: Strategy, tsp: &Tsp, rng: &mut StdRng) -> Report<Tour> {
    match strategy {
        Strategy::Hill => HillClimbing.solve(tsp, rng),
        Strategy::Reset => HillClimbingReset {
            restarts: cli.restarts,
        }
        .solve(tsp, rng),
        Strategy::Tabu => Tabu {
            iterations: cli.iterations,
            tenure: cli.tenure,
        }
        .solve(tsp, rng),
        // `run` expands `All` into the individual strategies.
        Strategy::All => unreachable!("solve called with Strategy::All"),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.cities == 0 || cli.side < 1 {
        bail!("need at least one city and a positive side");
    }
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("{} cities, seed {seed}", cli.cities);
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Point> = (0..cli.cities)
        .map(|_| Point::new(rng.random_range(0..cli.side), rng.random_range(0..cli.side)))
        .collect();
    let tsp = Tsp::from_points(&points)?;

    let strategies = match cli.strategy {
        Strategy::All => vec![Strategy::Hill, Strategy::Reset, Strategy::Tabu],
        s => vec![s],
    };
    let initial = tsp.obj_val(&tsp.init());
    if !cli.json {
        println!("initial tour length {:.2}", -initial);
    }
    for strategy in strategies {
        let r = solve(cli, strategy, &tsp, &mut rng);
        if cli.json {
            println!("{}", serde_json::to_string(&r)?);
        } else {
            println!(
                "{strategy:?}: length {:.2} after {} moves in {:?}\n  {:?}",
                -r.value, r.iterations, r.elapsed, r.tour
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

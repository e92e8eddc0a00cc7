//! Solve a maze with one or all of the search strategies.
//!
//! ```text
//! pathfind --maze maze.txt --algorithm astar --show-explored
//! pathfind --random 40x15 --seed 7 --max-cost 5 --algorithm all --json
//! ```
//!
//! Exits with 0 when every run found a path, 2 when some run found none and
//! 1 on errors.

mod logging;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use pathfinder_core::Cost;
use pathfinder_maze::{Maze, MazeGen, MazeGenConfig, Overlay};
use pathfinder_search::{Algorithm, Outcome, SearchAlgorithm};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde_json::json;

#[derive(Debug, Clone, Copy)]
enum Choice {
    All,
    One(Algorithm),
}

impl Choice {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Choice::All => Algorithm::ALL.to_vec(),
            Choice::One(a) => vec![a],
        }
    }
}

fn parse_choice(s: &str) -> Result<Choice, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(Choice::All);
    }
    s.parse().map(Choice::One).map_err(|e| format!("{e}"))
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let w: i32 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: i32 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    if w < 1 || h < 1 {
        return Err(format!("size must be positive, got {w}x{h}"));
    }
    Ok((w, h))
}

#[derive(Parser, Debug)]
#[command(name = "pathfind", version, about = "Find paths through weighted mazes")]
struct Cli {
    /// Strategy: dfs, bfs, ucs, gbfs, astar, or all.
    #[arg(short, long, default_value = "astar", value_parser = parse_choice)]
    algorithm: Choice,

    /// Maze file (`#` wall, `.` open, `1`-`9` cost, `A` start, `B` goal).
    #[arg(short, long, conflicts_with = "random")]
    maze: Option<PathBuf>,

    /// Generate a random maze of the given size, e.g. `30x12`.
    #[arg(short, long, value_parser = parse_size)]
    random: Option<(i32, i32)>,

    /// Seed for maze generation.
    #[arg(long, conflicts_with = "maze")]
    seed: Option<u64>,

    /// Wall probability for generated mazes.
    #[arg(long, default_value_t = 0.25, conflicts_with = "maze")]
    density: f64,

    /// Highest cell cost for generated mazes.
    #[arg(long, default_value_t = 1, conflicts_with = "maze")]
    max_cost: Cost,

    /// Mark explored cells with `o`.
    #[arg(long)]
    show_explored: bool,

    /// Print a JSON report instead of the drawing.
    #[arg(long)]
    json: bool,

    /// Log search progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn load_maze(cli: &Cli) -> anyhow::Result<Maze> {
    if let Some(path) = &cli.maze {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Maze::parse(&text).with_context(|| format!("parsing {}", path.display()));
    }

    if !(0.0..=1.0).contains(&cli.density) {
        bail!("density must be between 0 and 1, got {}", cli.density);
    }
    if cli.max_cost == 0 {
        bail!("max cost must be at least 1");
    }
    let defaults = MazeGenConfig::default();
    let (width, height) = cli.random.unwrap_or((defaults.width, defaults.height));
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating {width}x{height} maze with seed {seed}");
    let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
    Ok(mg.generate(&MazeGenConfig {
        width,
        height,
        wall_density: cli.density,
        max_cost: cli.max_cost,
        ensure_path: true,
    }))
}

fn report(algo: Algorithm, outcome: &Outcome) -> serde_json::Value {
    let stats = outcome.stats();
    json!({
        "algorithm": algo,
        "found": outcome.is_found(),
        "cost": outcome.cost(),
        "length": outcome.solution().map(|s| s.len()),
        "path": outcome.solution().map(|s| s.path()),
        "explored": outcome.explored().len(),
        "stats": stats,
    })
}

fn print_text(maze: &Maze, algo: Algorithm, outcome: &Outcome, show_explored: bool) {
    println!("== {algo} ==");
    println!("{}", maze.render(&Overlay::from_outcome(outcome, show_explored)));
    let stats = outcome.stats();
    match outcome.solution() {
        Some(sol) => println!(
            "cost {}, length {}, expanded {}, explored {}",
            sol.cost(),
            sol.len(),
            stats.expanded,
            outcome.explored().len()
        ),
        None => println!(
            "no path, expanded {}, explored {}",
            stats.expanded,
            outcome.explored().len()
        ),
    }
    println!();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let maze = load_maze(cli)?;
    let mut all_found = true;
    let mut reports = Vec::new();

    for algo in cli.algorithm.algorithms() {
        let outcome = algo.search(&maze);
        all_found &= outcome.is_found();
        if cli.json {
            reports.push(report(algo, &outcome));
        } else {
            print_text(&maze, algo, &outcome, cli.show_explored);
        }
    }

    if cli.json {
        let doc = json!({
            "maze": maze.to_string(),
            "runs": reports,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(all_found)
}

/// Process exit status: 0 when every run found a path, 2 when one did not,
/// 1 on error.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let result = run(&cli);
    if let Err(e) = &result {
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&result))
}

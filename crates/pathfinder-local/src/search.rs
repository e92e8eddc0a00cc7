//! Local search strategies.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::{Rng, RngExt};

use crate::problem::OptProblem;

/// Improvements at or below this are treated as no improvement.
const EPSILON: f64 = 1e-9;

/// Result of a local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report<S> {
    /// Best state found.
    pub tour: S,
    /// Objective value of `tour`.
    pub value: f64,
    /// Number of moves made.
    pub iterations: usize,
    pub elapsed: Duration,
}

/// A local search strategy.
pub trait LocalSearch {
    /// Optimize `problem`, breaking ties with `rng`.
    fn solve<P: OptProblem, R: Rng + ?Sized>(&self, problem: &P, rng: &mut R) -> Report<P::State>;
}

/// Pick uniformly among the actions with the largest delta.
fn choose_best<A: Copy, R: Rng + ?Sized>(diffs: &[(A, f64)], rng: &mut R) -> Option<(A, f64)> {
    let best = diffs.iter().map(|&(_, d)| d).fold(f64::NEG_INFINITY, f64::max);
    let ties: Vec<(A, f64)> = diffs.iter().filter(|&&(_, d)| d == best).copied().collect();
    if ties.is_empty() {
        return None;
    }
    Some(ties[rng.random_range(0..ties.len())])
}

/// Climb from `state` to a local optimum, counting moves in `moves`.
fn climb<P: OptProblem, R: Rng + ?Sized>(
    problem: &P,
    mut state: P::State,
    rng: &mut R,
    moves: &mut usize,
) -> (P::State, f64) {
    while let Some((act, diff)) = choose_best(&problem.val_diff(&state), rng) {
        if diff <= EPSILON {
            break;
        }
        state = problem.result(&state, act);
        *moves += 1;
    }
    let value = problem.obj_val(&state);
    (state, value)
}

/// Steepest-ascent hill climbing from the initial state.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl LocalSearch for HillClimbing {
    fn solve<P: OptProblem, R: Rng + ?Sized>(&self, problem: &P, rng: &mut R) -> Report<P::State> {
        let start = Instant::now();
        let mut iterations = 0;
        let (tour, value) = climb(problem, problem.init(), rng, &mut iterations);
        log::debug!("hill climbing: value {value:.3} after {iterations} moves");
        Report {
            tour,
            value,
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

/// Hill climbing with random restarts.
///
/// The first climb starts from the initial state, later ones from
/// [`OptProblem::random_reset`]. The best local optimum is returned.
#[derive(Debug, Clone, Copy)]
pub struct HillClimbingReset {
    /// Number of climbs, at least one is always made.
    pub restarts: usize,
}

impl Default for HillClimbingReset {
    fn default() -> Self {
        Self { restarts: 100 }
    }
}

impl LocalSearch for HillClimbingReset {
    fn solve<P: OptProblem, R: Rng + ?Sized>(&self, problem: &P, rng: &mut R) -> Report<P::State> {
        let start = Instant::now();
        let mut iterations = 0;
        let (mut tour, mut value) = climb(problem, problem.init(), rng, &mut iterations);

        for restart in 1..self.restarts {
            let from = problem.random_reset(rng);
            let (local, local_value) = climb(problem, from, rng, &mut iterations);
            log::trace!("restart {restart}: local optimum {local_value:.3}");
            if local_value > value {
                tour = local;
                value = local_value;
            }
        }

        log::debug!(
            "hill climbing with {} restarts: value {value:.3} after {iterations} moves",
            self.restarts.max(1)
        );
        Report {
            tour,
            value,
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

/// Tabu search.
///
/// Each iteration moves to the best action not applied in the last
/// `tenure` moves, even when it worsens the objective. The run stops after
/// `iterations` moves, or earlier if every action is tabu.
#[derive(Debug, Clone, Copy)]
pub struct Tabu {
    pub iterations: usize,
    pub tenure: usize,
}

impl Default for Tabu {
    fn default() -> Self {
        Self {
            iterations: 1000,
            tenure: 40,
        }
    }
}

impl LocalSearch for Tabu {
    fn solve<P: OptProblem, R: Rng + ?Sized>(&self, problem: &P, rng: &mut R) -> Report<P::State> {
        let start = Instant::now();
        let mut state = problem.init();
        let mut best = state.clone();
        let mut best_value = problem.obj_val(&state);
        let mut tabu: VecDeque<P::Action> = VecDeque::with_capacity(self.tenure + 1);
        let mut iterations = 0;

        while iterations < self.iterations {
            let allowed: Vec<_> = problem
                .val_diff(&state)
                .into_iter()
                .filter(|(act, _)| !tabu.contains(act))
                .collect();
            let Some((act, _)) = choose_best(&allowed, rng) else {
                log::debug!("tabu: every action is tabu after {iterations} moves");
                break;
            };

            state = problem.result(&state, act);
            iterations += 1;
            tabu.push_back(act);
            if tabu.len() > self.tenure {
                tabu.pop_front();
            }

            let value = problem.obj_val(&state);
            if value > best_value {
                best = state.clone();
                best_value = value;
            }
        }

        log::debug!("tabu: value {best_value:.3} after {iterations} moves");
        Report {
            tour: best,
            value: best_value,
            iterations,
            elapsed: start.elapsed(),
        }
    }
}

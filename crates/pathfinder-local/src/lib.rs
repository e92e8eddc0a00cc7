//! Local search for tour optimization.
//!
//! A problem implements [`OptProblem`]: an initial state, an objective to
//! maximize, and for any state the objective delta of every applicable
//! action. [`Tsp`] is the bundled instance, a symmetric travelling salesman
//! problem whose actions are 2-opt segment reversals.
//!
//! Three strategies implement [`LocalSearch`]:
//!
//! | Strategy              | Moves to                | Stops when                      |
//! |-----------------------|-------------------------|---------------------------------|
//! | [`HillClimbing`]      | best successor          | no successor improves           |
//! | [`HillClimbingReset`] | best successor          | `restarts` local optima reached |
//! | [`Tabu`]              | best non-tabu successor | `iterations` moves made         |
//!
//! Ties between equally good actions are broken at random with the caller's
//! RNG, so a seeded RNG gives reproducible runs.

mod problem;
mod search;
mod tsp;

pub use problem::OptProblem;
pub use search::{HillClimbing, HillClimbingReset, LocalSearch, Report, Tabu};
pub use tsp::{Tour, Tsp, TspError, TwoOpt};

use rand::Rng;

/// An optimization problem explored by local search.
///
/// The objective is maximized. [`val_diff`](Self::val_diff) must list
/// actions in a deterministic order so that seeded runs are reproducible.
pub trait OptProblem {
    type State: Clone;
    type Action: Copy + Eq;

    /// The state the search starts from.
    fn init(&self) -> Self::State;

    /// Objective value of `state`.
    fn obj_val(&self, state: &Self::State) -> f64;

    /// Every action applicable in `state`, with the change in objective
    /// value that applying it would produce.
    fn val_diff(&self, state: &Self::State) -> Vec<(Self::Action, f64)>;

    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// A uniformly random state, used to restart a search.
    fn random_reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;
}

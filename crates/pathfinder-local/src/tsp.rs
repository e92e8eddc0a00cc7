//! Symmetric travelling salesman problem with 2-opt moves.

use std::fmt;

use pathfinder_core::Point;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::problem::OptProblem;

/// A closed tour, as the order in which cities are visited. The first city
/// is always 0.
pub type Tour = Vec<usize>;

/// Reverse the tour segment `i..=j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOpt {
    pub i: usize,
    pub j: usize,
}

impl fmt::Display for TwoOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Travelling salesman instance over a symmetric distance matrix.
///
/// The objective is the negated length of the closed tour, so shorter tours
/// score higher.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tsp {
    n: usize,
    dist: Vec<f64>,
}

impl Tsp {
    /// Build an instance from a full distance matrix.
    ///
    /// The matrix must be square, symmetric, with finite non-negative
    /// entries.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(TspError::NotSquare {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
        }
        for i in 0..n {
            for j in 0..n {
                let d = rows[i][j];
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::InvalidDistance { i, j, value: d });
                }
                if (d - rows[j][i]).abs() > 1e-9 {
                    return Err(TspError::Asymmetric { i, j });
                }
            }
        }
        Ok(Self {
            n,
            dist: rows.into_iter().flatten().collect(),
        })
    }

    /// Build an instance with Euclidean distances between `points`.
    pub fn from_points(points: &[Point]) -> Result<Self, TspError> {
        let rows = points
            .iter()
            .map(|a| {
                points
                    .iter()
                    .map(|b| f64::from(a.x - b.x).hypot(f64::from(a.y - b.y)))
                    .collect()
            })
            .collect();
        Self::from_matrix(rows)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.dist[a * self.n + b]
    }

    /// Length of the closed tour, including the edge back to the first city.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        tour.iter()
            .zip(tour.iter().cycle().skip(1))
            .map(|(&a, &b)| self.distance(a, b))
            .sum()
    }
}

impl OptProblem for Tsp {
    type State = Tour;
    type Action = TwoOpt;

    fn init(&self) -> Tour {
        (0..self.n).collect()
    }

    fn obj_val(&self, tour: &Tour) -> f64 {
        -self.tour_length(tour)
    }

    fn val_diff(&self, tour: &Tour) -> Vec<(TwoOpt, f64)> {
        let n = tour.len();
        if n < 3 {
            return Vec::new();
        }
        let mut diffs = Vec::with_capacity((n - 1) * (n - 2) / 2);
        for i in 1..n - 1 {
            for j in i + 1..n {
                let (a, b) = (tour[i - 1], tour[i]);
                let (c, d) = (tour[j], tour[(j + 1) % n]);
                let removed = self.distance(a, b) + self.distance(c, d);
                let added = self.distance(a, c) + self.distance(b, d);
                diffs.push((TwoOpt { i, j }, removed - added));
            }
        }
        diffs
    }

    fn result(&self, tour: &Tour, action: TwoOpt) -> Tour {
        let mut next = tour.clone();
        next[action.i..=action.j].reverse();
        next
    }

    fn random_reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
        let mut tour = self.init();
        if tour.len() > 1 {
            tour[1..].shuffle(rng);
        }
        tour
    }
}

/// Error returned when building a [`Tsp`].
#[derive(Debug, Clone, PartialEq)]
pub enum TspError {
    /// No cities.
    Empty,
    /// A matrix row has the wrong number of entries.
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A distance is negative or not finite.
    InvalidDistance { i: usize, j: usize, value: f64 },
    /// `d(i, j) != d(j, i)`.
    Asymmetric { i: usize, j: usize },
}

impl fmt::Display for TspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TspError::Empty => write!(f, "tsp: no cities"),
            TspError::NotSquare { row, len, expected } => write!(
                f,
                "tsp: row {row} has {len} entries, expected {expected}"
            ),
            TspError::InvalidDistance { i, j, value } => {
                write!(f, "tsp: invalid distance {value} between {i} and {j}")
            }
            TspError::Asymmetric { i, j } => {
                write!(f, "tsp: distance matrix is not symmetric at ({i}, {j})")
            }
        }
    }
}

impl std::error::Error for TspError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn square() -> Tsp {
        let pts = [(0, 0), (2, 2), (2, 0), (0, 2)].map(Point::from);
        Tsp::from_points(&pts).unwrap()
    }

    #[test]
    fn tour_length_closes_the_loop() {
        let tsp = square();
        assert!((tsp.tour_length(&[0, 2, 1, 3]) - 8.0).abs() < 1e-9);
        let diag = 2.0 * 8f64.sqrt() + 4.0;
        assert!((tsp.tour_length(&tsp.init()) - diag).abs() < 1e-9);
        assert_eq!(tsp.tour_length(&[0]), 0.0);
    }

    #[test]
    fn val_diff_matches_result() {
        let tsp = square();
        let tour = tsp.init();
        let base = tsp.obj_val(&tour);
        let diffs = tsp.val_diff(&tour);
        assert_eq!(diffs.len(), 3);
        for (act, diff) in diffs {
            let next = tsp.result(&tour, act);
            assert!((tsp.obj_val(&next) - base - diff).abs() < 1e-9, "{act}");
        }
    }

    #[test]
    fn reversal_keeps_first_city() {
        let tsp = square();
        let next = tsp.result(&tsp.init(), TwoOpt { i: 1, j: 3 });
        assert_eq!(next, vec![0, 3, 2, 1]);
    }

    #[test]
    fn random_reset_is_a_permutation() {
        let pts: Vec<Point> = (0..10).map(|i| Point::new(i, i * i % 7)).collect();
        let tsp = Tsp::from_points(&pts).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut tour = tsp.random_reset(&mut rng);
        assert_eq!(tour[0], 0);
        tour.sort_unstable();
        assert_eq!(tour, tsp.init());
    }

    #[test]
    fn small_instances_have_no_moves() {
        let tsp = Tsp::from_matrix(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(tsp.val_diff(&tsp.init()).is_empty());
    }

    #[test]
    fn rejects_bad_matrices() {
        assert_eq!(Tsp::from_matrix(vec![]), Err(TspError::Empty));
        assert_eq!(
            Tsp::from_matrix(vec![vec![0.0, 1.0], vec![1.0]]),
            Err(TspError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Tsp::from_matrix(vec![vec![0.0, 1.0], vec![2.0, 0.0]]),
            Err(TspError::Asymmetric { i: 0, j: 1 })
        );
        assert!(matches!(
            Tsp::from_matrix(vec![vec![-1.0]]),
            Err(TspError::InvalidDistance { i: 0, j: 0, .. })
        ));
    }
}

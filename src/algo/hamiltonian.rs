use itertools::Itertools;
use tracing::{debug, warn};

use super::*;
use crate::utils::{CancellationToken, Permutations};

/// Exhaustive search for a Hamiltonian trail.
///
/// Candidates are the permutations of all nodes in the order of [`Permutations`]; the first
/// one forming a trajectory wins. For [`TrailKind::Cycle`] the first node is appended to every
/// candidate before checking. The search takes `O(n * n!)` in the worst case, so it can be
/// bounded by a candidate budget and a [`CancellationToken`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let square = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)], false);
///
/// let cycle = HamiltonianSearch::new(TrailKind::Cycle)
///     .max_candidates(100)
///     .run(&square)
///     .unwrap();
/// assert_eq!(cycle, Some(vec![0, 1, 2, 3, 0]));
///
/// let star = Graph::from_edges([(0, 1), (0, 2), (0, 3)], false);
/// let starved = HamiltonianSearch::new(TrailKind::Path).max_candidates(10).run(&star);
/// assert!(matches!(starved, Err(GraphError::BudgetExhausted { candidates: 10 })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HamiltonianSearch {
    kind: TrailKind,
    max_candidates: Option<u64>,
    cancellation: Option<CancellationToken>,
}

impl HamiltonianSearch {
    /// Creates an unbounded search for a trail of the given kind
    pub fn new(kind: TrailKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Limits the number of permutations checked
    pub fn set_max_candidates(&mut self, max_candidates: u64) {
        self.max_candidates = Some(max_candidates);
    }

    /// Limits the number of permutations checked
    pub fn max_candidates(mut self, max_candidates: u64) -> Self {
        self.set_max_candidates(max_candidates);
        self
    }

    /// Stops the search once the token is cancelled
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancellation = Some(token);
    }

    /// Stops the search once the token is cancelled
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.set_cancellation(token);
        self
    }

    /// Runs the search.
    ///
    /// Returns `Ok(None)` if every permutation was checked and none is a trail of the
    /// requested kind.
    ///
    /// # Errors
    /// - [`GraphError::Cancelled`] if the token was cancelled before a trail was found,
    /// - [`GraphError::BudgetExhausted`] if the candidate budget was spent.
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Result<Option<Vec<Node>>, GraphError> {
        let mut candidates: u64 = 0;

        for mut candidate in Permutations::new(graph.vertices().collect_vec()) {
            if self
                .cancellation
                .as_ref()
                .is_some_and(CancellationToken::is_cancelled)
            {
                warn!(candidates, "hamiltonian search cancelled");
                return Err(GraphError::Cancelled { candidates });
            }

            if self.max_candidates.is_some_and(|max| candidates >= max) {
                warn!(candidates, "hamiltonian search budget exhausted");
                return Err(GraphError::BudgetExhausted { candidates });
            }
            candidates += 1;

            if self.kind == TrailKind::Cycle {
                if let Some(&first) = candidate.first() {
                    candidate.push(first);
                }
            }

            if graph.is_trajectory(&candidate) {
                debug!(kind = ?self.kind, candidates, "hamiltonian trail found");
                return Ok(Some(candidate));
            }
        }

        debug!(kind = ?self.kind, candidates, "no hamiltonian trail");
        Ok(None)
    }
}

pub trait Hamiltonian: AdjacencyList + Sized {
    /// Returns the first Hamiltonian trail of the given kind, searching without bounds.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let path = Graph::from_edges([(2, 0), (0, 1)], true);
    /// assert_eq!(path.hamiltonian_trail(TrailKind::Path), Some(vec![2, 0, 1]));
    /// assert_eq!(path.hamiltonian_trail(TrailKind::Cycle), None);
    /// ```
    fn hamiltonian_trail(&self, kind: TrailKind) -> Option<Vec<Node>> {
        HamiltonianSearch::new(kind).run(self).ok().flatten()
    }

    /// Returns [`TrailKind::Path`] if the graph has a Hamiltonian path, else [`TrailKind::Cycle`]
    /// if it has a Hamiltonian cycle, else `None`.
    fn is_hamiltonian(&self) -> Option<TrailKind> {
        [TrailKind::Path, TrailKind::Cycle]
            .into_iter()
            .find(|&kind| self.hamiltonian_trail(kind).is_some())
    }
}

impl<G: AdjacencyList + Sized> Hamiltonian for G {}

/*!
# Utilities

Provides the helper structures the algorithms are built on:
- [`DisjointSet`]: union-find with path splitting and union by rank (used by Kruskal),
- [`Permutations`]: a lazy, resettable permutation generator (used by the Hamiltonian search),
- [`Matrix`]: a small dense square matrix for path-count matrices,
- [`CancellationToken`]: cooperative cancellation for long searches.

You probably only need to interact with [`CancellationToken`] directly.
*/

pub mod cancel;
pub mod disjoint_set;
pub mod matrix;
pub mod permutations;

pub use cancel::CancellationToken;
pub use disjoint_set::DisjointSet;
pub use matrix::Matrix;
pub use permutations::Permutations;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probility(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}

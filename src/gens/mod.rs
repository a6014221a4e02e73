/*!
# Graph Generators

Builders for random weighted graphs and helpers to add deterministic substructures to an
existing graph. They are mostly used to produce test instances.

The typical workflow is:

1. Create a generator instance (e.g. `WeightedGnp::new()`).
2. Set parameters using the builder methods (e.g. `.nodes(n).prob(p).weights(1.0..10.0)`).
3. Generate a [`Graph`] via `generate()` or a lazy stream of edges via `stream()`.

All randomness is drawn from a caller-provided [`Rng`], so seeded generators yield reproducible
graphs.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Generates a graph containing the streamed edges.
    fn generate<R>(&self, rng: &mut R) -> Graph
    where
        R: Rng;
}

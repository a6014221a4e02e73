use std::ops::Range;

use rand_distr::{Distribution, Geometric};

use crate::{gens::*, utils::*};

/// `G(n,p)` generator for weighted graphs: every possible edge of a graph with nodes `0..n` is
/// present with probability `p`, independent from each other.
///
/// Present edges are unweighted unless a weight range is set, in which case each weight is drawn
/// uniformly from it. Undirected graphs contain each unordered pair at most once, directed
/// graphs each ordered pair. Self-loops are only generated if enabled.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
/// use wgraphs::{prelude::*, gens::*};
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(3);
/// let graph = WeightedGnp::new()
///     .nodes(10)
///     .prob(0.3)
///     .weights(1.0..5.0)
///     .generate(rng);
///
/// assert_eq!(graph.number_of_nodes(), 10);
/// assert!(graph.edges().all(|e| e.from < e.to && (1.0..5.0).contains(&e.weight.unwrap())));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    p: f64,
    weights: Option<Range<Weight>>,
    directed: bool,
    loops: bool,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.5,
            weights: None,
            directed: false,
            loops: false,
        }
    }
}

impl WeightedGnp {
    /// Creates a new generator for undirected, unweighted `G(n, 1/2)` graphs without loops
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p`
    ///
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "invalid probability {prob}");
        self.p = prob;
        self
    }

    /// Draws edge weights uniformly from `range`
    ///
    /// ** Panics if `range` is empty **
    pub fn weights(mut self, range: Range<Weight>) -> Self {
        assert!(range.start < range.end, "empty weight range {range:?}");
        self.weights = Some(range);
        self
    }

    /// Generates unweighted edges
    pub fn unweighted(mut self) -> Self {
        self.weights = None;
        self
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Allows self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    fn accepts(&self, u: Node, v: Node) -> bool {
        (self.loops || u != v) && (self.directed || u <= v)
    }
}

impl NumNodesGen for WeightedGnp {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for WeightedGnp {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n as u64;
        let max_value = n * n;

        // number of skipped candidates before the next present edge
        let jumps = Geometric::new(self.p).ok().filter(|_| self.p > 0.0);
        let mut next = 0u64;

        std::iter::from_fn(move || {
            let jumps = jumps.as_ref()?;
            loop {
                next = next.checked_add(jumps.sample(&mut *rng))?;
                if next >= max_value {
                    return None;
                }

                let (u, v) = ((next / n) as Node, (next % n) as Node);
                next += 1;

                if self.accepts(u, v) {
                    let weight = self.weights.clone().map(|range| rng.random_range(range));
                    return Some(Edge::new(u, v, weight));
                }
            }
        })
    }

    /// Generates a graph on the nodes `0..n`, isolated nodes included
    fn generate<R: Rng>(&self, rng: &mut R) -> Graph {
        let mut graph = Graph::from_adjacency((0..self.n).map(|u| (u, Vec::new())), self.directed);
        graph.add_edges(self.stream(rng));
        graph
    }
}

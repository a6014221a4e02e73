/*!
# Maximum Flow

Edmonds–Karp on a dense residual capacity matrix seeded from the numeric adjacency matrix of
the graph, so edge weights act as capacities and unweighted edges carry capacity `1`.

Augmenting paths are found by a breadth-first search over the neighbors of each node in
*both* directions, following only arcs with positive residual capacity (a `NaN` capacity
counts as none). The search stops as soon
as the sink is discovered. [`EdmondsKarp`] yields the augmenting paths one at a time;
[`MaxFlow::max_flow`] sums their bottlenecks.
*/

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::*;
use crate::utils::Matrix;

/// A source-sink path in the residual network together with the flow pushed along it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentingPath {
    pub path: Vec<Node>,
    pub flow: Weight,
}

/// Iterator over the augmenting paths found by the Edmonds–Karp algorithm.
/// Every call to `next` augments the residual network along the returned path.
pub struct EdmondsKarp<'a, G> {
    graph: &'a G,
    residual: Matrix,
    source: Node,
    sink: Node,
    predecessor: Vec<Option<OptionalNode>>,
    discovered: Vec<bool>,
}

impl<'a, G> WithGraphRef<G> for EdmondsKarp<'a, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G: AdjacencyList + Sized> EdmondsKarp<'a, G> {
    /// Creates a new solver on the residual network of `graph`.
    /// The residual matrix has order [`GraphNodeOrder::node_bound`].
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if `source` or `sink` is not a node of the graph.
    pub fn new(graph: &'a G, source: Node, sink: Node) -> Result<Self, GraphError> {
        for u in [source, sink] {
            if !graph.has_vertex(u) {
                return Err(GraphError::UnknownNode(u));
            }
        }

        let residual = graph.numeric_adjacency_matrix();
        let n = residual.order();
        Ok(Self {
            graph,
            residual,
            source,
            sink,
            predecessor: vec![None; n],
            discovered: vec![false; n],
        })
    }

    /// Remaining residual capacity of the arc `u -> v`
    pub fn residual_capacity(&self, u: Node, v: Node) -> Weight {
        self.residual[(u as usize, v as usize)]
    }

    /// Runs a BFS from the source and returns the bottleneck of the path to the sink, if any.
    /// Afterwards `self.predecessor` encodes the path.
    fn bfs(&mut self) -> Option<Weight> {
        self.predecessor.fill(None);
        self.discovered.fill(false);
        self.discovered[self.source as usize] = true;

        let mut queue = VecDeque::from([(self.source, Weight::INFINITY)]);
        while let Some((u, flow)) = queue.pop_front() {
            for Adjacent { node: v, .. } in self.graph.neighbors_of(u, Direction::Both) {
                let capacity = self.residual_capacity(u, v);
                if self.discovered[v as usize] || capacity.is_nan() || capacity <= 0.0 {
                    continue;
                }

                self.discovered[v as usize] = true;
                self.predecessor[v as usize] = OptionalNode::new(u);

                let bottleneck = flow.min(capacity);
                if v == self.sink {
                    return Some(bottleneck);
                }
                queue.push_back((v, bottleneck));
            }
        }

        None
    }
}

impl<'a, G: AdjacencyList + Sized> Iterator for EdmondsKarp<'a, G> {
    type Item = AugmentingPath;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source == self.sink {
            return None;
        }

        let flow = self.bfs()?;

        let mut path = vec![self.sink];
        let mut v = self.sink;
        while let Some(u) = self.predecessor[v as usize].map(|p| p.get()) {
            self.residual[(v as usize, u as usize)] += flow;
            self.residual[(u as usize, v as usize)] -= flow;
            path.push(u);
            v = u;
        }
        path.reverse();

        trace!(?path, flow, "augmenting path");
        Some(AugmentingPath { path, flow })
    }
}

pub trait MaxFlow: AdjacencyList + Sized {
    /// Returns an iterator over the augmenting paths from `source` to `sink`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] if `source` or `sink` is not a node of the graph.
    fn edmonds_karp(&self, source: Node, sink: Node) -> Result<EdmondsKarp<'_, Self>, GraphError> {
        EdmondsKarp::new(self, source, sink)
    }

    /// Computes the value of a maximum flow from `source` to `sink`, interpreting edge weights
    /// as capacities. Undirected edges can be used in both directions. The flow from a node
    /// to itself is `0`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let network = Graph::from_edges(
    ///     [(0, 1, 10.0), (0, 2, 10.0), (1, 2, 2.0), (1, 3, 4.0), (2, 3, 9.0)],
    ///     true,
    /// );
    /// assert_eq!(network.max_flow(0, 3).unwrap(), 13.0);
    /// assert_eq!(network.max_flow(3, 0).unwrap(), 0.0);
    /// ```
    fn max_flow(&self, source: Node, sink: Node) -> Result<Weight, GraphError> {
        let (flow, paths) = self
            .edmonds_karp(source, sink)?
            .fold((0.0, 0usize), |(flow, paths), p| (flow + p.flow, paths + 1));

        debug!(source, sink, flow, paths, "max flow");
        Ok(flow)
    }
}

impl<G: AdjacencyList + Sized> MaxFlow for G {}

use itertools::Itertools;
use tracing::debug;

use super::*;
use crate::utils::DisjointSet;

/// Edges of a minimum spanning forest and their total weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub tree: Vec<Edge>,
    /// Sum of the tree edges' weights, unweighted edges counting as [`DEFAULT_WEIGHT`]
    pub distance: Weight,
}

pub trait MinimumSpanningTree: AdjacencyList + Sized {
    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Edges are considered in ascending order of weight, ties keeping the order of
    /// [`AdjacencyList::edges`]. Edge orientation is ignored. For a connected graph the tree has
    /// `n - 1` edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1, 4.0), (1, 2, 1.0), (0, 2, 2.0)], false);
    /// let mst = g.minimum_spanning_tree();
    ///
    /// assert_eq!(mst.tree, vec![Edge::weighted(1, 2, 1.0), Edge::weighted(0, 2, 2.0)]);
    /// assert_eq!(mst.distance, 3.0);
    /// ```
    fn minimum_spanning_tree(&self) -> SpanningTree {
        let mut sets = DisjointSet::with_capacity(self.len());
        for u in self.vertices() {
            sets.create(u);
        }

        let edges = self
            .edges()
            .sorted_by(|a, b| a.weight_or_default().total_cmp(&b.weight_or_default()));

        let tree = edges
            .filter(|edge| sets.union(edge.from, edge.to))
            .collect_vec();
        let distance: Weight = tree.iter().map(Edge::weight_or_default).sum();

        debug!(edges = tree.len(), distance, "minimum spanning tree");
        SpanningTree { tree, distance }
    }
}

impl<G: AdjacencyList + Sized> MinimumSpanningTree for G {}

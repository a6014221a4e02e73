use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Result of a successful shortest path query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Nodes from source to target, both included
    pub path: Vec<Node>,
    /// Sum of the edge weights along `path`, unweighted edges counting as [`DEFAULT_WEIGHT`]
    pub distance: Weight,
}

pub trait ShortestPaths: AdjacencyList + Sized {
    /// Computes a shortest path `from -> to` along outgoing edges with Dijkstra's algorithm.
    ///
    /// The next node is picked by a linear scan over all unvisited nodes (`O(n^2)` overall), ties
    /// going to the smaller id. The search stops as soon as `to` is settled. Memory is linear in
    /// the number of nodes, independent of their ids.
    ///
    /// Returns `Ok(None)` if `to` is unreachable.
    ///
    /// # Errors
    /// - [`GraphError::UnknownNode`] if `from` or `to` is not a node of the graph,
    /// - [`GraphError::NegativeWeight`] if any edge carries a negative weight.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1, 2.0), (0, 2, 6.0), (1, 2, 3.0)], true);
    /// let sp = g.shortest_path(0, 2).unwrap().unwrap();
    ///
    /// assert_eq!(sp.path, vec![0, 1, 2]);
    /// assert_eq!(sp.distance, 5.0);
    /// assert_eq!(g.shortest_path(2, 0).unwrap(), None);
    /// ```
    fn shortest_path(&self, from: Node, to: Node) -> Result<Option<ShortestPath>, GraphError> {
        for u in [from, to] {
            if !self.has_vertex(u) {
                return Err(GraphError::UnknownNode(u));
            }
        }

        if let Some(edge) = self.edges().find(|e| e.weight.is_some_and(|w| w < 0.0)) {
            return Err(GraphError::NegativeWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight_or_default(),
            });
        }

        let mut distance: FxHashMap<Node, Weight> = FxHashMap::default();
        let mut predecessor: FxHashMap<Node, Node> = FxHashMap::default();
        let dist = |distance: &FxHashMap<Node, Weight>, u: Node| {
            distance.get(&u).copied().unwrap_or(Weight::INFINITY)
        };

        let mut unvisited = self.vertices().collect_vec();
        distance.insert(from, 0.0);

        loop {
            let Some(idx) = unvisited
                .iter()
                .position_min_by(|&&a, &&b| dist(&distance, a).total_cmp(&dist(&distance, b)))
            else {
                break;
            };

            let u = unvisited.remove(idx);
            let du = dist(&distance, u);
            if u == to || du.is_infinite() {
                break;
            }

            for Adjacent { node: v, weight } in self.neighbors_of(u, Direction::Out) {
                let alt = du + weight.unwrap_or(DEFAULT_WEIGHT);
                if alt < dist(&distance, v) {
                    trace!(u, v, alt, "relax");
                    distance.insert(v, alt);
                    predecessor.insert(v, u);
                }
            }
        }

        let total = dist(&distance, to);
        if total.is_infinite() {
            debug!(from, to, "no path");
            return Ok(None);
        }

        let mut path = vec![to];
        let mut v = to;
        while let Some(&p) = predecessor.get(&v) {
            v = p;
            path.push(v);
        }
        path.reverse();

        debug!(from, to, distance = total, hops = path.len() - 1, "shortest path");
        Ok(Some(ShortestPath {
            path,
            distance: total,
        }))
    }
}

impl<G: AdjacencyList + Sized> ShortestPaths for G {}

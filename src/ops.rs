use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{edge::*, node::*};

/// Side of an edge as seen from a node.
///
/// In undirected graphs `Out` and `In` coincide with `Both`, since an undirected
/// edge is stored only once but must be visible from both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edges leaving the node, i.e. its stored adjacency list
    #[default]
    Out,
    /// Edges entering the node, found by scanning all other adjacency lists
    In,
    /// Union of both sides
    Both,
}

/// Provides the directedness of a graph
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if edges have no orientation
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the sorted and deduplicated node ids of the graph.
    ///
    /// Nodes are not declared up front: every id that appears as a key of the
    /// adjacency or as a neighbor is a node.
    fn vertices(&self) -> impl Iterator<Item = Node>;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices().count() as NumNodes
    }

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `max(node) + 1`, the size of arrays indexed directly by node id.
    /// Equals [`GraphNodeOrder::len`] iff the ids are exactly `0..n`.
    fn node_bound(&self) -> usize {
        self.vertices().last().map_or(0, |u| u as usize + 1)
    }

    /// Returns *true* if `u` is a node of the graph
    fn has_vertex(&self, u: Node) -> bool {
        self.vertices().any(|v| v == u)
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// Only the stored adjacency is required; the `In` and `Both` sides are derived on demand by
/// scanning every other node's adjacency, which costs `O(E)` per call.
pub trait AdjacencyList: GraphNodeOrder + GraphType {
    /// Returns the stored adjacency list of `u` (empty if `u` has none)
    fn stored_adjacency_of(&self, u: Node) -> &[Adjacent];

    /// Returns an iterator over all stored adjacency lists in ascending order of their key
    fn stored_adjacencies(&self) -> impl Iterator<Item = (Node, &[Adjacent])> + '_;

    /// Returns all adjacents `(v, w)` such that an edge `v -> u` with weight `w` is stored at `v != u`.
    /// Self-loops are not reported.
    fn in_adjacents_of(&self, u: Node) -> Vec<Adjacent> {
        self.stored_adjacencies()
            .filter(|&(v, _)| v != u)
            .flat_map(|(v, adjacents)| {
                adjacents
                    .iter()
                    .filter(move |a| a.node == u)
                    .map(move |a| Adjacent::new(v, a.weight))
            })
            .collect()
    }

    /// Returns the neighborhood of `u` in the given direction.
    ///
    /// Undirected graphs (or `Direction::Both`) return the union of both sides deduplicated by
    /// neighbor id, stored side first. Directed graphs with `Out`/`In` return exactly that side.
    fn neighbors_of(&self, u: Node, direction: Direction) -> Vec<Adjacent> {
        if self.is_undirected() || direction == Direction::Both {
            return self
                .stored_adjacency_of(u)
                .iter()
                .copied()
                .chain(self.in_adjacents_of(u))
                .unique_by(|a| a.node)
                .collect();
        }

        match direction {
            Direction::Out => self.stored_adjacency_of(u).to_vec(),
            _ => self.in_adjacents_of(u),
        }
    }

    /// Returns the degree of `u`.
    ///
    /// For directed graphs and `Direction::Both` this is `out-degree + in-degree`;
    /// otherwise it is the size of [`AdjacencyList::neighbors_of`].
    /// This is a neighbor count: unlike the degrees behind `is_eulerian`, a self-loop counts once.
    fn degree_of(&self, u: Node, direction: Direction) -> NumNodes {
        if self.is_directed() && direction == Direction::Both {
            return self.degree_of(u, Direction::Out) + self.degree_of(u, Direction::In);
        }

        self.neighbors_of(u, direction).len() as NumNodes
    }

    /// Returns an iterator over all stored edges
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.stored_adjacencies().flat_map(|(u, adjacents)| {
            adjacents.iter().map(move |a| Edge::from_adjacent(u, a))
        })
    }

    /// Returns *true* if any stored edge is weighted
    fn is_weighted(&self) -> bool {
        self.stored_adjacencies()
            .any(|(_, adjacents)| adjacents.iter().any(Adjacent::is_weighted))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if `to` is in the neighborhood of `from` in the given direction.
    fn has_edge(&self, from: Node, to: Node, direction: Direction) -> bool {
        let stored_at = |u: Node, v: Node| self.stored_adjacency_of(u).iter().any(|a| a.node == v);
        // the derived side never reports self-loops
        let entering = |u: Node, v: Node| u != v && stored_at(v, u);

        match direction {
            _ if self.is_undirected() || direction == Direction::Both => {
                stored_at(from, to) || entering(from, to)
            }
            Direction::Out => stored_at(from, to),
            _ => entering(from, to),
        }
    }

    /// Returns the edge between `from` and `to` if it exists.
    ///
    /// For `Direction::In` the returned edge is oriented `to -> from`.
    fn edge(&self, from: Node, to: Node, direction: Direction) -> Option<Edge> {
        let adjacent = self
            .neighbors_of(from, direction)
            .into_iter()
            .find(|a| a.node == to)?;

        Some(if direction == Direction::In {
            Edge::new(to, from, adjacent.weight)
        } else {
            Edge::new(from, to, adjacent.weight)
        })
    }

    /// Returns *true* if every consecutive pair of `trajectory` is connected by an outgoing edge.
    /// Empty and single-node sequences are trivially valid.
    fn is_trajectory(&self, trajectory: &[Node]) -> bool {
        trajectory
            .iter()
            .tuple_windows()
            .all(|(&u, &v)| self.has_edge(u, v, Direction::Out))
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphType {
    /// Adds the edge to the graph. Parallel edges are not detected.
    fn add_edge(&mut self, edge: impl Into<Edge>);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Removes the edge between `from` and `to` as seen in the given direction.
    /// Returns *true* if an edge was removed.
    fn try_remove_edge(&mut self, from: Node, to: Node, direction: Direction) -> bool;
}

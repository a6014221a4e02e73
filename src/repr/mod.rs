/*!
# Graph Representation

A [`Graph`] is an ordered adjacency mapping from node id to a list of [`Adjacent`]s plus a
directedness flag. It can be built from four formats:

- an adjacency mapping ([`Graph::from_adjacency`]),
- an edge list ([`Graph::from_edges`]),
- a string-typed link list ([`Graph::try_from_links`]),
- an adjacency matrix of [`Cell`]s ([`Graph::from_adjacency_matrix`]).

### Undirected storage

An undirected edge `{u, v}` is stored exactly once, always in the adjacency of `min(u, v)`.
The other endpoint derives it on demand via
[`AdjacencyList::neighbors_of`](crate::ops::AdjacencyList::neighbors_of).
Every constructor enforces this; keys without neighbors are retained so that isolated nodes
can be declared.

### Matrices

The matrix form only represents *simple* graphs: building a graph from its own adjacency matrix
collapses parallel edges. Matrices are indexed by node id and have order
[`node_bound`](crate::ops::GraphNodeOrder::node_bound).
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{edge::*, error::Result, node::*, ops::*};

mod cell;

pub use cell::*;

/// Weighted (un)directed graph stored as an ordered adjacency mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: BTreeMap<Node, Vec<Adjacent>>,
    directed: bool,
}

impl Graph {
    /// Creates an empty graph
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
        }
    }

    /// Builds a graph from an adjacency mapping.
    ///
    /// Keys with empty lists become isolated nodes.
    /// Undirected edges stored under the larger endpoint are moved to the smaller one.
    ///
    /// # Example
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let graph = Graph::from_adjacency(
    ///     [
    ///         (0, vec![Adjacent::weighted(1, 2.0), Adjacent::weighted(2, 6.0)]),
    ///         (1, vec![Adjacent::weighted(2, 3.0)]),
    ///         (2, vec![Adjacent::weighted(0, 4.0)]),
    ///     ],
    ///     true,
    /// );
    ///
    /// assert_eq!(graph.number_of_nodes(), 3);
    /// assert!(graph.has_edge(2, 0, Direction::Out));
    /// assert!(!graph.has_edge(0, 2, Direction::In));
    /// ```
    pub fn from_adjacency<I>(adjacency: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (Node, Vec<Adjacent>)>,
    {
        let mut graph = Self::new(directed);
        for (u, adjacents) in adjacency {
            graph.adjacency.entry(u).or_default();
            for adjacent in adjacents {
                graph.add_edge(Edge::from_adjacent(u, &adjacent));
            }
        }
        graph
    }

    /// Builds a graph from a list of edges, grouped by their `from` endpoint
    /// in order of appearance.
    pub fn from_edges<I>(edges: I, directed: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new(directed);
        graph.add_edges(edges);
        graph
    }

    /// Builds a graph from string-typed links.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidLink`](crate::error::GraphError::InvalidLink) for the first
    /// link whose fields cannot be parsed.
    ///
    /// # Example
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let links = [Link::new(0, 1, Some(4.0)), Link::new(1, 2, None)];
    /// let graph = Graph::try_from_links(&links, false).unwrap();
    ///
    /// assert_eq!(graph.edge(1, 0, Direction::Out), Some(Edge::weighted(1, 0, 4.0)));
    /// ```
    pub fn try_from_links<'a, I>(links: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Link>,
    {
        let edges = links
            .into_iter()
            .map(Edge::try_from_link)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_edges(edges, directed))
    }

    /// Builds a graph from an adjacency matrix.
    ///
    /// Cell `[i][j]` is an edge `i -> j` unless it is [`Cell::Disconnected`]. For undirected
    /// graphs the mirrored cell `[j][i]` is skipped, so a symmetric matrix yields each edge once.
    /// Rows without any edge do not create a key.
    ///
    /// # Example
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let (o, x) = (Cell::Disconnected, Cell::Connected);
    /// let graph = Graph::from_adjacency_matrix(&[vec![o, x, x], vec![x, o, x], vec![x, x, o]], false);
    ///
    /// assert_eq!(graph.number_of_edges(), 3);
    /// ```
    pub fn from_adjacency_matrix<R>(matrix: &[R], directed: bool) -> Self
    where
        R: AsRef<[Cell]>,
    {
        let mut graph = Self::new(directed);
        for (i, row) in matrix.iter().enumerate() {
            for (j, cell) in row.as_ref().iter().enumerate() {
                if !cell.is_connected() || (!directed && j < i && is_mirrored(matrix, i, j)) {
                    continue;
                }
                graph.add_edge(Edge::new(i as Node, j as Node, cell.weight()));
            }
        }
        graph
    }

    /// Returns the adjacency matrix of the graph.
    ///
    /// Cells hold the edge weight, or [`Cell::Connected`] for unweighted edges.
    /// Undirected graphs produce a symmetric matrix.
    ///
    /// The matrix has order [`GraphNodeOrder::node_bound`], so its memory is quadratic in the
    /// largest node id rather than in the number of nodes.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.node_bound();
        let mut matrix = vec![vec![Cell::Disconnected; n]; n];

        for edge in self.edges() {
            let (i, j) = (edge.from as usize, edge.to as usize);
            let cell = Cell::from_weight(edge.weight);
            matrix[i][j] = cell;
            if self.is_undirected() {
                matrix[j][i] = cell;
            }
        }

        matrix
    }

    /// Returns all stored edges
    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges().collect()
    }

    /// Returns the sorted, deduplicated node ids
    pub fn nodes(&self) -> Vec<Node> {
        self.vertices().collect()
    }

    /// Returns the number of nodes
    pub fn count(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Returns the stored adjacency mapping
    pub fn adjacency(&self) -> &BTreeMap<Node, Vec<Adjacent>> {
        &self.adjacency
    }

    /// Removes the first entry `to` from the stored list of `from`
    fn remove_stored(&mut self, from: Node, to: Node) -> bool {
        let Some(adjacents) = self.adjacency.get_mut(&from) else {
            return false;
        };
        match adjacents.iter().position(|a| a.node == to) {
            Some(pos) => {
                adjacents.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// In undirected matrices, `[i][j]` with `j < i` mirrors `[j][i]` which was visited before
fn is_mirrored<R: AsRef<[Cell]>>(matrix: &[R], i: usize, j: usize) -> bool {
    matrix[j]
        .as_ref()
        .get(i)
        .is_some_and(|cell| cell.is_connected())
}

impl GraphType for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl GraphNodeOrder for Graph {
    fn vertices(&self) -> impl Iterator<Item = Node> {
        let mut nodes: Vec<Node> = self
            .adjacency
            .iter()
            .flat_map(|(&u, adjacents)| std::iter::once(u).chain(adjacents.iter().map(|a| a.node)))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();
        nodes.into_iter()
    }

    fn has_vertex(&self, u: Node) -> bool {
        self.adjacency.contains_key(&u)
            || self
                .adjacency
                .values()
                .any(|adjacents| adjacents.iter().any(|a| a.node == u))
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.adjacency.values().map(Vec::len).sum::<usize>() as NumEdges
    }
}

impl AdjacencyList for Graph {
    fn stored_adjacency_of(&self, u: Node) -> &[Adjacent] {
        self.adjacency.get(&u).map_or(&[], Vec::as_slice)
    }

    fn stored_adjacencies(&self) -> impl Iterator<Item = (Node, &[Adjacent])> + '_ {
        self.adjacency.iter().map(|(&u, adjacents)| (u, adjacents.as_slice()))
    }
}

impl GraphEdgeEditing for Graph {
    fn add_edge(&mut self, edge: impl Into<Edge>) {
        let edge = edge.into();
        let edge = if self.directed {
            edge
        } else {
            edge.normalized()
        };

        self.adjacency
            .entry(edge.from)
            .or_default()
            .push(edge.adjacent());
    }

    /// Removes one stored entry representing the edge.
    ///
    /// - Directed graphs remove `from -> to` for `Out`, `to -> from` for `In`, and the first
    ///   existing of both for `Both`.
    /// - Undirected graphs remove the entry stored under `min(from, to)`, falling back to the
    ///   other endpoint.
    fn try_remove_edge(&mut self, from: Node, to: Node, direction: Direction) -> bool {
        if !self.has_edge(from, to, direction) {
            return false;
        }

        if self.directed {
            match direction {
                Direction::Out => self.remove_stored(from, to),
                Direction::In => self.remove_stored(to, from),
                Direction::Both => self.remove_stored(from, to) || self.remove_stored(to, from),
            }
        } else {
            let (u, v) = (from.min(to), from.max(to));
            self.remove_stored(u, v) || self.remove_stored(v, u)
        }
    }
}

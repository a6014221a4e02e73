/*!
`wgraphs` is a graph data structure & algorithms library for small **w**eighted graphs that
may be directed or undirected. It bundles the classical algorithms one typically wants to run
on hand-drawn or generated instances: shortest paths, Eulerian and Hamiltonian trails, maximum
flows and minimum spanning trees.

# Representation

We represent **nodes** as `u32`. Node ids need not be dense: the node set of a graph is every id
that appears as a key of its adjacency mapping or as a neighbor. **Edges** carry an optional
`f64` weight; an absent weight means "exists but unweighted" and algorithms that need a number
use `1`.

### Directed vs Undirected

A [`Graph`](crate::repr::Graph) is either **directed** or **undirected**:

- In a **directed** graph, every edge is stored in the adjacency of its source.
- In an **undirected** graph, an edge `{u, v}` is stored once, under `min(u, v)`. The other
  endpoint sees it through [`neighbors_of`](crate::ops::AdjacencyList::neighbors_of), which
  derives the missing side by scanning the adjacency.

# Design

Algorithms with tunables are provided as configurable structs that one can alter using either
the *Builder* / *Setter* pattern before running them on a graph (e.g.
[`HamiltonianSearch`](crate::algo::HamiltonianSearch) or [`Analysis`](crate::algo::Analysis)).
Commonly used functionality is also implemented via traits on the graph itself, making it usable
without configuring an algorithm beforehand.

Queries that find nothing (no path, no trail) return `None`; queries that cannot be answered
(unknown node, negative weight, malformed input) return a [`GraphError`](crate::error::GraphError).

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph itself,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`),
  Dijkstra (`graph.shortest_path(a, b)`), Edmonds-Karp (`graph.max_flow(s, t)`), Kruskal, ...
- [`gens`] includes a seeded random weighted graph generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes handlers for reading and writing link lists, adjacency matrices and edge lists,
- [`utils`] includes helper structures such as a union-find and a resettable permutation iterator.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges([(0, 1, 2.0), (0, 2, 6.0), (1, 2, 3.0)], true);

let path = graph.shortest_path(0, 2).unwrap().unwrap();
assert_eq!(path.path, vec![0, 1, 2]);
assert_eq!(path.distance, 5.0);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}

/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`Graph`](crate::repr::Graph) and the
operation traits in [`ops`](crate::ops).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::{prelude::*, algo::*};
```
and gain access to traversal, connectivity, shortest paths, Eulerian and Hamiltonian trails,
maximum flow and spanning trees.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod connectivity;
mod eulerian;
mod hamiltonian;
mod network_flow;
mod path_matrix;
mod report;
mod shortest_path;
mod spanning_tree;
pub mod traversal;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub use connectivity::*;
pub use eulerian::*;
pub use hamiltonian::*;
pub use network_flow::*;
pub use path_matrix::*;
pub use report::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;

/// Shape of a trail: a path may end anywhere, a cycle ends where it started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailKind {
    #[default]
    Path,
    Cycle,
}

/// Internal trait to get a reference to the graph an algorithm runs on
pub trait WithGraphRef<G> {
    fn graph_ref(&self) -> &G;
}

/*!
# Substructure Generators

Adds common motifs (**paths**, **cycles**, **cliques**) to an already existing graph.
Useful to enrich random instances with known structure, e.g. to guarantee connectivity
or an Eulerian cycle.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = Graph::new(true);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 2, 4], false);

assert_eq!(g.number_of_edges(), 11);
assert!(g.has_edge(4, 2, Direction::Out));
assert!(g.has_edge(4, 0, Direction::Out));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path** of unweighted edges.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. A single node receives a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    ///
    /// Undirected graphs receive each pair once, directed graphs both orientations.
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge((u, v));
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge((prev, cur));
                prev = cur;
            }

            self.add_edge((prev, first));
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, with_loops: bool)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().unique().collect_vec();
        for &u in &nodes {
            for &v in &nodes {
                let e = Edge::unweighted(u, v);
                if (!with_loops && e.is_loop()) || (self.is_undirected() && !e.is_normalized()) {
                    continue;
                }

                self.add_edge(e);
            }
        }
    }
}

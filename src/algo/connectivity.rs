use itertools::Itertools;
use tracing::debug;

use super::*;

pub trait Connectivity: Traversal {
    /// Returns *true* if a breadth-first search along outgoing edges from the first node reaches
    /// every node. For directed graphs this is reachability from the smallest id, not strong
    /// connectivity. The empty graph is connected.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// assert!(Graph::from_edges([(0, 1), (1, 2)], false).is_connected());
    /// assert!(Graph::from_edges([(0, 1), (0, 2)], true).is_connected());
    /// assert!(!Graph::from_edges([(1, 0), (0, 2)], true).is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return true;
        };

        let reached = self.bfs(start).count();
        debug!(start, reached, nodes = self.len(), "connectivity check");
        reached == self.len()
    }

    /// Returns the weakly connected components, i.e. components when ignoring edge orientation.
    /// Components are listed by their smallest node, nodes in BFS order.
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut seen = fxhash::FxHashSet::default();
        let mut components = Vec::new();

        for u in self.vertices() {
            if seen.contains(&u) {
                continue;
            }

            let component = self.bfs(u).direction(Direction::Both).collect_vec();
            seen.extend(component.iter().copied());
            components.push(component);
        }

        components
    }
}

impl<G: Traversal> Connectivity for G {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disjoint_nodes() {
        let graph = Graph::from_adjacency([(0, vec![]), (1, vec![])], false);
        assert_eq!(graph.count(), 2);
        assert!(!graph.is_connected());
        assert_eq!(graph.connected_components(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn trivial_graphs() {
        assert!(Graph::new(true).is_connected());
        assert!(Graph::from_adjacency([(4, vec![])], true).is_connected());
    }

    #[test]
    fn components() {
        let graph = Graph::from_edges([(3, 1), (0, 2), (4, 4), (5, 3)], true);
        assert_eq!(
            graph.connected_components(),
            vec![vec![0, 2], vec![1, 3, 5], vec![4]]
        );
        assert!(!graph.is_connected());
    }

    #[test]
    fn undirected_from_any_storage_side() {
        let graph = Graph::from_edges([(3, 0), (3, 1), (2, 1)], false);
        assert!(graph.is_connected());
        assert_eq!(graph.connected_components().len(), 1);
    }
}

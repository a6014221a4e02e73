use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Kind and start node of the Eulerian trail a graph admits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EulerianStart {
    pub kind: TrailKind,
    pub start: Node,
}

pub trait Eulerian: AdjacencyList + GraphEdgeOrder + Sized {
    /// Classifies the graph by its degrees.
    ///
    /// - Undirected: no odd node yields a cycle, exactly two odd nodes yield a path starting at
    ///   the larger of them.
    /// - Directed: all nodes balanced yields a cycle, exactly one node with `out - in = 1` and one
    ///   with `out - in = -1` yield a path starting at the former.
    ///
    /// A cycle starts at the smallest node with an incident edge. Self-loops count twice towards
    /// an undirected degree. Returns `None` for the empty graph and whenever neither condition
    /// holds. Connectivity of the edges is not checked here, see [`Eulerian::eulerian_trail`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)], false);
    /// assert_eq!(
    ///     triangle.is_eulerian(),
    ///     Some(EulerianStart { kind: TrailKind::Cycle, start: 0 })
    /// );
    ///
    /// let path = Graph::from_edges([(0, 1), (1, 2)], false);
    /// assert_eq!(path.is_eulerian().map(|e| e.kind), Some(TrailKind::Path));
    /// ```
    fn is_eulerian(&self) -> Option<EulerianStart> {
        let first = self.vertices().next()?;

        // (out, in) per node; undirected edges count as out on both ends
        let mut degrees: FxHashMap<Node, (i64, i64)> = FxHashMap::default();
        for Edge { from, to, .. } in self.edges() {
            degrees.entry(from).or_default().0 += 1;
            if self.is_directed() {
                degrees.entry(to).or_default().1 += 1;
            } else {
                degrees.entry(to).or_default().0 += 1;
            }
        }

        let cycle_start = self
            .vertices()
            .find(|u| degrees.contains_key(u))
            .unwrap_or(first);

        let classified = if self.is_directed() {
            let mut sources = Vec::new();
            let mut sinks = 0;
            for u in self.vertices() {
                let (out, inc) = degrees.get(&u).copied().unwrap_or_default();
                match out - inc {
                    0 => {}
                    1 => sources.push(u),
                    -1 => sinks += 1,
                    _ => return None,
                }
            }

            match (sources.as_slice(), sinks) {
                ([], 0) => Some((TrailKind::Cycle, cycle_start)),
                (&[source], 1) => Some((TrailKind::Path, source)),
                _ => None,
            }
        } else {
            let odd = self
                .vertices()
                .filter(|u| degrees.get(u).is_some_and(|d| d.0 % 2 == 1))
                .collect_vec();

            match odd.as_slice() {
                [] => Some((TrailKind::Cycle, cycle_start)),
                &[_, last] => Some((TrailKind::Path, last)),
                _ => None,
            }
        };

        debug!(?classified, "eulerian classification");
        classified.map(|(kind, start)| EulerianStart { kind, start })
    }

    /// Returns an Eulerian trail of the requested kind using Hierholzer's algorithm on a copy of
    /// the graph. A cycle is returned for [`TrailKind::Path`] if the graph admits a cycle.
    ///
    /// The result uses every edge exactly once and has `number_of_edges + 1` nodes.
    /// Returns `None` if no such trail exists, including when the edges are not connected.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = Graph::from_edges([(0, 1), (1, 2), (2, 0)], false);
    /// assert_eq!(triangle.eulerian_trail(TrailKind::Cycle), Some(vec![0, 1, 2, 0]));
    ///
    /// let path = Graph::from_edges([(0, 1), (1, 2)], true);
    /// assert_eq!(path.eulerian_trail(TrailKind::Path), Some(vec![0, 1, 2]));
    /// assert_eq!(path.eulerian_trail(TrailKind::Cycle), None);
    /// ```
    fn eulerian_trail(&self, kind: TrailKind) -> Option<Vec<Node>>;
}

impl Eulerian for Graph {
    fn eulerian_trail(&self, kind: TrailKind) -> Option<Vec<Node>> {
        let start = self.is_eulerian()?;
        if start.kind != kind && start.kind != TrailKind::Cycle {
            return None;
        }

        let mut remaining = self.clone();
        let mut trail = Vec::with_capacity(self.number_of_edges() as usize + 1);
        let mut stack = vec![start.start];

        while let Some(&u) = stack.last() {
            match remaining.neighbors_of(u, Direction::Out).first() {
                Some(&Adjacent { node: v, .. }) => {
                    trace!(u, v, "take edge");
                    remaining.try_remove_edge(u, v, Direction::Out);
                    stack.push(v);
                }
                None => {
                    trail.push(u);
                    stack.pop();
                }
            }
        }
        trail.reverse();

        if !remaining.is_singleton_graph() {
            debug!(
                left = remaining.number_of_edges(),
                "edges unreachable from the start node"
            );
            return None;
        }

        debug!(?start, len = trail.len(), "eulerian trail");
        Some(trail)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Checks that the trail is a trajectory using every edge exactly once
    fn assert_uses_all_edges(graph: &Graph, trail: &[Node]) {
        assert_eq!(trail.len(), graph.number_of_edges() as usize + 1);
        assert!(graph.is_trajectory(trail));

        let mut remaining = graph.clone();
        for (&u, &v) in trail.iter().tuple_windows() {
            assert!(remaining.try_remove_edge(u, v, Direction::Out), "{u}->{v} used twice");
        }
    }

    #[test]
    fn triangle() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0)], false);
        assert_eq!(
            graph.is_eulerian(),
            Some(EulerianStart {
                kind: TrailKind::Cycle,
                start: 0
            })
        );

        let trail = graph.eulerian_trail(TrailKind::Cycle).unwrap();
        assert_eq!(trail, vec![0, 1, 2, 0]);
        assert_uses_all_edges(&graph, &trail);
        assert_eq!(graph.eulerian_trail(TrailKind::Path), Some(trail));
    }

    #[test]
    fn classification() {
        let path = Graph::from_edges([(0, 1), (1, 2), (2, 3)], false);
        assert_eq!(
            path.is_eulerian(),
            Some(EulerianStart {
                kind: TrailKind::Path,
                start: 3
            })
        );
        assert_eq!(path.eulerian_trail(TrailKind::Path), Some(vec![3, 2, 1, 0]));
        assert_eq!(path.eulerian_trail(TrailKind::Cycle), None);

        let star = Graph::from_edges([(0, 1), (0, 2), (0, 3)], false);
        assert_eq!(star.is_eulerian(), None);

        let directed = Graph::from_edges([(1, 0), (0, 2), (2, 1), (1, 3)], true);
        assert_eq!(
            directed.is_eulerian(),
            Some(EulerianStart {
                kind: TrailKind::Path,
                start: 1
            })
        );
        let trail = directed.eulerian_trail(TrailKind::Path).unwrap();
        assert_uses_all_edges(&directed, &trail);

        let two_sources = Graph::from_edges([(0, 1), (2, 3)], true);
        assert_eq!(two_sources.is_eulerian(), None);

        assert_eq!(Graph::new(true).is_eulerian(), None);
        assert_eq!(
            Graph::from_adjacency([(5, vec![])], false).eulerian_trail(TrailKind::Cycle),
            Some(vec![5])
        );
    }

    #[test]
    fn self_loops() {
        let graph = Graph::from_edges([(0, 1), (1, 1), (1, 2), (2, 0)], false);
        assert_eq!(graph.is_eulerian().map(|e| e.kind), Some(TrailKind::Cycle));
        let trail = graph.eulerian_trail(TrailKind::Cycle).unwrap();
        assert_uses_all_edges(&graph, &trail);
    }

    #[test]
    fn disconnected_edges() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)], false);
        assert_eq!(graph.is_eulerian().map(|e| e.kind), Some(TrailKind::Cycle));
        assert_eq!(graph.eulerian_trail(TrailKind::Cycle), None);

        let mut isolated_first = Graph::from_edges([(1, 2), (2, 3), (3, 1)], true);
        isolated_first.add_edge((0, 0));
        isolated_first.try_remove_edge(0, 0, Direction::Out);
        assert_eq!(
            isolated_first.is_eulerian(),
            Some(EulerianStart {
                kind: TrailKind::Cycle,
                start: 1
            })
        );
        assert_eq!(isolated_first.eulerian_trail(TrailKind::Cycle), Some(vec![1, 2, 3, 1]));
    }

    #[test]
    fn random_cycles_are_eulerian() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xe1e1);

        for directed in [false, true] {
            for n in 3..9 {
                let mut graph = Graph::new(directed);
                graph.connect_cycle(0..n);
                let chords = WeightedGnp::new()
                    .nodes(n)
                    .prob(0.2)
                    .directed(directed)
                    .generate(rng);
                graph.add_edges(chords.edges().collect_vec());

                match graph.eulerian_trail(TrailKind::Path) {
                    Some(trail) => assert_uses_all_edges(&graph, &trail),
                    None => assert_eq!(graph.is_eulerian(), None),
                }
            }
        }
    }
}

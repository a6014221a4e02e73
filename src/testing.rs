//! Brute-force reference implementations the algorithm tests compare against,
//! plus randomized consistency tests of the [`Graph`] operations.

use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// `[i][j]` is *true* iff `j` can be reached from `i` (every node reaches itself)
pub fn reachability(graph: &Graph) -> Vec<Vec<bool>> {
    let n = graph.node_bound();
    let mut reachable = vec![vec![false; n]; n];
    for (i, row) in reachable.iter_mut().enumerate() {
        row[i] = true;
    }

    for Edge { from, to, .. } in graph.edges() {
        reachable[from as usize][to as usize] = true;
        if graph.is_undirected() {
            reachable[to as usize][from as usize] = true;
        }
    }

    // Warshall
    for k in 0..n {
        for i in 0..n {
            if reachable[i][k] {
                for j in 0..n {
                    reachable[i][j] |= reachable[k][j];
                }
            }
        }
    }

    reachable
}

/// All-pairs distances, [`Weight::INFINITY`] if unreachable
pub fn floyd_warshall(graph: &Graph) -> Vec<Vec<Weight>> {
    let n = graph.node_bound();
    let mut dist = vec![vec![Weight::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    for edge in graph.edges() {
        let (u, v) = (edge.from as usize, edge.to as usize);
        let w = edge.weight_or_default();
        dist[u][v] = dist[u][v].min(w);
        if graph.is_undirected() {
            dist[v][u] = dist[v][u].min(w);
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }

    dist
}

/// Held-Karp style reachability over subsets
pub fn has_hamiltonian_trail(graph: &Graph, kind: TrailKind) -> bool {
    let nodes = graph.nodes();
    let n = nodes.len();
    if n == 0 {
        return false;
    }
    if n == 1 {
        return kind == TrailKind::Path || graph.has_edge(nodes[0], nodes[0], Direction::Out);
    }

    let arc = |i: usize, j: usize| graph.has_edge(nodes[i], nodes[j], Direction::Out);
    let full = (1usize << n) - 1;

    // paths[mask][v]: some path visits exactly `mask` and ends in `v`
    let mut paths = vec![vec![false; n]; 1 << n];
    for v in 0..n {
        // cycles are rotated to start at the first node
        if kind == TrailKind::Path || v == 0 {
            paths[1 << v][v] = true;
        }
    }

    for mask in 1..=full {
        for v in 0..n {
            if !paths[mask][v] {
                continue;
            }
            for w in (0..n).filter(|&w| mask & (1 << w) == 0 && arc(v, w)) {
                paths[mask | (1 << w)][w] = true;
            }
        }
    }

    (0..n).any(|v| paths[full][v] && (kind == TrailKind::Path || arc(v, 0)))
}

/// Minimum capacity over all cuts separating `source` from `sink`
pub fn min_cut(graph: &Graph, source: Node, sink: Node) -> Weight {
    let capacity = graph.numeric_adjacency_matrix();
    let n = capacity.order();
    let (s, t) = (source as usize, sink as usize);
    let others = (0..n).filter(|&u| u != s && u != t).collect_vec();

    (0..1usize << others.len())
        .map(|subset| {
            let mut side = vec![false; n];
            side[s] = true;
            for (bit, &u) in others.iter().enumerate() {
                side[u] = subset & (1 << bit) != 0;
            }

            (0..n)
                .cartesian_product(0..n)
                .filter(|&(u, v)| side[u] && !side[v])
                .map(|(u, v)| capacity[(u, v)])
                .sum::<Weight>()
        })
        .fold(Weight::INFINITY, Weight::min)
}

/// Lightest total weight of `n - 1` edges connecting all `n` nodes
pub fn brute_force_spanning_tree(graph: &Graph) -> Weight {
    let nodes = graph.nodes();
    let edges = graph.edges().collect_vec();

    edges
        .iter()
        .combinations(nodes.len().saturating_sub(1))
        .filter(|tree| {
            let mut sets = crate::utils::DisjointSet::with_capacity(graph.len());
            for &u in &nodes {
                sets.create(u);
            }
            tree.iter().all(|e| sets.union(e.from, e.to))
        })
        .map(|tree| tree.into_iter().map(Edge::weight_or_default).sum::<Weight>())
        .fold(Weight::INFINITY, Weight::min)
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`
    fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: usize, directed: bool) -> Vec<Edge> {
        let mut edges = (0..m_ub)
            .map(|_| {
                let e = Edge::weighted(
                    rng.random_range(0..n),
                    rng.random_range(0..n),
                    rng.random_range(1.0..2.0),
                );
                if directed { e } else { e.normalized() }
            })
            .collect_vec();

        edges.sort_by_key(Edge::endpoints);
        edges.dedup_by_key(|e| e.endpoints());
        edges
    }

    #[test]
    fn adjacency_list_agrees_with_matrix() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for n in [10 as NumNodes, 20] {
                for m_ub in [n as usize * 2, n as usize * 5] {
                    let edges = random_edges(rng, n, m_ub, directed);

                    let mut out = vec![vec![false; n as usize]; n as usize];
                    for e in &edges {
                        out[e.from as usize][e.to as usize] = true;
                        if !directed {
                            out[e.to as usize][e.from as usize] = true;
                        }
                    }

                    let graph = Graph::from_edges(edges.clone(), directed);
                    assert_eq!(graph.number_of_edges() as usize, edges.len());
                    assert_eq!(graph.edges().sorted_by_key(Edge::endpoints).collect_vec(), edges);

                    for u in graph.vertices() {
                        let expected = (0..n).filter(|&v| out[u as usize][v as usize]).collect_vec();
                        let neighbors = graph
                            .neighbors_of(u, Direction::Out)
                            .into_iter()
                            .map(|a| a.node)
                            .sorted()
                            .collect_vec();
                        assert_eq!(neighbors, expected);
                        assert_eq!(graph.degree_of(u, Direction::Out) as usize, expected.len());

                        for v in 0..n {
                            assert_eq!(
                                graph.has_edge(u, v, Direction::Out),
                                out[u as usize][v as usize]
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn edge_editing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for directed in [false, true] {
            let n: NumNodes = 15;
            let edges = random_edges(rng, n, 60, directed);
            let mut graph = Graph::from_edges(edges.clone(), directed);

            let mut m = graph.number_of_edges();
            for e in edges.iter().rev() {
                // undirected edges can be removed from either side
                let (u, v) = if !directed && rng.random_bool(0.5) {
                    (e.to, e.from)
                } else {
                    (e.from, e.to)
                };

                assert!(graph.try_remove_edge(u, v, Direction::Out));
                assert!(!graph.has_edge(e.from, e.to, Direction::Out));
                m -= 1;
                assert_eq!(graph.number_of_edges(), m);
            }

            assert!(graph.is_singleton_graph());
        }
    }
}

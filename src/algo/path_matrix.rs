use tracing::debug;

use super::*;
use crate::utils::Matrix;

pub trait PathMatrix: AdjacencyList + Sized {
    /// Returns the numeric adjacency matrix `A` of order [`GraphNodeOrder::node_bound`]
    /// (`0` disconnected, `1` unweighted, else the weight). Undirected graphs yield a symmetric
    /// matrix; of parallel edges the last one wins.
    ///
    /// Memory is quadratic in the largest node id; sparse ids should be relabeled first.
    fn numeric_adjacency_matrix(&self) -> Matrix {
        let mut matrix = Matrix::zeros(self.node_bound());
        for edge in self.edges() {
            let (i, j) = (edge.from as usize, edge.to as usize);
            let value = Cell::from_weight(edge.weight).value();
            matrix[(i, j)] = value;
            if self.is_undirected() {
                matrix[(j, i)] = value;
            }
        }
        matrix
    }

    /// Returns `A^0 + A^1 + .. + A^(n-1)` where `A` is the numeric adjacency matrix and `n` is
    /// the number of nodes. An entry `[i][j] > 0` means that `j` is reachable from `i` in fewer
    /// than `n` steps, given all weights are positive.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2)], true);
    /// let m = g.path_matrix();
    ///
    /// assert_eq!(m.rows()[0], vec![1.0, 1.0, 1.0]);
    /// assert_eq!(m.rows()[2], vec![0.0, 0.0, 1.0]);
    /// ```
    fn path_matrix(&self) -> Matrix {
        let adjacency = self.numeric_adjacency_matrix();
        let mut paths = Matrix::identity(adjacency.order());
        let mut power = adjacency.clone();

        for _ in 2..=self.len() {
            paths.add_assign(&power);
            power = power.mul(&adjacency);
        }

        debug!(order = paths.order(), "computed path matrix");
        paths
    }
}

impl<G: AdjacencyList + Sized> PathMatrix for G {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::reachability};

    #[test]
    fn counts_walks() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)], false);
        let m = g.path_matrix();
        // I + A + A^2 of a triangle
        assert_eq!(m.rows()[0], vec![3.0, 2.0, 2.0]);
    }

    #[test]
    fn numeric_matrix_matches_cells() {
        let g = Graph::from_edges([(0, 1, 2.5), (2, 1, 0.5)], false);
        let cells = g.adjacency_matrix();
        let numeric = g.numeric_adjacency_matrix();
        for (i, row) in cells.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                assert_eq!(numeric[(i, j)], cell.value());
            }
        }
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(Graph::new(false).path_matrix().order(), 0);
        let single = Graph::from_adjacency([(0, vec![])], false);
        assert_eq!(single.path_matrix().rows(), &[vec![1.0]]);
    }

    #[test]
    fn agrees_with_bfs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x7a3b);

        for directed in [false, true] {
            for _ in 0..30 {
                let g = WeightedGnp::new()
                    .nodes(7)
                    .prob(0.25)
                    .directed(directed)
                    .generate(rng);

                let m = g.path_matrix();
                let reachable = reachability(&g);
                for i in 0..g.node_bound() {
                    for j in 0..g.node_bound() {
                        assert_eq!(m[(i, j)] > 0.0, reachable[i][j], "{i} -> {j} in {g:?}");
                    }
                }
            }
        }
    }

    #[test]
    #[ignore = "timing only, run with --ignored --nocapture"]
    fn timing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x71e);
        for n in [10, 20, 40, 80] {
            let g = WeightedGnp::new().nodes(n).prob(0.1).generate(rng);
            let start = std::time::Instant::now();
            let m = g.path_matrix();
            println!("n={n:3} order={} elapsed={:?}", m.order(), start.elapsed());
        }
    }
}

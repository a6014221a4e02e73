//! # Matrix
//!
//! A JSON adjacency matrix `[[false, 2.5], [true, false]]`: `false` is no edge, `true` an
//! unweighted edge and a number the weight of an edge. Only simple graphs can be represented;
//! reading a matrix never creates parallel edges.

use tracing::debug;

use super::*;

/// A GraphReader for JSON adjacency matrices
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixReader {
    directed: bool,
}

impl MatrixReader {
    /// Creates a new reader for undirected graphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the directedness of the read graph
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

impl GraphReader<Graph> for MatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let matrix: AdjacencyMatrix = serde_json::from_reader(reader)?;
        debug!(order = matrix.len(), directed = self.directed, "read adjacency matrix");
        Ok(Graph::from_adjacency_matrix(&matrix, self.directed))
    }
}

/// A writer for JSON adjacency matrices of order `max(node) + 1`
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixWriter;

impl MatrixWriter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphWriter<Graph> for MatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        serde_json::to_writer(&mut writer, &graph.adjacency_matrix())?;
        writer.flush()?;
        Ok(())
    }
}

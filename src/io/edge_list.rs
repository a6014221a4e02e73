//! # EdgeList
//!
//! One edge per non-comment-line: `u v` for an unweighted or `u v w` for a weighted edge.
//! Tokens are separated by whitespace; empty lines are ignored.

use std::io::Lines;

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    directed: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            directed: false,
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the directedness of the read graph
    pub fn directed(mut self, directed: bool) -> EdgeListReader {
        self.directed = directed;
        self
    }
}

impl GraphReader<Graph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let edges = EdgeListEdgesReader::new(reader, &self.comment_identifier)
            .collect::<Result<Vec<Edge>>>()?;
        debug!(edges = edges.len(), directed = self.directed, "read edge list");
        Ok(Graph::from_edges(edges, self.directed))
    }
}

/// Iterator over the edges of an edge list, consuming the reader
pub struct EdgeListEdgesReader<'a, R> {
    lines: Lines<R>,
    /// Number of the last line read, starting at `1`
    line: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    pub fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            comment_identifier,
        }
    }

    /// Returns the next line that is neither empty nor a comment
    fn next_edge_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some(line));
        }
        Ok(None)
    }

    /// Tries to parse an edge from the next edge line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_edge_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();
        let from: Node = parse_next_value!(parts, self.line, "source node");
        let to: Node = parse_next_value!(parts, self.line, "target node");
        let weight = match parts.next() {
            Some(token) => Some(
                token
                    .parse::<Weight>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| GraphError::Parse {
                        line: self.line,
                        reason: format!("cannot parse finite weight from {token:?}"),
                    })?,
            ),
            None => None,
        };

        let rest = parts.count();
        raise_error_unless!(
            rest == 0,
            self.line,
            format!("{rest} unexpected trailing token(s)")
        );

        Ok(Some(Edge::new(from, to, weight)))
    }
}

impl<'a, R: BufRead> Iterator for EdgeListEdgesReader<'a, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Written as the first line if set, prefixed by `# `
    comment: Option<String>,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leading comment line
    pub fn comment<S: Into<String>>(mut self, comment: S) -> EdgeListWriter {
        self.comment = Some(comment.into());
        self
    }
}

impl GraphWriter<Graph> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            writeln!(writer, "# {comment}")?;
        }

        for Edge { from, to, weight } in graph.edges() {
            match weight {
                Some(w) => writeln!(writer, "{from} {to} {w}")?,
                None => writeln!(writer, "{from} {to}")?,
            }
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_edge_list() {
        let input = "% generated\n\n0 1\n  1 2 0.5\n% trailing comment\n3 3\n";
        let graph = EdgeListReader::new()
            .comment_identifier("%")
            .directed(true)
            .try_read_graph(input.as_bytes())
            .unwrap();

        assert_eq!(
            graph.edge_list(),
            vec![Edge::unweighted(0, 1), Edge::weighted(1, 2, 0.5), Edge::unweighted(3, 3)]
        );
    }

    #[test]
    fn parse_errors() {
        let read = |input: &str| EdgeListReader::new().try_read_graph(input.as_bytes());

        assert!(matches!(read("0 1\n1\n"), Err(GraphError::Parse { line: 2, .. })));
        assert!(matches!(read("# c\n0 x\n"), Err(GraphError::Parse { line: 2, .. })));
        assert!(matches!(read("0 1 w\n"), Err(GraphError::Parse { line: 1, .. })));
        assert!(matches!(read("0 1 2 3\n"), Err(GraphError::Parse { line: 1, .. })));
        assert!(matches!(read("-1 2\n"), Err(GraphError::Parse { line: 1, .. })));
        assert!(matches!(read("0 1\n1 2 NaN\n"), Err(GraphError::Parse { line: 2, .. })));
        assert!(matches!(read("0 1 inf\n"), Err(GraphError::Parse { line: 1, .. })));
        assert_eq!(read("").unwrap(), Graph::new(false));
    }

    #[test]
    fn write_edge_list() {
        let graph = Graph::from_edges([(2, 0, 1.5), (0, 1, 1.0)], false);
        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .comment("two edges")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "# two edges\n0 2 1.5\n0 1 1\n");
    }
}

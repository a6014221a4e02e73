//! # Links
//!
//! A JSON array of string-typed links as produced by form-driven frontends:
//! `[{"from": "0", "to": "1", "weight": "4"}, {"from": "1", "to": "2", "weight": null}]`.
//! The legacy field name `text` is accepted in place of `weight`.

use tracing::debug;

use super::*;

/// A GraphReader for JSON link lists
#[derive(Debug, Clone, Copy, Default)]
pub struct LinksReader {
    directed: bool,
}

impl LinksReader {
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

impl GraphReader<Graph> for LinksReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let links: Vec<Link> = serde_json::from_reader(reader)?;
        debug!(links = links.len(), directed = self.directed, "read links");
        Graph::try_from_links(&links, self.directed)
    }
}

/// A writer for JSON link lists
#[derive(Debug, Clone, Copy, Default)]
pub struct LinksWriter {
    pretty: bool,
}

impl LinksWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl GraphWriter<Graph> for LinksWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        let links = graph.edges().map(|e| e.link()).collect::<Vec<_>>();
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &links)?;
        } else {
            serde_json::to_writer(&mut writer, &links)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_links() {
        let input = r#"[
            {"from": "0", "to": "1", "weight": "4"},
            {"from": "2", "to": "1", "text": null},
            {"from": "1", "to": "3"}
        ]"#;

        let graph = LinksReader::new().try_read_graph(input.as_bytes()).unwrap();
        assert!(graph.is_undirected());
        assert_eq!(
            graph.edge_list(),
            vec![Edge::weighted(0, 1, 4.0), Edge::unweighted(1, 2), Edge::unweighted(1, 3)]
        );

        let directed = LinksReader::new()
            .directed(true)
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert!(directed.has_edge(2, 1, Direction::Out));
    }

    #[test]
    fn invalid_links() {
        assert!(matches!(
            LinksReader::new().try_read_graph(r#"[{"from": "a", "to": "1"}]"#.as_bytes()),
            Err(GraphError::InvalidLink { field: "from", .. })
        ));
        assert!(matches!(
            LinksReader::new().try_read_graph("{".as_bytes()),
            Err(GraphError::Json(_))
        ));
    }

    #[test]
    fn write_links() {
        let graph = Graph::from_edges([(0, 1, 2.5)], true);
        let mut buffer = Vec::new();
        LinksWriter::new().try_write_graph(&graph, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            r#"[{"from":"0","to":"1","weight":"2.5"}]"#
        );
    }
}

/*!
# IO

Utilities for reading and writing graphs from and to different file formats.

## Formats

- **Links**: a JSON array of string-typed [`Link`]s `{"from": "0", "to": "1", "weight": "2.5"}`,
  the shape a form-driven frontend exchanges.
- **Matrix**: a JSON adjacency matrix of [`Cell`]s (`false`, `true` or a weight).
- **EdgeList**: plain text, one edge `from to [weight]` per line. Empty lines and lines starting
  with a comment identifier are skipped.

None of the formats carries the directedness of the graph; readers take it as a setting.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod edge_list;
pub mod links;
pub mod matrix;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{error::Result, prelude::*};

pub use edge_list::*;
pub use links::*;
pub use matrix::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// JSON list of string-typed links
    #[default]
    Links,
    /// JSON adjacency matrix
    Matrix,
    /// Whitespace separated edge list
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "links" => Ok(FileFormat::Links),
            "matrix" => Ok(FileFormat::Matrix),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FileFormat::Links => "links",
            FileFormat::Matrix => "matrix",
            FileFormat::EdgeList => "edgelist",
        })
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, io::*};
///
/// let input = "# triangle\n0 1\n1 2 2.5\n2 0\n";
/// let graph = Graph::try_from_reader(input.as_bytes(), FileFormat::EdgeList, false).unwrap();
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(graph.edge(2, 1, Direction::Out), Some(Edge::weighted(2, 1, 2.5)));
/// ```
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    fn try_from_reader<R>(reader: R, format: FileFormat, directed: bool) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat, directed: bool) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format, directed)
    }
}

impl GraphRead for Graph {
    fn try_from_reader<R>(reader: R, format: FileFormat, directed: bool) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Links => LinksReader::new().directed(directed).try_read_graph(reader),
            FileFormat::Matrix => MatrixReader::new().directed(directed).try_read_graph(reader),
            FileFormat::EdgeList => EdgeListReader::new().directed(directed).try_read_graph(reader),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl GraphWrite for Graph {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Links => LinksWriter::new().try_write_graph(self, writer),
            FileFormat::Matrix => MatrixWriter::new().try_write_graph(self, writer),
            FileFormat::EdgeList => EdgeListWriter::new().try_write_graph(self, writer),
        }
    }
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(GraphError::Parse {
                line: $line,
                reason: $reason,
            });
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(GraphError::Parse {
                line: $line,
                reason: format!("premature end of line when parsing {}", $name),
            });
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphError::Parse {
                    line: $line,
                    reason: format!("cannot parse {} from {next:?}", $name),
                });
            }
        }
    }};
}

use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_format_names() {
        for format in [FileFormat::Links, FileFormat::Matrix, FileFormat::EdgeList] {
            assert_eq!(format.to_string().parse::<FileFormat>().unwrap(), format);
        }
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert!(matches!(
            "dot".parse::<FileFormat>(),
            Err(GraphError::UnknownFormat(name)) if name == "dot"
        ));
    }

    #[test]
    fn formats_preserve_simple_graphs() {
        let graph = Graph::from_edges([(0, 1, 2.5), (0, 2, 1.0), (1, 2, 4.0)], true);

        for format in [FileFormat::Links, FileFormat::Matrix, FileFormat::EdgeList] {
            let mut buffer = Vec::new();
            graph.try_write_to_writer(&mut buffer, format).unwrap();
            let read = Graph::try_from_reader(buffer.as_slice(), format, true).unwrap();
            assert_eq!(read, graph, "{format}");
        }
    }

    #[test]
    fn file_helpers() {
        let graph = Graph::from_edges([(0, 1), (1, 2)], false);
        let path = std::env::temp_dir().join(format!("wgraphs-io-{}.txt", std::process::id()));

        graph.try_write_to_file(&path, FileFormat::EdgeList).unwrap();
        let read = Graph::try_from_file(&path, FileFormat::EdgeList, false).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, graph);
        assert!(matches!(
            Graph::try_from_file(&path, FileFormat::EdgeList, false),
            Err(GraphError::Io(_))
        ));
    }
}

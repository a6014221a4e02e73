//! Error type shared by constructors, queries and IO.
//!
//! "Nothing found" (no path, no trail, no edge) is never an error and is reported as `None`.
//! Everything in here means the *query itself* could not be answered.

use thiserror::Error;

use crate::node::{Node, Weight};

/// Errors that can occur in graph construction, queries and IO
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node {0} is not part of the graph")]
    UnknownNode(Node),

    #[error("Invalid link: cannot parse {field} from {value:?}")]
    InvalidLink { field: &'static str, value: String },

    #[error("Negative weight {weight} on edge ({from},{to})")]
    NegativeWeight { from: Node, to: Node, weight: Weight },

    #[error("Parse error in line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Search cancelled after {candidates} candidates")]
    Cancelled { candidates: u64 },

    #[error("Search budget exhausted after {candidates} candidates")]
    BudgetExhausted { candidates: u64 },

    #[error("Unknown file format: {0}")]
    UnknownFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

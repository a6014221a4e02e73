/*!
# Node Representation

We choose `Node = u32` as node ids are small, non-negative integers handed to us by the caller.
Ids need not be dense: the node universe of a graph is whatever appears as a key or as a
neighbor in its adjacency (see [`GraphNodeOrder::vertices`](crate::ops::GraphNodeOrder::vertices)).

Edge weights are `f64`. An absent weight means "exists but unweighted" and algorithms that need
a numeric cost fall back to [`DEFAULT_WEIGHT`].
*/

use std::num::NonZero;

use serde::{Deserialize, Serialize};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Edge weights / capacities / distances
pub type Weight = f64;

/// Cost assigned to an unweighted edge by algorithms that need a number
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// One endpoint of an edge as seen from the *other* endpoint.
///
/// The adjacency of a [`Graph`](crate::repr::Graph) maps every node to a list of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjacent {
    /// The node on the other side of the edge
    pub node: Node,
    /// Optional weight of the edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl Adjacent {
    /// Creates a new adjacent with an optional weight
    pub const fn new(node: Node, weight: Option<Weight>) -> Self {
        Self { node, weight }
    }

    /// Creates a new unweighted adjacent
    pub const fn unweighted(node: Node) -> Self {
        Self::new(node, None)
    }

    /// Creates a new weighted adjacent
    pub const fn weighted(node: Node, weight: Weight) -> Self {
        Self::new(node, Some(weight))
    }

    /// Returns *true* if a weight is present and it is neither `0` nor `NaN`
    pub fn is_weighted(&self) -> bool {
        is_weighted(self.weight)
    }

    /// Returns the weight or [`DEFAULT_WEIGHT`] if there is none
    pub fn weight_or_default(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }
}

/// Shared truthiness rule for weights: absent, zero and `NaN` do not count as weighted.
pub(crate) fn is_weighted(weight: Option<Weight>) -> bool {
    weight.is_some_and(|w| w != 0.0 && !w.is_nan())
}

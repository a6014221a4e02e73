use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{error::*, node::*};

/// An edge is defined by two nodes/endpoints and an optional weight.
/// Is is up to the graph whether an Edge is directed or not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// String-typed edge triple as exchanged with a form-driven UI.
///
/// The weight field was called `text` by older frontends; both names are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    pub from: String,
    pub to: String,
    #[serde(default, alias = "text")]
    pub weight: Option<String>,
}

impl Link {
    /// Creates a new link from anything printable
    pub fn new<F: ToString, T: ToString>(from: F, to: T, weight: Option<Weight>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight: weight.map(|w| w.to_string()),
        }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "({},{};{})", self.from, self.to, w),
            None => write!(f, "({},{})", self.from, self.to),
        }
    }
}

impl Edge {
    /// Creates a new edge
    pub const fn new(from: Node, to: Node, weight: Option<Weight>) -> Self {
        Self { from, to, weight }
    }

    /// Creates a new unweighted edge
    pub const fn unweighted(from: Node, to: Node) -> Self {
        Self::new(from, to, None)
    }

    /// Creates a new weighted edge
    pub const fn weighted(from: Node, to: Node, weight: Weight) -> Self {
        Self::new(from, to, Some(weight))
    }

    /// Creates the edge `from -> adjacent.node`. The weight is taken from the adjacent.
    pub const fn from_adjacent(from: Node, adjacent: &Adjacent) -> Self {
        Self::new(from, adjacent.node, adjacent.weight)
    }

    /// Parses the string-typed fields of a [`Link`].
    /// An absent, empty or `"null"` weight yields an unweighted edge; weights must be finite.
    pub fn try_from_link(link: &Link) -> Result<Self> {
        let parse_node = |field: &'static str, value: &str| {
            value
                .trim()
                .parse::<Node>()
                .map_err(|_| GraphError::InvalidLink {
                    field,
                    value: value.to_string(),
                })
        };

        let weight = match link.weight.as_deref().map(str::trim) {
            None | Some("") | Some("null") => None,
            Some(w) => Some(
                w.parse::<Weight>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| GraphError::InvalidLink {
                        field: "weight",
                        value: w.to_string(),
                    })?,
            ),
        };

        Ok(Self::new(
            parse_node("from", &link.from)?,
            parse_node("to", &link.to)?,
            weight,
        ))
    }

    /// Serializes the edge back into a [`Link`]
    pub fn link(&self) -> Link {
        Link::new(self.from, self.to, self.weight)
    }

    /// Returns the adjacent as seen from `self.from`
    pub const fn adjacent(&self) -> Adjacent {
        Adjacent::new(self.to, self.weight)
    }

    /// Returns *true* if a weight is present and it is neither `0` nor `NaN`
    pub fn is_weighted(&self) -> bool {
        is_weighted(self.weight)
    }

    /// Returns the weight or [`DEFAULT_WEIGHT`] if there is none
    pub fn weight_or_default(&self) -> Weight {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Self::new(self.from.min(self.to), self.from.max(self.to), self.weight)
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.from <= self.to
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.from, self.to)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::unweighted(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge::unweighted(value.0, value.1)
    }
}

impl From<(Node, Node, Weight)> for Edge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2)
    }
}

impl From<&(Node, Node, Weight)> for Edge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Edge::weighted(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

impl TryFrom<&Link> for Edge {
    type Error = GraphError;

    fn try_from(value: &Link) -> Result<Self> {
        Edge::try_from_link(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_link() {
        let link = Link {
            from: "3".into(),
            to: " 7".into(),
            weight: Some("2.5".into()),
        };
        assert_eq!(Edge::try_from_link(&link).unwrap(), Edge::weighted(3, 7, 2.5));

        for absent in [None, Some(String::new()), Some("null".to_string())] {
            let link = Link {
                from: "0".into(),
                to: "1".into(),
                weight: absent,
            };
            assert_eq!(Edge::try_from_link(&link).unwrap(), Edge::unweighted(0, 1));
        }
    }

    #[test]
    fn from_invalid_link() {
        let link = Link::new("a", 1, None);
        assert!(matches!(
            Edge::try_from_link(&link),
            Err(GraphError::InvalidLink { field: "from", .. })
        ));

        let link = Link::new(-1, 1, None);
        assert!(Edge::try_from_link(&link).is_err());

        let link = Link {
            from: "0".into(),
            to: "1".into(),
            weight: Some("heavy".into()),
        };
        assert!(matches!(
            Edge::try_from_link(&link),
            Err(GraphError::InvalidLink { field: "weight", .. })
        ));

        for non_finite in ["NaN", "inf", "-infinity"] {
            let link = Link {
                from: "0".into(),
                to: "1".into(),
                weight: Some(non_finite.into()),
            };
            assert!(matches!(
                Edge::try_from_link(&link),
                Err(GraphError::InvalidLink { field: "weight", .. })
            ));
        }
    }

    #[test]
    fn link_roundtrip_with_legacy_field() {
        let links: Vec<Link> =
            serde_json::from_str(r#"[{"from":"0","to":"1","text":"4"},{"from":"1","to":"2","text":null}]"#)
                .unwrap();
        let edges: Vec<Edge> = links.iter().map(|l| Edge::try_from_link(l).unwrap()).collect();
        assert_eq!(edges, vec![Edge::weighted(0, 1, 4.0), Edge::unweighted(1, 2)]);
        assert_eq!(edges[0].link(), Link::new(0, 1, Some(4.0)));
    }

    #[test]
    fn from_adjacent_takes_adjacent_weight() {
        let edge = Edge::from_adjacent(2, &Adjacent::weighted(5, 3.0));
        assert_eq!(edge, Edge::weighted(2, 5, 3.0));
        assert!(edge.is_weighted());
        assert!(!Edge::from_adjacent(2, &Adjacent::unweighted(5)).is_weighted());
    }

    #[test]
    fn normalization() {
        let e = Edge::weighted(4, 1, 2.0);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge::weighted(1, 4, 2.0));
        assert_eq!(e.reverse(), e.normalized());
        assert!(Edge::unweighted(3, 3).is_loop());
        assert_eq!(format!("{e}"), "(4,1;2)");
    }
}

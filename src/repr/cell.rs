use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::Weight;

/// Entry of an adjacency matrix.
///
/// Serializes as `false`, `true` or the weight, which is how matrices are exchanged as JSON.
/// A numeric `0` is read as disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    #[default]
    Disconnected,
    Connected,
    Weighted(Weight),
}

/// Square matrix of cells indexed by node id
pub type AdjacencyMatrix = Vec<Vec<Cell>>;

impl Cell {
    /// Cell of an edge with the given weight
    pub fn from_weight(weight: Option<Weight>) -> Self {
        weight.map_or(Cell::Connected, Cell::Weighted)
    }

    /// Returns *true* unless the cell is [`Cell::Disconnected`]
    pub fn is_connected(&self) -> bool {
        !matches!(self, Cell::Disconnected)
    }

    /// Weight of the edge, `None` for connected but unweighted cells
    pub fn weight(&self) -> Option<Weight> {
        match *self {
            Cell::Weighted(w) => Some(w),
            _ => None,
        }
    }

    /// Numeric value: `0` if disconnected, `1` if connected, otherwise the weight
    pub fn value(&self) -> Weight {
        match *self {
            Cell::Disconnected => 0.0,
            Cell::Connected => 1.0,
            Cell::Weighted(w) => w,
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Cell::Disconnected => serializer.serialize_bool(false),
            Cell::Connected => serializer.serialize_bool(true),
            Cell::Weighted(w) => serializer.serialize_f64(w),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Flag(bool),
    Number(Weight),
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawCell::deserialize(deserializer)? {
            RawCell::Flag(false) => Cell::Disconnected,
            RawCell::Flag(true) => Cell::Connected,
            RawCell::Number(w) if w == 0.0 || w.is_nan() => Cell::Disconnected,
            RawCell::Number(w) => Cell::Weighted(w),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_cells() {
        let row: Vec<Cell> = serde_json::from_str("[false, true, 2.5, 3, 0]").unwrap();
        assert_eq!(
            row,
            vec![
                Cell::Disconnected,
                Cell::Connected,
                Cell::Weighted(2.5),
                Cell::Weighted(3.0),
                Cell::Disconnected
            ]
        );
        assert_eq!(serde_json::to_string(&row).unwrap(), "[false,true,2.5,3.0,false]");
    }

    #[test]
    fn values() {
        assert_eq!(Cell::default().value(), 0.0);
        assert_eq!(Cell::from_weight(None).value(), 1.0);
        assert_eq!(Cell::from_weight(Some(7.0)).value(), 7.0);
        assert!(Cell::Weighted(0.0).is_connected());
        assert_eq!(Cell::Connected.weight(), None);
    }
}

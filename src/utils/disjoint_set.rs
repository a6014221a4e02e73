use fxhash::FxHashMap;

use crate::node::*;

/// Union-find over node ids.
///
/// Sets are created explicitly with [`DisjointSet::create`]; ids need not be dense,
/// storage is proportional to the number of created ids.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// `x -> (parent, rank)`
    entries: FxHashMap<Node, (Node, u32)>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty union-find with room for `n` ids
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(n, Default::default()),
        }
    }

    /// Makes `x` the sole member and representative of a new set.
    /// Re-creating `x` resets it to a singleton.
    pub fn create(&mut self, x: Node) {
        self.entries.insert(x, (x, 0));
    }

    /// Returns *true* if `x` was created
    pub fn contains(&self, x: Node) -> bool {
        self.entries.contains_key(&x)
    }

    fn parent(&self, x: Node) -> Node {
        self.entries[&x].0
    }

    fn rank(&self, x: Node) -> u32 {
        self.entries[&x].1
    }

    fn set_parent(&mut self, x: Node, parent: Node) {
        if let Some(entry) = self.entries.get_mut(&x) {
            entry.0 = parent;
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// ** Panics if `x` was never created **
    pub fn find(&mut self, x: Node) -> Node {
        assert!(self.contains(x), "node {x} is not part of the disjoint set");

        let mut x = x;
        loop {
            let p = self.parent(x);
            if p == x {
                return x;
            }
            // path splitting
            let grand = self.parent(p);
            self.set_parent(x, grand);
            x = p;
        }
    }

    /// Merges the sets containing `x` and `y` and returns *true* if they were different.
    ///
    /// ** Panics if `x` or `y` was never created **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let (rx, ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }

        let (rx_rank, ry_rank) = (self.rank(rx), self.rank(ry));
        if rx_rank < ry_rank {
            self.set_parent(rx, ry);
        } else {
            self.set_parent(ry, rx);
            if rx_rank == ry_rank {
                if let Some(entry) = self.entries.get_mut(&rx) {
                    entry.1 += 1;
                }
            }
        }
        true
    }

    /// Returns *true* if `x` and `y` are in the same set
    pub fn same_set(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn union_find() {
        let mut sets = DisjointSet::new();
        for x in [0, 3, 5, 9] {
            sets.create(x);
        }

        assert!(sets.contains(5));
        assert!(!sets.contains(4));
        assert_eq!(sets.find(9), 9);

        assert!(sets.union(0, 3));
        assert!(sets.union(5, 9));
        assert!(!sets.union(3, 0));
        assert!(sets.same_set(0, 3));
        assert!(!sets.same_set(3, 9));

        assert!(sets.union(3, 9));
        assert!(sets.same_set(0, 5));
        let root = sets.find(0);
        for x in [3, 5, 9] {
            assert_eq!(sets.find(x), root);
        }
    }

    #[test]
    fn recreate_resets() {
        let mut sets = DisjointSet::with_capacity(2);
        sets.create(0);
        sets.create(1);
        sets.union(0, 1);
        let root = sets.find(0);
        let other = 1 - root;
        sets.create(other);
        assert_eq!(sets.find(other), other);
    }

    #[test]
    fn sparse_ids() {
        let mut sets = DisjointSet::new();
        sets.create(0);
        sets.create(3_000_000_000);
        assert!(sets.union(3_000_000_000, 0));
        assert!(sets.same_set(0, 3_000_000_000));
    }

    #[test]
    #[should_panic]
    fn find_unknown_panics() {
        let mut sets = DisjointSet::new();
        sets.create(2);
        sets.find(1);
    }
}

/*!
Graph traversal algorithms.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking)
  following edges in a chosen [`Direction`].
- [`TraversalTree`] to turn predecessor-tracking traversals into parent maps or depths.
- A high-level [`Traversal`] trait that exposes the iterators directly as methods on graphs.

Node ids need not be dense, so visited-states are kept in a hash set.
*/

use std::{collections::VecDeque, marker::PhantomData};

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: only the node,
/// - [`PredecessorOfNode`]: `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; the root of the search is encoded as `(root, root)`
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a traversal.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Every node is yielded at most once, in the order it is taken from the frontier.
/// Neighbors are discovered in the order of [`AdjacencyList::neighbors_of`].
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: FxHashSet<Node>,
    sequencer: S,
    direction: Direction,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator visiting nodes in breadth-first order
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator visiting nodes in depth-first order
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for Adjacent { node: v, .. } in self.graph.neighbors_of(u, self.direction) {
                if self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start` following outgoing edges
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            direction: Direction::Out,
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Sets the direction in which edges are followed
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Sets the direction in which edges are followed
    pub fn direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already in the frontier.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Excludes a node from the search. It will be treated as if it was already visited.
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(&u)
    }

    /// Consumes the search and returns *true* iff `u` is reachable from the start node.
    /// The start node itself is always reachable.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v.item() == u)
    }
}

/// Extension trait for traversals yielding [`PredecessorOfNode`],
/// extracting the implied spanning tree.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and maps every visited node except the root to its parent
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2)], false);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_map();
    /// assert_eq!(parents.get(&2), Some(&1));
    /// assert_eq!(parents.get(&0), None);
    /// ```
    fn parent_map(self) -> FxHashMap<Node, Node> {
        self.filter_map(|item| item.predecessor().map(|p| (item.item(), p)))
            .collect()
    }

    /// Consumes the iterator and computes the depth of each visited node (root depth = 0)
    fn depths(self) -> FxHashMap<Node, NumNodes> {
        let mut depths = FxHashMap::default();
        for item in self {
            let depth = item
                .predecessor()
                .map_or(0, |p| depths.get(&p).copied().unwrap_or(0) + 1);
            depths.insert(item.item(), depth);
        }
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Provides convenient traversal methods
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order** along outgoing edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (0, 2), (1, 3)], true);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// assert_eq!(g.bfs(3).direction(Direction::In).count(), 3);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order** along outgoing edges.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// BFS that additionally yields the predecessor of every node
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// DFS that additionally yields the predecessor of every node
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if there is a path `from -> .. -> to` along outgoing edges
    fn is_node_reachable_from(&self, from: Node, to: Node) -> bool {
        self.bfs(from).is_node_reachable(to)
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}

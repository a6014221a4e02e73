/// Lazy generator of all permutations of a list.
///
/// The first element moves fastest: permutations of the tail are enumerated in the same
/// manner and the head is inserted at every position of each. For `[0, 1, 2]` this yields
/// `[0,1,2] [1,0,2] [1,2,0] [0,2,1] [2,0,1] [2,1,0]`.
///
/// Only the mixed-radix insertion counter is stored, so memory stays `O(n)` while the
/// iterator walks all `n!` permutations. An empty list yields nothing.
///
/// # Example
/// ```
/// use wgraphs::utils::Permutations;
///
/// let mut perms = Permutations::new(vec!['a', 'b']);
/// assert_eq!(perms.next(), Some(vec!['a', 'b']));
/// assert_eq!(perms.next(), Some(vec!['b', 'a']));
/// assert_eq!(perms.next(), None);
///
/// perms.reset();
/// assert_eq!(perms.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    items: Vec<T>,
    /// `insert_at[k]` is the position of `items[k]` when inserted into the permutation of `items[k+1..]`
    insert_at: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let n = items.len();
        Self {
            items,
            insert_at: vec![0; n],
            exhausted: n == 0,
        }
    }

    /// Restarts the enumeration at the first permutation
    pub fn reset(&mut self) {
        self.insert_at.fill(0);
        self.exhausted = self.items.is_empty();
    }

    /// Number of elements being permuted
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn current(&self) -> Vec<T> {
        let mut perm = Vec::with_capacity(self.items.len());
        for (item, &pos) in self.items.iter().zip(&self.insert_at).rev() {
            perm.insert(pos, item.clone());
        }
        perm
    }

    /// Advances the counter; digit `k` ranges over `0..n-k`
    fn advance(&mut self) {
        let n = self.insert_at.len();
        for (k, digit) in self.insert_at.iter_mut().enumerate() {
            *digit += 1;
            if *digit < n - k {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let perm = self.current();
        self.advance();
        Some(perm)
    }
}

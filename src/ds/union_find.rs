/*!
# Union-Find (Disjoint Set Union)

A union-find over arbitrary hashable elements. Elements are created lazily:
the first [`UnionFind::find`] of an unknown element registers it as its own
singleton set, so there is no up-front universe to declare.

Uses **path compression** (iterative, two passes, so deep parent chains cannot
overflow the call stack) and **union by rank**; any sequence of operations
runs in effectively constant amortized time per call.
*/

use std::hash::Hash;

use fxhash::FxHashMap;

/// A disjoint-set structure with lazily created elements.
///
/// # Examples
/// ```
/// use toolbox::ds::UnionFind;
///
/// let mut uf = UnionFind::new();
/// uf.union("a", "b");
/// assert!(uf.connected("a", "b"));
/// assert!(!uf.connected("a", "z"));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind<T>
where
    T: Clone + Eq + Hash,
{
    parent: FxHashMap<T, T>,
    rank: FxHashMap<T, u32>,
}

impl<T: Clone + Eq + Hash> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates an empty structure.
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
        }
    }

    /// Returns the representative of the set containing `item`, registering
    /// `item` as its own singleton set if it was never seen before.
    ///
    /// Applies full path compression: every node on the walked chain is
    /// re-parented directly onto the representative.
    pub fn find(&mut self, item: T) -> T {
        if !self.parent.contains_key(&item) {
            self.parent.insert(item.clone(), item.clone());
            self.rank.insert(item.clone(), 0);
            return item;
        }

        // first pass: locate the root
        let mut root = item.clone();
        loop {
            let parent = self.parent[&root].clone();
            if parent == root {
                break;
            }
            root = parent;
        }

        // second pass: compress the chain onto the root
        let mut current = item;
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// Unites the sets containing `x` and `y` (no-op if already united).
    ///
    /// Union by rank: the shallower tree is hung below the deeper one; on a
    /// rank tie the surviving root's rank increases by one.
    pub fn union(&mut self, x: T, y: T) {
        let xroot = self.find(x);
        let yroot = self.find(y);

        if xroot == yroot {
            return;
        }

        if self.rank[&xroot] < self.rank[&yroot] {
            self.parent.insert(xroot, yroot);
        } else {
            if self.rank[&xroot] == self.rank[&yroot] {
                *self.rank.get_mut(&xroot).unwrap() += 1;
            }
            self.parent.insert(yroot, xroot);
        }
    }

    /// Returns *true* if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: T, y: T) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of elements ever referenced.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if no element was ever referenced.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

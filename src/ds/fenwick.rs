/*!
# Fenwick Tree

A Fenwick tree (binary indexed tree) over an additive value type, supporting
point increments and prefix sums in O(log n). The backing array is 1-based
internally; the public interface uses 0-based element indices.
*/

use std::ops::{AddAssign, Sub};

use num::Zero;

/// A Fenwick tree for prefix sums over `n` elements, all starting at zero.
///
/// # Examples
/// ```
/// use toolbox::ds::FenwickTree;
///
/// let mut fenwick = FenwickTree::new(5);
/// fenwick.update(0, 3i64);
/// fenwick.update(2, 7);
///
/// assert_eq!(fenwick.query(2), 10);
/// assert_eq!(fenwick.range_query(1, 2), 7);
/// ```
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: Copy + Zero + AddAssign + Sub<Output = T>,
{
    /// Creates a tree over `n` zero-valued elements.
    pub fn new(n: usize) -> Self {
        Self {
            tree: vec![T::zero(); n + 1],
        }
    }

    /// Creates a tree initialized from `values` in O(n log n).
    pub fn from_values(values: &[T]) -> Self {
        let mut fenwick = Self::new(values.len());
        for (i, v) in values.iter().enumerate() {
            fenwick.update(i, *v);
        }
        fenwick
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    /// Returns *true* if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 1
    }

    /// Adds `delta` to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn update(&mut self, index: usize, delta: T) {
        assert!(index < self.len(), "index {index} out of bounds");

        let mut i = index + 1;
        while i < self.tree.len() {
            self.tree[i] += delta;
            i += lowbit(i);
        }
    }

    /// Returns the prefix sum over `0..=index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn query(&self, index: usize) -> T {
        assert!(index < self.len(), "index {index} out of bounds");

        let mut acc = T::zero();
        let mut i = index + 1;
        while i > 0 {
            acc += self.tree[i];
            i -= lowbit(i);
        }
        acc
    }

    /// Returns the sum of all elements in the inclusive range `left..=right`.
    ///
    /// # Panics
    /// Panics if `left > right` or `right >= self.len()`.
    pub fn range_query(&self, left: usize, right: usize) -> T {
        assert!(left <= right, "range start {left} after end {right}");

        if left == 0 {
            self.query(right)
        } else {
            self.query(right) - self.query(left - 1)
        }
    }
}

/// Lowest set bit of `i`, the span each Fenwick node covers.
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

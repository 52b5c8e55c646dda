/*!
# Segment Tree

An iterative segment tree over a fixed-length array, parameterized by an
associative combine function and its identity element. Point updates and
half-open range queries both run in O(log n).

The tree is laid out in a flat array of size `2 * size` where `size` is the
smallest power of two holding the input; leaves live at `size..size + len` and
internal node `i` combines its children `2i` and `2i + 1`.
*/

/// A segment tree supporting point updates and range queries.
///
/// # Examples
/// ```
/// use toolbox::ds::SegmentTree;
///
/// let mut tree = SegmentTree::new(&[1, 3, 5, 7, 9, 11], |a, b| a + b, 0);
/// assert_eq!(tree.query(1, 4), 15);
///
/// tree.update(2, 10);
/// assert_eq!(tree.query(1, 4), 20);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    len: usize,
    size: usize,
    tree: Vec<T>,
    combine: F,
    identity: T,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds a tree over `values` in O(n).
    ///
    /// `combine` must be associative and `identity` must be its neutral
    /// element, otherwise query results are meaningless.
    pub fn new(values: &[T], combine: F, identity: T) -> Self {
        let len = values.len();
        let size = len.next_power_of_two().max(1);
        let mut tree = vec![identity.clone(); 2 * size];

        for (i, v) in values.iter().enumerate() {
            tree[size + i] = v.clone();
        }
        for i in (1..size).rev() {
            tree[i] = combine(&tree[2 * i], &tree[2 * i + 1]);
        }

        Self {
            len,
            size,
            tree,
            combine,
            identity,
        }
    }

    /// Returns the number of elements the tree was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the tree was built over an empty slice.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn get(&self, index: usize) -> &T {
        assert!(index < self.len, "index {index} out of bounds");
        &self.tree[self.size + index]
    }

    /// Sets the element at `index` to `value` and recomputes all ancestors.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn update(&mut self, index: usize, value: T) {
        assert!(index < self.len, "index {index} out of bounds");

        let mut i = self.size + index;
        self.tree[i] = value;
        while i > 1 {
            i /= 2;
            let combined = (self.combine)(&self.tree[2 * i], &self.tree[2 * i + 1]);
            self.tree[i] = combined;
        }
    }

    /// Combines all elements in the half-open range `left..right`.
    ///
    /// Returns the identity element for an empty range.
    ///
    /// # Panics
    /// Panics if `right > self.len()` or `left > right`.
    pub fn query(&self, left: usize, right: usize) -> T {
        assert!(right <= self.len, "range end {right} out of bounds");
        assert!(left <= right, "range start {left} after end {right}");

        let mut acc = self.identity.clone();
        let mut l = self.size + left;
        let mut r = self.size + right;

        while l < r {
            if l % 2 == 1 {
                acc = (self.combine)(&acc, &self.tree[l]);
                l += 1;
            }
            if r % 2 == 1 {
                r -= 1;
                acc = (self.combine)(&acc, &self.tree[r]);
            }
            l /= 2;
            r /= 2;
        }

        acc
    }
}

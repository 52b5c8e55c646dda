/*!
# Priority Queue

An array-backed binary **min-heap** over `(key, item)` pairs. The key is
computed once per push by a caller-supplied projection, and only needs to be
`PartialOrd` — which makes `f64` priorities work, something
`std::collections::BinaryHeap` cannot offer without a wrapper type.

Ties between equal keys are broken arbitrarily; if a stable order among equal
keys matters, fold a secondary criterion into the key itself.
*/

use std::cmp::Ordering;

/// A binary min-heap keyed by a projection function.
///
/// # Examples
/// ```
/// use toolbox::ds::PriorityQueue;
///
/// // a max-heap over integers, by negating the key
/// let mut pq = PriorityQueue::new(|x: &i32| -x);
/// pq.push(5);
/// pq.push(1);
/// pq.push(3);
///
/// assert_eq!(pq.pop(), Some(5));
/// assert_eq!(pq.peek(), Some(&3));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, K, F>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    data: Vec<(K, T)>,
    key: F,
}

impl<T, K, F> PriorityQueue<T, K, F>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    /// Creates an empty queue with the given key projection.
    pub fn new(key: F) -> Self {
        Self {
            data: Vec::new(),
            key,
        }
    }

    /// Creates a queue containing `items`, pushing them one by one.
    pub fn with_items<I>(items: I, key: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new(key);
        for item in items {
            queue.push(item);
        }
        queue
    }

    /// Pushes an item onto the queue. O(log n).
    pub fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        self.data.push((key, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the item with the smallest key. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let (_, item) = self.data.pop()?;
        self.sift_down(0);
        Some(item)
    }

    /// Returns the item with the smallest key without removing it. O(1).
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|(_, item)| item)
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns *true* if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns *true* if the key at `i` orders strictly before the one at `j`.
    /// Incomparable keys (e.g. NaN) are treated as equal.
    fn is_before(&self, i: usize, j: usize) -> bool {
        matches!(
            self.data[i].0.partial_cmp(&self.data[j].0),
            Some(Ordering::Less)
        )
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.is_before(i, parent) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < self.data.len() && self.is_before(child, smallest) {
                    smallest = child;
                }
            }
            if smallest == i {
                return;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }
}

/*!
# Linked List

A singly linked list with head insertion, value-based removal, and lookup.
It exists for the O(1) head insertion and O(1) splice-out once a node is
found; for anything index-heavy, `Vec` is the better tool.
*/

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<Box<ListNode<T>>>,
}

/// A singly linked list.
///
/// # Examples
/// ```
/// use toolbox::ds::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_front(3);
/// list.push_front(2);
/// list.push_front(1);
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert!(list.remove(&2));
/// assert_eq!(list.to_vec(), vec![1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` at the front in O(1).
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Box::new(ListNode {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Collects the elements front to back into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            out.push(node.value.clone());
            cur = node.next.as_deref();
        }
        out
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first element equal to `value`. Returns *true* if one was
    /// found and removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cur = &mut self.head;
        loop {
            match cur {
                None => return false,
                Some(node) if node.value == *value => {
                    *cur = node.next.take();
                    self.len -= 1;
                    return true;
                }
                Some(node) => cur = &mut node.next,
            }
        }
    }

    /// Returns a reference to the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.value == *value {
                return Some(&node.value);
            }
            cur = node.next.as_deref();
        }
        None
    }

    /// Returns *true* if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds a list whose front-to-back order matches the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(value) = values.pop() {
            list.push_front(value);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_front_prepends() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_head() {
        let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
        assert!(list.remove(&1));
        assert_eq!(list.to_vec(), vec![2, 3]);
    }

    #[test]
    fn remove_middle_and_tail() {
        let mut list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        assert!(list.remove(&3));
        assert!(list.remove(&4));
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_missing_value() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert!(!list.remove(&9));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn remove_only_first_match() {
        let mut list: LinkedList<i32> = [5, 1, 5].into_iter().collect();
        assert!(list.remove(&5));
        assert_eq!(list.to_vec(), vec![1, 5]);
    }

    #[test]
    fn find_and_contains() {
        let list: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();

        assert_eq!(list.find(&"b"), Some(&"b"));
        assert!(list.contains(&"c"));
        assert!(!list.contains(&"d"));
    }

    #[test]
    fn empty_list() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        assert!(!list.remove(&1));
        assert_eq!(list.to_vec(), Vec::<i32>::new());
    }
}

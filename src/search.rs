/*!
# Binary Search

Binary search variants over sorted slices: exact lookup, lookup through a key
projection, and the two bound searches that bracket a run of equal elements.
All run in O(log n) and expect the slice to be sorted with respect to the
comparison used; on unsorted input the returned index is unspecified.
*/

use std::cmp::Ordering;

/// Searches a sorted slice for `target` and returns its index.
///
/// If `target` occurs multiple times, any of its indices may be returned.
///
/// # Examples
/// ```
/// use toolbox::search::binary_search;
///
/// let data = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&data, &5), Some(2));
/// assert_eq!(binary_search(&data, &4), None);
/// ```
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    binary_search_by_key(data, target, |x| x)
}

/// Searches a slice sorted by `key` for the element whose key equals
/// `target`, returning its index.
pub fn binary_search_by_key<'a, T, K, F>(data: &'a [T], target: &K, key: F) -> Option<usize>
where
    K: Ord + ?Sized + 'a,
    F: Fn(&'a T) -> &'a K,
{
    let mut lo = 0;
    let mut hi = data.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match key(&data[mid]).cmp(target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

/// Returns the index of the first element `>= target`, i.e. the leftmost
/// position where `target` could be inserted without breaking the order.
/// Returns `data.len()` if every element is smaller.
///
/// # Examples
/// ```
/// use toolbox::search::{lower_bound, upper_bound};
///
/// let data = [1, 2, 2, 2, 5];
/// assert_eq!(lower_bound(&data, &2), 1);
/// assert_eq!(upper_bound(&data, &2), 4);
/// assert_eq!(lower_bound(&data, &9), 5);
/// ```
pub fn lower_bound<T: Ord>(data: &[T], target: &T) -> usize {
    let mut lo = 0;
    let mut hi = data.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Returns the index of the first element `> target`, i.e. the rightmost
/// position where `target` could be inserted without breaking the order.
/// Returns `data.len()` if no element is greater.
pub fn upper_bound<T: Ord>(data: &[T], target: &T) -> usize {
    let mut lo = 0;
    let mut hi = data.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_element() {
        let data = [1, 3, 5, 7, 9, 11];
        for (i, x) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, x), Some(i));
        }
    }

    #[test]
    fn misses_absent_elements() {
        let data = [1, 3, 5, 7];
        for x in [0, 2, 4, 6, 8] {
            assert_eq!(binary_search(&data, &x), None);
        }
    }

    #[test]
    fn empty_slice() {
        assert_eq!(binary_search::<i32>(&[], &1), None);
        assert_eq!(lower_bound::<i32>(&[], &1), 0);
        assert_eq!(upper_bound::<i32>(&[], &1), 0);
    }

    #[test]
    fn by_key_projection() {
        let data = [(1, "one"), (4, "four"), (9, "nine")];
        assert_eq!(binary_search_by_key(&data, &4, |x| &x.0), Some(1));
        assert_eq!(binary_search_by_key(&data, &5, |x| &x.0), None);
    }

    #[test]
    fn by_key_with_unsized_key() {
        // keys projected as `str`, sorted lexicographically
        let data = [(String::from("ant"), 1), (String::from("bee"), 2)];
        assert_eq!(binary_search_by_key(&data, "bee", |x| x.0.as_str()), Some(1));
        assert_eq!(binary_search_by_key(&data, "cow", |x| x.0.as_str()), None);
    }

    #[test]
    fn bounds_bracket_equal_runs() {
        let data = [1, 2, 2, 2, 5];

        assert_eq!(lower_bound(&data, &2), 1);
        assert_eq!(upper_bound(&data, &2), 4);
        assert_eq!(&data[lower_bound(&data, &2)..upper_bound(&data, &2)], [2, 2, 2]);
    }

    #[test]
    fn bounds_on_absent_target_coincide() {
        let data = [1, 2, 2, 2, 5];

        assert_eq!(lower_bound(&data, &3), 4);
        assert_eq!(upper_bound(&data, &3), 4);
        assert_eq!(lower_bound(&data, &0), 0);
        assert_eq!(upper_bound(&data, &9), 5);
    }
}

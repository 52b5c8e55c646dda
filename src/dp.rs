/*!
# Dynamic Programming

Classic table-filling routines: longest common subsequence (length and an
actual witness sequence), longest strictly increasing subsequence, and the
0/1 knapsack. All use full O(nm) tables; inputs are expected to be small
enough that quadratic space is a non-issue.
*/

/// Returns the length of the longest common subsequence of `a` and `b`.
///
/// # Examples
/// ```
/// use toolbox::dp::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("ABCBDAB", "BDCABA"), 4);
/// ```
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    let table = lcs_table(
        &a.chars().collect::<Vec<_>>(),
        &b.chars().collect::<Vec<_>>(),
    );
    table[a.chars().count()][b.chars().count()]
}

/// Returns one longest common subsequence of `a` and `b`.
///
/// When several subsequences of maximal length exist, which one is returned
/// is unspecified but deterministic.
///
/// # Examples
/// ```
/// use toolbox::dp::lcs_sequence;
///
/// assert_eq!(lcs_sequence("ABCBDAB", "BDCABA").len(), 4);
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let table = lcs_table(&a, &b);

    // walk the table back from the corner, following the moves that built it
    let mut out = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            out.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    out.reverse();
    out.into_iter().collect()
}

/// `table[i][j]` is the LCS length of `a[..i]` and `b[..j]`.
fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    table
}

/// Returns the length of the longest strictly increasing subsequence.
///
/// # Examples
/// ```
/// use toolbox::dp::longest_increasing_subsequence;
///
/// assert_eq!(longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// ```
pub fn longest_increasing_subsequence<T: Ord>(data: &[T]) -> usize {
    // patience sorting: tails[k] is the smallest possible tail of an
    // increasing subsequence of length k + 1
    let mut tails: Vec<&T> = Vec::new();

    for x in data {
        match tails.binary_search(&x) {
            Ok(i) | Err(i) => {
                if i == tails.len() {
                    tails.push(x);
                } else {
                    tails[i] = x;
                }
            }
        }
    }

    tails.len()
}

/// Solves the 0/1 knapsack problem: picks a subset of items with total weight
/// at most `capacity` maximizing total value, and returns that value.
///
/// `values` and `weights` must have the same length.
///
/// # Examples
/// ```
/// use toolbox::dp::knapsack_01;
///
/// assert_eq!(knapsack_01(&[60, 100, 120], &[10, 20, 30], 50), 220);
/// ```
///
/// # Panics
/// Panics if `values.len() != weights.len()`.
pub fn knapsack_01(values: &[u64], weights: &[usize], capacity: usize) -> u64 {
    assert_eq!(
        values.len(),
        weights.len(),
        "every item needs a value and a weight"
    );

    // single-row table, iterated backwards so each item is used at most once
    let mut best = vec![0u64; capacity + 1];

    for (&value, &weight) in values.iter().zip(weights) {
        if weight > capacity {
            continue;
        }
        for cap in (weight..=capacity).rev() {
            best[cap] = best[cap].max(best[cap - weight] + value);
        }
    }

    best[capacity]
}

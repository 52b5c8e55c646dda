/*!
# Binary Trees

A plain binary tree node and the three depth-first traversal orders, each
returning the visited values as a `Vec`. The traversals run on explicit
stacks, so degenerate trees (long left or right spines) cannot overflow the
call stack.
*/

/// A binary tree node owning its subtrees.
///
/// # Examples
/// ```
/// use toolbox::trees::{in_order, TreeNode};
///
/// let tree = TreeNode::new(2)
///     .with_left(TreeNode::new(1))
///     .with_right(TreeNode::new(3));
///
/// assert_eq!(in_order(Some(&tree)), vec![&1, &2, &3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Attaches `child` as the left subtree.
    pub fn with_left(mut self, child: TreeNode<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attaches `child` as the right subtree.
    pub fn with_right(mut self, child: TreeNode<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

/// Visits left subtree, node, right subtree. On a binary search tree this
/// yields the values in sorted order.
pub fn in_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut cur = root;

    while cur.is_some() || !stack.is_empty() {
        // walk down the left spine, stacking ancestors
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }

        let node = stack.pop().unwrap();
        out.push(&node.value);
        cur = node.right.as_deref();
    }

    out
}

/// Visits node, left subtree, right subtree.
pub fn pre_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        // right first so the left subtree is popped first
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
    }

    out
}

/// Visits left subtree, right subtree, node.
pub fn post_order<T>(root: Option<&TreeNode<T>>) -> Vec<&T> {
    // node-right-left preorder, reversed
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = root.into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(&node.value);
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
    }

    out.reverse();
    out
}

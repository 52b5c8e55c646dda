/*!
# Trie

A prefix tree over `char` sequences. Each node maps characters to child nodes
and carries a flag marking ends of inserted words, so exact-word lookups and
prefix lookups are both O(length of the query).
*/

use fxhash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    terminal: bool,
}

/// A character-level prefix tree.
///
/// # Examples
/// ```
/// use toolbox::ds::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("apple");
///
/// assert!(trie.search("apple"));
/// assert!(!trie.search("app"));
/// assert!(trie.starts_with("app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns *true* if no words have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `word` into the trie. Inserting a word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Returns *true* if `word` was inserted as a complete word.
    pub fn search(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.terminal)
    }

    /// Returns *true* if any inserted word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }

    /// Walks the trie along `path`, returning the node it ends at.
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

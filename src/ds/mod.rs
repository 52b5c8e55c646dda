/*!
# Data Structures

Self-contained classic data structures. [`UnionFind`] and [`PriorityQueue`]
double as building blocks for the algorithms in [`crate::algo`] (Kruskal,
Dijkstra, A*); the rest stand on their own.
*/

mod fenwick;
mod linked_list;
mod priority_queue;
mod segment_tree;
mod trie;
mod union_find;

pub use fenwick::*;
pub use linked_list::*;
pub use priority_queue::*;
pub use segment_tree::*;
pub use trie::*;
pub use union_find::*;

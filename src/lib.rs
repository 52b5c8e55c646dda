/*!
`toolbox` is a library of classic data structures and algorithms built around
graphs whose nodes are arbitrary **hashable identifiers** (integers, strings,
tuples, ...) rather than dense `0..n` indices.

# Representation

The central type is [`graph::Graph<N>`]: an adjacency-list graph keyed by any
`N: Clone + Eq + Hash`, with an `f64` weight per directed edge (default `1.0`).
Nodes are created implicitly when an edge touches them, and neighbor lists keep
edge-insertion order.

# Algorithms

The [`algo`] module provides the classic graph routines on top of [`graph::Graph`]:

- BFS/DFS traversal iterators (`graph.bfs(start)`, `graph.dfs(start)`),
- topological sorting with cycle detection,
- Dijkstra, A* and Bellman-Ford shortest paths,
- Tarjan's strongly connected components as a resumable iterator,
- Kruskal's minimum spanning tree.

Where an algorithm produces a sequence of results (traversals, SCCs), it is
exposed as a lazy iterator.

# Data structures

The [`ds`] module holds the self-contained structures the algorithms build on
and a few classics in their own right: [`ds::UnionFind`], [`ds::PriorityQueue`]
(binary min-heap with a key projection, so `f64` priorities work),
[`ds::SegmentTree`], [`ds::FenwickTree`], [`ds::Trie`] and [`ds::LinkedList`].

# Everything else

- [`search`] — binary search variants over sorted slices,
- [`trees`] — binary tree nodes and the three depth-first traversal orders,
- [`dp`] — tabulated dynamic-programming routines (LCS, LIS, 0/1 knapsack),
- [`parsing`] — small file-parsing helpers (line lists, integer lists, grids,
  key-value files) with typed, line-numbered errors.

In most use-cases, `use toolbox::prelude::*;` suffices for your needs.
*/

pub mod algo;
pub mod dp;
pub mod ds;
pub mod graph;
pub mod parsing;
pub mod search;
pub mod trees;

/// `toolbox::prelude` includes the graph type, its algorithms, and all data structures.
pub mod prelude {
    pub use super::{algo::*, ds::*, graph::*};
}

/*!
# Graph Algorithms

This module provides the classic graph algorithms on top of [`Graph`](crate::graph::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use toolbox::{algo::*, graph::Graph};
```
and gain access to traversal, topological sorting, shortest paths, strongly
connected components and minimum spanning trees.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod mst;
mod scc;
mod shortest_path;
mod toposort;
mod traversal;

pub use scc::*;
pub use shortest_path::*;
pub use traversal::*;

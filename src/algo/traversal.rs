/*!
Graph traversal iterators.

A traversal is parameterized by its **frontier**: the container holding the
"to be visited" nodes. The container determines the order:

- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**

Both visit nodes in neighbor-list order: BFS explores level by level, DFS
descends fully into the first unvisited neighbor before touching the next one
(the order a recursive implementation would produce). Nodes unreachable from
the start are never yielded.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::graph::{Graph, NodeId};

/// Abstraction for the traversal frontier data structure.
pub trait Frontier<T> {
    /// Creates a new frontier initialized with a single node.
    fn init(start: T) -> Self;

    /// Removes and returns the next node to visit.
    fn pop(&mut self) -> Option<T>;

    /// Pushes the neighbors of the node just visited such that they are
    /// later popped in neighbor-list order relative to each other.
    fn extend_in_order<I: DoubleEndedIterator<Item = T>>(&mut self, iter: I);

    /// Returns the number of nodes currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> Frontier<T> for VecDeque<T> {
    fn init(start: T) -> Self {
        Self::from(vec![start])
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn extend_in_order<I: DoubleEndedIterator<Item = T>>(&mut self, iter: I) {
        self.extend(iter);
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn init(start: T) -> Self {
        vec![start]
    }

    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    /// Reversed, so the first neighbor ends up on top of the stack.
    fn extend_in_order<I: DoubleEndedIterator<Item = T>>(&mut self, iter: I) {
        self.extend(iter.rev());
    }

    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit plus the
/// set of nodes already visited. A node is marked visited when it is popped;
/// stale frontier duplicates are skipped at that point, which keeps the
/// visitation order identical to the textbook recursive formulation.
pub struct TraversalSearch<'a, N, S>
where
    N: NodeId,
    S: Frontier<N>,
{
    graph: &'a Graph<N>,
    visited: FxHashSet<N>,
    frontier: S,
}

/// A BFS iterator over the nodes reachable from a given starting node.
pub type Bfs<'a, N> = TraversalSearch<'a, N, VecDeque<N>>;

/// A DFS iterator over the nodes reachable from a given starting node.
pub type Dfs<'a, N> = TraversalSearch<'a, N, Vec<N>>;

impl<'a, N, S> TraversalSearch<'a, N, S>
where
    N: NodeId,
    S: Frontier<N>,
{
    /// Creates a new traversal over `graph` starting at `start`.
    ///
    /// The start node is yielded first even if it has no adjacency entry.
    pub fn new(graph: &'a Graph<N>, start: N) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            frontier: S::init(start),
        }
    }

    /// Returns *true* if `u` has already been visited.
    pub fn did_visit_node(&self, u: &N) -> bool {
        self.visited.contains(u)
    }
}

impl<N, S> Iterator for TraversalSearch<'_, N, S>
where
    N: NodeId,
    S: Frontier<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.frontier.pop()?;
            if !self.visited.insert(u.clone()) {
                continue;
            }

            self.frontier.extend_in_order(
                self.graph
                    .neighbor_slice(&u)
                    .iter()
                    .filter(|v| !self.visited.contains(*v))
                    .cloned(),
            );

            return Some(u);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // frontier entries may be stale duplicates, so nothing is guaranteed
        (0, None)
    }
}

impl<N: NodeId> Graph<N> {
    /// Returns an iterator that traverses the nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use toolbox::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_edge(0u32, 1);
    /// g.add_edge(1, 2);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    pub fn bfs(&self, start: N) -> Bfs<'_, N> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses the nodes reachable from `start`
    /// in **depth-first search (DFS) order**, descending into each neighbor
    /// before moving on to the next one.
    ///
    /// # Examples
    /// ```
    /// use toolbox::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_arc(0u32, 1);
    /// g.add_arc(0, 2);
    /// g.add_arc(1, 3);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 3, 2]);
    /// ```
    pub fn dfs(&self, start: N) -> Dfs<'_, N> {
        Dfs::new(self, start)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::graph::Graph;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    fn diamond() -> Graph<u32> {
        let mut graph = Graph::new();
        for (u, v) in [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)] {
            graph.add_edge(u, v);
        }
        graph
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();

        let order = graph.bfs(1).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(order[1..3], [2, 0]); // neighbor-list order of node 1
        assert_eq!(order[3..5], [4, 5]);
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_omits_unreachable() {
        let mut graph = diamond();
        graph.add_edge(7, 8);

        let order = graph.bfs(5).collect_vec();
        assert!(!order.contains(&7) && !order.contains(&8));
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn dfs_follows_neighbor_list_order() {
        let mut graph = Graph::new();
        graph.add_arc(0u32, 1);
        graph.add_arc(0, 4);
        graph.add_arc(1, 2);
        graph.add_arc(1, 3);
        graph.add_arc(4, 5);

        // plain recursion would visit 0, then fully explore 1, then 4
        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn dfs_on_shared_neighbor() {
        let mut graph = Graph::new();
        graph.add_arc(0u32, 1);
        graph.add_arc(0, 2);
        graph.add_arc(1, 2);

        // 2 is reached through 1 first and must not be repeated
        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn traversal_from_isolated_start() {
        let graph: Graph<u32> = Graph::new();
        assert_eq!(graph.bfs(3).collect_vec(), vec![3]);
        assert_eq!(graph.dfs(3).collect_vec(), vec![3]);
    }

    #[test]
    fn traversal_handles_duplicate_edges() {
        let mut graph = Graph::new();
        graph.add_edge(0u32, 1);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2]);
    }
}

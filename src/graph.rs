/*!
# Graph Representation

An adjacency-list graph over **hashable node identifiers**.

Unlike dense `0..n` representations, [`Graph`] accepts any `N: Clone + Eq +
Hash` as a node and creates nodes implicitly the first time an edge touches
them. Each neighbor list keeps edge-insertion order and permits duplicates;
each directed edge `(u, v)` carries an `f64` weight (default
[`DEFAULT_WEIGHT`]).

Edges come in two flavors:
- an **edge** is bidirectional and inserts both `(u, v)` and `(v, u)`,
- an **arc** is one-directional; its head may end up appearing only inside a
  neighbor list, never as an adjacency key (which is why [`Graph::nodes`]
  unions keys with neighbor-list members).
*/

use std::fmt::Debug;
use std::hash::Hash;

use fxhash::FxHashMap;
use itertools::Itertools;
use smallvec::SmallVec;
use thiserror::Error;

/// Marker trait for types usable as node identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so `u32`,
/// `String`, `(i64, i64)`, ... all work out of the box.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<N: Clone + Eq + Hash + Debug> NodeId for N {}

/// Weight assigned to edges inserted without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Neighbor lists are usually short, so keep the first few entries inline.
pub(crate) type NeighborList<N> = SmallVec<[N; 4]>;

/// Errors signalled by graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<N: Debug> {
    /// The node was never present as an adjacency key.
    #[error("node {0:?} is not part of the graph")]
    MissingNode(N),
    /// A back-edge onto an in-progress node was found, so the graph is no DAG.
    #[error("graph is not a DAG (cycle through node {0:?})")]
    Cycle(N),
    /// A cycle with negative total weight is reachable from the source.
    #[error("negative-weight cycle reachable via node {0:?}")]
    NegativeCycle(N),
}

/// An adjacency-list graph with per-edge `f64` weights.
///
/// Invariant: every `(u, v)` key of the weight map has `u` present as an
/// adjacency key with `v` contained in its neighbor list. All edit operations
/// below maintain this.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    adj: FxHashMap<N, NeighborList<N>>,
    weights: FxHashMap<(N, N), f64>,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adj: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }

    /// Adds the bidirectional edge `{u, v}` with weight [`DEFAULT_WEIGHT`].
    ///
    /// Both endpoints are created if absent. Adding the same edge twice
    /// duplicates the neighbor-list entries (and overwrites the weight).
    pub fn add_edge(&mut self, u: N, v: N) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Adds the bidirectional edge `{u, v}` with weight `w`.
    pub fn add_weighted_edge(&mut self, u: N, v: N, w: f64) {
        self.add_weighted_arc(u.clone(), v.clone(), w);
        self.add_weighted_arc(v, u, w);
    }

    /// Adds the directed arc `(u, v)` with weight [`DEFAULT_WEIGHT`].
    pub fn add_arc(&mut self, u: N, v: N) {
        self.add_weighted_arc(u, v, DEFAULT_WEIGHT);
    }

    /// Adds the directed arc `(u, v)` with weight `w`.
    ///
    /// Only `u` is created as an adjacency key; `v` may remain visible solely
    /// through `u`'s neighbor list.
    pub fn add_weighted_arc(&mut self, u: N, v: N, w: f64) {
        self.adj.entry(u.clone()).or_default().push(v.clone());
        self.weights.insert((u, v), w);
    }

    /// Removes the bidirectional edge `{u, v}`: both arcs and both weight
    /// entries. No-op for anything that is absent.
    pub fn remove_edge(&mut self, u: &N, v: &N) {
        self.remove_arc(u, v);
        self.remove_arc(v, u);
    }

    /// Removes the directed arc `(u, v)`: strips **all** occurrences of `v`
    /// from `u`'s neighbor list and deletes the `(u, v)` weight entry.
    /// No-op if `u` is not an adjacency key or the arc does not exist.
    pub fn remove_arc(&mut self, u: &N, v: &N) {
        if let Some(nbs) = self.adj.get_mut(u) {
            nbs.retain(|x| x != v);
        }
        self.weights.remove(&(u.clone(), v.clone()));
    }

    /// Removes node `u` entirely: its own adjacency entry, every occurrence
    /// of `u` in other neighbor lists, and every weight entry mentioning `u`
    /// in either position.
    ///
    /// Returns [`GraphError::MissingNode`] if `u` was never an adjacency key;
    /// callers that want silent semantics can ignore the result.
    pub fn remove_node(&mut self, u: &N) -> Result<(), GraphError<N>> {
        if self.adj.remove(u).is_none() {
            return Err(GraphError::MissingNode(u.clone()));
        }

        for nbs in self.adj.values_mut() {
            nbs.retain(|x| x != u);
        }
        self.weights.retain(|(a, b), _| a != u && b != u);

        Ok(())
    }

    /// Returns an iterator over all nodes: the set union of adjacency keys
    /// and all neighbor-list members. The iteration order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adj
            .keys()
            .chain(self.adj.values().flatten())
            .unique()
    }

    /// Returns the number of distinct nodes.
    pub fn number_of_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of weight entries, i.e. directed arcs
    /// (a bidirectional edge counts twice).
    pub fn number_of_arcs(&self) -> usize {
        self.weights.len()
    }

    /// Returns *true* if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Returns *true* if `u` appears anywhere in the graph, either as an
    /// adjacency key or inside a neighbor list.
    pub fn contains_node(&self, u: &N) -> bool {
        self.adj.contains_key(u) || self.adj.values().any(|nbs| nbs.contains(u))
    }

    /// Returns an iterator over the neighbors of `u` in edge-insertion order.
    /// Empty if `u` has no outgoing arcs.
    pub fn neighbors_of(&self, u: &N) -> impl Iterator<Item = &N> + '_ {
        self.neighbor_slice(u).iter()
    }

    /// The neighbor list of `u` as a slice (empty if `u` is no adjacency key).
    pub(crate) fn neighbor_slice(&self, u: &N) -> &[N] {
        self.adj.get(u).map_or(&[], |nbs| nbs.as_slice())
    }

    /// Returns the number of outgoing arcs of `u`, counting duplicates.
    pub fn degree_of(&self, u: &N) -> usize {
        self.neighbor_slice(u).len()
    }

    /// Returns the weight of the arc `(u, v)`, or `None` if it does not exist.
    pub fn weight(&self, u: &N, v: &N) -> Option<f64> {
        self.weights.get(&(u.clone(), v.clone())).copied()
    }

    /// Returns *true* if the arc `(u, v)` exists.
    pub fn has_arc(&self, u: &N, v: &N) -> bool {
        self.neighbor_slice(u).contains(v)
    }

    /// Returns an iterator over all weighted arcs `(u, v, w)`.
    pub fn arcs(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.weights.iter().map(|((u, v), w)| (u, v, *w))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn sorted_nodes(graph: &Graph<u32>) -> Vec<u32> {
        graph.nodes().copied().sorted().collect_vec()
    }

    #[test]
    fn add_edge_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge(1u32, 2);

        assert_eq!(sorted_nodes(&graph), vec![1, 2]);
        assert!(graph.has_arc(&1, &2));
        assert!(graph.has_arc(&2, &1));
        assert_eq!(graph.weight(&1, &2), Some(DEFAULT_WEIGHT));
        assert_eq!(graph.weight(&2, &1), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn arc_head_is_only_visible_via_nodes() {
        let mut graph = Graph::new();
        graph.add_arc(1u32, 2);

        // 2 never became an adjacency key but must still be reported
        assert_eq!(sorted_nodes(&graph), vec![1, 2]);
        assert!(graph.contains_node(&2));
        assert_eq!(graph.degree_of(&2), 0);
        assert!(!graph.has_arc(&2, &1));
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_edge(1u32, 2);
        graph.add_weighted_edge(1, 2, 3.0);

        assert_eq!(graph.degree_of(&1), 2);
        // the weight entry is shared and takes the last value
        assert_eq!(graph.weight(&1, &2), Some(3.0));

        // remove_arc strips all occurrences at once
        graph.remove_arc(&1, &2);
        assert_eq!(graph.degree_of(&1), 0);
        assert_eq!(graph.weight(&1, &2), None);
    }

    #[test]
    fn remove_edge_is_noop_on_missing() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_edge(1, 2);

        graph.remove_edge(&1, &7);
        graph.remove_edge(&7, &8);
        assert!(graph.has_arc(&1, &2));

        graph.remove_edge(&1, &2);
        assert!(!graph.has_arc(&1, &2));
        assert!(!graph.has_arc(&2, &1));
        assert_eq!(graph.number_of_arcs(), 0);
    }

    #[test]
    fn remove_node_purges_every_trace() {
        let mut graph = Graph::new();
        graph.add_edge(1u32, 2);
        graph.add_edge(2, 3);
        graph.add_arc(4, 2);

        graph.remove_node(&2).unwrap();

        assert!(graph.nodes().all(|&u| u != 2));
        assert!(graph.arcs().all(|(u, v, _)| *u != 2 && *v != 2));
        assert_eq!(graph.degree_of(&1), 0);
        assert_eq!(graph.degree_of(&4), 0);
    }

    #[test]
    fn remove_missing_node_errs() {
        let mut graph = Graph::new();
        graph.add_edge(1u32, 2);

        assert_eq!(graph.remove_node(&9), Err(GraphError::MissingNode(9)));
        // an arc head that never became a key counts as missing too
        graph.add_arc(1, 5);
        assert_eq!(graph.remove_node(&5), Err(GraphError::MissingNode(5)));
    }

    #[test]
    fn string_nodes() {
        let mut graph = Graph::new();
        graph.add_weighted_edge("a".to_string(), "b".to_string(), 2.5);

        assert_eq!(graph.weight(&"a".into(), &"b".into()), Some(2.5));
        assert_eq!(graph.number_of_nodes(), 2);
    }
}

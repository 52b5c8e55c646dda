/*!
# Strongly Connected Components

Implementation of Tarjan's algorithm. It is designed as an iterator that emits
the nodes of one strongly connected component at a time. The order of nodes
within a component is non-deterministic; the components themselves come out in
reverse topological order of the condensation (i.e. if each SCC were
contracted into a single node).
*/

use std::iter::FusedIterator;

use fxhash::FxHashMap;

use crate::graph::{Graph, NodeId};

impl<N: NodeId> Graph<N> {
    /// Returns an iterator over the strongly connected components of the
    /// graph, each as a `Vec<N>`.
    ///
    /// Every node belongs to exactly one component; nodes not on any cycle
    /// form singleton components.
    ///
    /// # Examples
    /// ```
    /// use toolbox::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_arc(0, 1);
    /// graph.add_arc(1, 0);
    /// graph.add_arc(1, 2);
    ///
    /// let sccs = sort_components(graph.strongly_connected_components().collect());
    /// assert_eq!(sccs, vec![vec![0, 1], vec![2]]);
    /// ```
    pub fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, N> {
        StronglyConnectedComponents::new(self)
    }
}

pub struct StronglyConnectedComponents<'a, N: NodeId> {
    graph: &'a Graph<N>,
    idx: u32,

    states: FxHashMap<N, NodeState>,
    remaining: std::vec::IntoIter<N>,

    path_stack: Vec<N>,

    call_stack: Vec<StackFrame<'a, N>>,
}

impl<'a, N: NodeId> StronglyConnectedComponents<'a, N> {
    /// Construct the iterator for some graph
    pub fn new(graph: &'a Graph<N>) -> Self {
        Self {
            graph,
            idx: 0,
            states: FxHashMap::default(),
            remaining: graph.nodes().cloned().collect::<Vec<_>>().into_iter(),

            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
        }
    }

    /// Just like in a classic DFS spanning-forest computation, every node has
    /// to be visited at least once. `search` covers everything reachable from
    /// the current root; here we pick the next untouched node and start over.
    fn next_unvisited_node(&mut self) -> Option<N> {
        loop {
            let v = self.remaining.next()?;
            if !self.states.contains_key(&v) {
                self.push_node(v.clone(), None);
                return Some(v);
            }
        }
    }

    /// Put a pristine stack frame on the call stack. Roughly speaking, this is
    /// the first step of a recursive call of `search`.
    fn push_node(&mut self, node: N, parent: Option<N>) {
        self.call_stack.push(StackFrame {
            neighbors: self.graph.neighbor_slice(&node).iter(),
            node,
            parent,
            initial_stack_len: 0,
            first_call: true,
        });
    }

    fn search(&mut self) -> Option<Vec<N>> {
        /*
        Tarjan's algorithm is typically described in a recursive fashion
        similarly to DFS with some extra steps. This design has two issues:
         1.) We cannot easily build an iterator from it
         2.) For large graphs we get stack overflows

        To overcome these issues, we use the explicit call stack
        `self.call_stack` that simulates recursive calls. On first visit of a
        node v it is assigned a "DFS rank"ish index and additionally the same
        low_link value. This value stores the smallest known index of any node
        reachable from v. We then process all of its neighbors (which may
        trigger recursive calls). Eventually, all nodes in an SCC will have the
        same low_link and the unique node with this index becomes the
        arbitrary representative of this SCC (known as root).

        The key design is that the whole computation is wrapped in a `while`
        loop and all state (including neighbor iterators) is stored in
        `self.call_stack`. So we can either continue execution directly with
        another iteration, or pause processing, return a component and resume
        by reentering the function.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            if frame.first_call {
                frame.first_call = false;
                frame.initial_stack_len = self.path_stack.len();

                self.states
                    .insert(frame.node.clone(), NodeState::visit(self.idx));
                self.idx += 1;

                self.path_stack.push(frame.node.clone());
            }

            while let Some(w) = frame.neighbors.next() {
                match self.states.get(w) {
                    None => {
                        let (w, v) = (w.clone(), frame.node.clone());
                        self.push_node(w, Some(v));
                        continue 'recurse;
                    }
                    Some(w_state) if w_state.on_stack => {
                        let w_index = w_state.index;
                        self.states
                            .get_mut(&frame.node)
                            .unwrap()
                            .try_lower_link(w_index);
                    }
                    Some(_) => {}
                }
            }

            let frame = self.call_stack.pop().unwrap();
            let state = self.states[&frame.node];

            if let Some(parent) = &frame.parent {
                self.states
                    .get_mut(parent)
                    .unwrap()
                    .try_lower_link(state.low_link);
            }

            if state.is_root() {
                // produce a component descriptor and clean up the path stack
                // while doing so
                let component = self.path_stack.split_off(frame.initial_stack_len);

                for w in &component {
                    self.states.get_mut(w).unwrap().on_stack = false;
                }

                debug_assert_eq!(*component.first().unwrap(), frame.node);

                return Some(component);
            }
        }

        None
    }
}

impl<'a, N: NodeId> Iterator for StronglyConnectedComponents<'a, N> {
    type Item = Vec<N>;

    /// Returns either a vector of nodes that form an SCC or None if no
    /// further SCC exists
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.search() {
                return Some(x);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<'a, N: NodeId> FusedIterator for StronglyConnectedComponents<'a, N> {}

#[derive(Debug, Clone)]
struct StackFrame<'a, N> {
    node: N,
    parent: Option<N>,
    initial_stack_len: usize,
    first_call: bool,
    neighbors: std::slice::Iter<'a, N>,
}

#[derive(Debug, Clone, Copy)]
struct NodeState {
    on_stack: bool,
    index: u32,
    low_link: u32,
}

impl NodeState {
    fn visit(u: u32) -> Self {
        Self {
            on_stack: true,
            index: u,
            low_link: u,
        }
    }

    fn try_lower_link(&mut self, l: u32) {
        self.low_link = self.low_link.min(l);
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// Sorts the nodes in each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components<N: NodeId + Ord>(mut components: Vec<Vec<N>>) -> Vec<Vec<N>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn scc() {
        let mut graph = Graph::new();
        for (u, v) in [
            (0, 1),
            (1, 2),
            (1, 4),
            (1, 5),
            (2, 6),
            (2, 3),
            (3, 2),
            (3, 7),
            (4, 0),
            (4, 5),
            (5, 6),
            (6, 5),
            (7, 3),
            (7, 6),
        ] {
            graph.add_arc(u, v);
        }

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);
        assert!(sccs.iter().all(|scc| !scc.is_empty()));

        let sccs = sort_components(sccs);
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    fn scc_tree() {
        let mut graph = Graph::new();
        for (u, v) in [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)] {
            graph.add_arc(u, v);
        }

        let sccs = graph.strongly_connected_components().collect_vec();
        // in a directed tree each node is a strongly connected component
        assert_eq!(sccs.len(), 7);

        let sccs = sort_components(sccs);
        for (i, scc) in sccs.iter().enumerate() {
            assert_eq!(*scc, [i]);
        }
    }

    #[test]
    fn scc_self_loop() {
        let mut graph = Graph::new();
        graph.add_arc(0, 0);
        graph.add_arc(0, 1);

        let sccs = sort_components(graph.strongly_connected_components().collect_vec());
        assert_eq!(sccs, vec![vec![0], vec![1]]);
    }

    #[test]
    fn components_cover_all_nodes() {
        let mut graph = Graph::new();
        for (u, v) in [(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (5, 5)] {
            graph.add_arc(u, v);
        }

        let total: usize = graph
            .strongly_connected_components()
            .map(|scc| scc.len())
            .sum();
        assert_eq!(total, graph.number_of_nodes());
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep stacks
        let n = 10_000u32;
        let mut graph = Graph::new();
        for u in 0..n {
            graph.add_arc(u, (u + 1) % n);
        }

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);
    }

    #[test]
    fn reverse_topological_emission_order() {
        // 0 -> 1 -> 2 as three singletons: sinks must come out first
        let mut graph = Graph::new();
        graph.add_arc(0, 1);
        graph.add_arc(1, 2);

        let sccs = graph.strongly_connected_components().collect_vec();
        assert_eq!(sccs.len(), 3);

        let position = |node: &i32| sccs.iter().position(|scc| scc.contains(node)).unwrap();
        assert!(position(&2) < position(&1));
        assert!(position(&1) < position(&0));
    }
}

/*!
Topological ordering for directed acyclic graphs.

Uses the three-color DFS scheme: a node is either untouched, *in progress*
(somewhere on the current DFS path) or *done*. Meeting an in-progress node
again means the graph has a directed cycle and the sort fails.

The recursion is simulated with an explicit stack of `(node, neighbor
iterator)` frames, so arbitrarily deep graphs (e.g. long chains) cannot
overflow the call stack.
*/

use fxhash::FxHashMap;

use crate::graph::{Graph, GraphError, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

impl<N: NodeId> Graph<N> {
    /// Returns the nodes in a valid **topological order** (reverse postorder
    /// of a DFS over all nodes), or [`GraphError::Cycle`] if the graph
    /// contains a directed cycle (self-loops included).
    ///
    /// Every node of the graph appears exactly once in the result. The
    /// relative order of unrelated nodes is unspecified.
    ///
    /// # Examples
    /// ```
    /// use toolbox::graph::Graph;
    ///
    /// let mut g = Graph::new();
    /// g.add_arc("shirt", "tie");
    /// g.add_arc("tie", "jacket");
    ///
    /// let order = g.topological_sort().unwrap();
    /// assert_eq!(order, vec!["shirt", "tie", "jacket"]);
    /// ```
    pub fn topological_sort(&self) -> Result<Vec<N>, GraphError<N>> {
        let mut marks: FxHashMap<N, Mark> = FxHashMap::default();
        let mut order: Vec<N> = Vec::new();

        let roots: Vec<N> = self.nodes().cloned().collect();
        for root in roots {
            if marks.contains_key(&root) {
                continue;
            }

            marks.insert(root.clone(), Mark::InProgress);
            let mut stack = vec![(root.clone(), self.neighbor_slice(&root).iter())];

            while let Some(frame) = stack.last_mut() {
                let next = frame.1.next();
                match next {
                    Some(v) => match marks.get(v) {
                        Some(Mark::InProgress) => return Err(GraphError::Cycle(v.clone())),
                        Some(Mark::Done) => {}
                        None => {
                            marks.insert(v.clone(), Mark::InProgress);
                            let neighbors = self.neighbor_slice(v).iter();
                            stack.push((v.clone(), neighbors));
                        }
                    },
                    None => {
                        // neighbors exhausted: the node is finished
                        let (node, _) = stack.pop().unwrap();
                        marks.insert(node.clone(), Mark::Done);
                        order.push(node);
                    }
                }
            }
        }

        order.reverse();
        Ok(order)
    }

    /// Returns *true* if the directed graph contains no cycle.
    pub fn is_acyclic(&self) -> bool {
        self.topological_sort().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::graph::{Graph, GraphError};

    fn assert_valid_order<N: crate::graph::NodeId>(graph: &Graph<N>, order: &[N]) {
        let rank: std::collections::HashMap<&N, usize> =
            order.iter().enumerate().map(|(i, n)| (n, i)).collect();

        assert_eq!(order.len(), graph.number_of_nodes());
        for (u, v, _) in graph.arcs() {
            assert!(rank[u] < rank[v], "edge violates order");
        }
    }

    #[test]
    fn sorts_a_dag() {
        let mut graph = Graph::new();
        for (u, v) in [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)] {
            graph.add_arc(u as u32, v as u32);
        }

        let order = graph.topological_sort().unwrap();
        assert_valid_order(&graph, &order);
    }

    #[test]
    fn covers_disconnected_components() {
        let mut graph = Graph::new();
        graph.add_arc(0u32, 1);
        graph.add_arc(5, 6);

        let order = graph.topological_sort().unwrap();
        assert_valid_order(&graph, &order);
        assert_eq!(order.iter().copied().sorted().collect_vec(), vec![0, 1, 5, 6]);
    }

    #[test]
    fn rejects_cycle() {
        let mut graph = Graph::new();
        graph.add_arc(0u32, 1);
        graph.add_arc(1, 2);
        graph.add_arc(2, 0);

        assert!(matches!(
            graph.topological_sort(),
            Err(GraphError::Cycle(_))
        ));
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn rejects_self_loop() {
        let mut graph = Graph::new();
        graph.add_arc(0u32, 1);
        graph.add_arc(1, 1);

        assert_eq!(graph.topological_sort(), Err(GraphError::Cycle(1)));
    }

    #[test]
    fn bidirectional_edge_is_a_cycle() {
        let mut graph = Graph::new();
        graph.add_edge(0u32, 1);

        assert!(graph.topological_sort().is_err());
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n: u32 = 50_000;
        let mut graph = Graph::new();
        for u in 0..n - 1 {
            graph.add_arc(u, u + 1);
        }

        let order = graph.topological_sort().unwrap();
        assert_eq!(order.len(), n as usize);
        assert_eq!(order.first(), Some(&0));
        assert_eq!(order.last(), Some(&(n - 1)));
    }
}

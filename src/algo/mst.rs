/*!
# Minimum Spanning Tree

Kruskal's algorithm over the undirected view of the graph: edges are sorted by
weight and greedily added whenever they join two components, tracked by a
union-find structure. On a disconnected graph this yields a minimum spanning
forest.
*/

use std::cmp::Ordering;

use crate::{
    ds::UnionFind,
    graph::{Graph, NodeId},
};

impl<N: NodeId + Ord> Graph<N> {
    /// Computes a minimum spanning forest and returns its edges as
    /// `(u, v, weight)` triples with `u <= v`.
    ///
    /// The graph is treated as undirected: an arc `(u, v)` and its reverse
    /// `(v, u)` count as the same edge. Self-loops are skipped. For a
    /// connected graph on n nodes the result has exactly n - 1 edges.
    ///
    /// # Examples
    /// ```
    /// use toolbox::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_weighted_edge(0, 1, 1.0);
    /// graph.add_weighted_edge(1, 2, 2.0);
    /// graph.add_weighted_edge(0, 2, 3.0);
    ///
    /// let mst = graph.kruskal();
    /// assert_eq!(mst, vec![(0, 1, 1.0), (1, 2, 2.0)]);
    /// ```
    pub fn kruskal(&self) -> Vec<(N, N, f64)> {
        // normalize endpoint order so both directions of an edge coincide
        let mut edges: Vec<(N, N, f64)> = self
            .arcs()
            .map(|(u, v, w)| {
                if u <= v {
                    (u.clone(), v.clone(), w)
                } else {
                    (v.clone(), u.clone(), w)
                }
            })
            .collect();

        edges.sort_by(|a, b| {
            a.2.partial_cmp(&b.2)
                .unwrap_or(Ordering::Equal)
                .then_with(|| (&a.0, &a.1).cmp(&(&b.0, &b.1)))
        });
        edges.dedup_by(|a, b| a.0 == b.0 && a.1 == b.1);

        let mut forest = UnionFind::new();
        let mut mst = Vec::new();
        for (u, v, w) in edges {
            if u == v {
                continue;
            }
            if !forest.connected(u.clone(), v.clone()) {
                forest.union(u.clone(), v.clone());
                mst.push((u, v, w));
            }
        }

        mst
    }
}

/*!
# Shortest Paths

Single-source shortest path algorithms over the weighted adjacency list:

- [`Graph::dijkstra`] for non-negative weights, O((n + m) log n)
- [`Graph::a_star`] for point-to-point queries guided by a heuristic
- [`Graph::bellman_ford`] for graphs with negative weights, O(nm)

Dijkstra and A* use lazy deletion instead of a decrease-key operation: a node
may sit in the queue several times with outdated priorities, and all but the
first pop are skipped.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    ds::PriorityQueue,
    graph::{Graph, GraphError, NodeId},
};

/// Shortest-path distances from a single source node.
///
/// Nodes that were never reached report a distance of `f64::INFINITY`.
#[derive(Debug, Clone)]
pub struct Distances<N: NodeId> {
    dist: FxHashMap<N, f64>,
}

impl<N: NodeId> Distances<N> {
    /// Returns the distance to `node`, or `f64::INFINITY` if it is
    /// unreachable from the source.
    pub fn get(&self, node: &N) -> f64 {
        self.dist.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns *true* if `node` was reached from the source.
    pub fn is_reachable(&self, node: &N) -> bool {
        self.dist.contains_key(node)
    }

    /// Iterates over all reached nodes and their distances.
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.dist.iter().map(|(n, d)| (n, *d))
    }

    /// Returns the number of reached nodes.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns *true* if not even the source was reached.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

impl<N: NodeId> Graph<N> {
    /// Computes shortest-path distances from `source` to every reachable node
    /// using Dijkstra's algorithm.
    ///
    /// All arc weights must be non-negative; with negative weights the
    /// returned distances are meaningless (use [`Graph::bellman_ford`]
    /// instead).
    ///
    /// # Examples
    /// ```
    /// use toolbox::prelude::*;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_weighted_edge(1, 2, 1.0);
    /// graph.add_weighted_edge(2, 3, 1.0);
    /// graph.add_weighted_edge(1, 3, 5.0);
    ///
    /// let dist = graph.dijkstra(&1);
    /// assert_eq!(dist.get(&3), 2.0);
    /// ```
    pub fn dijkstra(&self, source: &N) -> Distances<N> {
        let mut dist = FxHashMap::default();
        dist.insert(source.clone(), 0.0);

        let mut finalized: FxHashSet<N> = FxHashSet::default();
        let mut queue = PriorityQueue::new(|entry: &(f64, N)| entry.0);
        queue.push((0.0, source.clone()));

        while let Some((d, u)) = queue.pop() {
            if !finalized.insert(u.clone()) {
                continue;
            }

            for v in self.neighbor_slice(&u) {
                if finalized.contains(v) {
                    continue;
                }

                let next = d + self.arc_weight(&u, v);
                if next < dist.get(v).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(v.clone(), next);
                    queue.push((next, v.clone()));
                }
            }
        }

        Distances { dist }
    }

    /// Computes a shortest path from `start` to `goal` using A* search.
    ///
    /// `heuristic` estimates the remaining distance to `goal` and must never
    /// overestimate it, otherwise the returned path may not be shortest. The
    /// zero heuristic degrades gracefully to Dijkstra.
    ///
    /// Returns the node sequence from `start` to `goal` inclusive, or `None`
    /// if `goal` is unreachable.
    pub fn a_star<H>(&self, start: &N, goal: &N, heuristic: H) -> Option<Vec<N>>
    where
        H: Fn(&N) -> f64,
    {
        let mut g_score = FxHashMap::default();
        g_score.insert(start.clone(), 0.0);

        let mut came_from: FxHashMap<N, N> = FxHashMap::default();

        let mut finalized: FxHashSet<N> = FxHashSet::default();
        let mut queue = PriorityQueue::new(|entry: &(f64, N)| entry.0);
        queue.push((heuristic(start), start.clone()));

        while let Some((_, u)) = queue.pop() {
            if u == *goal {
                return Some(reconstruct_path(&came_from, goal));
            }
            if !finalized.insert(u.clone()) {
                continue;
            }

            let g_u = g_score[&u];
            for v in self.neighbor_slice(&u) {
                if finalized.contains(v) {
                    continue;
                }

                let tentative = g_u + self.arc_weight(&u, v);
                if tentative < g_score.get(v).copied().unwrap_or(f64::INFINITY) {
                    g_score.insert(v.clone(), tentative);
                    came_from.insert(v.clone(), u.clone());
                    queue.push((tentative + heuristic(v), v.clone()));
                }
            }
        }

        None
    }

    /// Computes shortest-path distances from `source` using the Bellman-Ford
    /// algorithm, which tolerates negative arc weights.
    ///
    /// Returns [`GraphError::NegativeCycle`] if a negative-weight cycle is
    /// reachable from `source`, since no finite distances exist then.
    pub fn bellman_ford(&self, source: &N) -> Result<Distances<N>, GraphError<N>> {
        let mut dist = FxHashMap::default();
        dist.insert(source.clone(), 0.0);

        let n = self.number_of_nodes();
        for _ in 1..n {
            let mut changed = false;
            for (u, v, w) in self.arcs() {
                let Some(d) = dist.get(u).copied() else {
                    continue;
                };
                if d + w < dist.get(v).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(v.clone(), d + w);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // one more relaxation round: any improvement implies a negative cycle
        for (u, v, w) in self.arcs() {
            if let Some(d) = dist.get(u).copied() {
                if d + w < dist.get(v).copied().unwrap_or(f64::INFINITY) {
                    return Err(GraphError::NegativeCycle(u.clone()));
                }
            }
        }

        Ok(Distances { dist })
    }

    /// Weight of a known arc. Every arc in the adjacency list has an entry in
    /// the weight map.
    fn arc_weight(&self, u: &N, v: &N) -> f64 {
        self.weight(u, v).unwrap()
    }
}

/// Follows the predecessor chain from `goal` back to the start and reverses
/// it.
fn reconstruct_path<N: NodeId>(came_from: &FxHashMap<N, N>, goal: &N) -> Vec<N> {
    let mut path = vec![goal.clone()];
    let mut cur = goal;
    while let Some(prev) = came_from.get(cur) {
        path.push(prev.clone());
        cur = prev;
    }
    path.reverse();
    path
}

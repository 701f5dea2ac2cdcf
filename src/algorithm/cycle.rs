use crate::graph::*;
use log::{debug, trace};

/// A closed walk, listed from the vertex that closes it back to the vertex it closes onto.
pub type Cycle = Vec<VertexId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not discovered yet.
    White,
    /// On the current DFS path.
    Gray,
    /// Finished.
    Black,
}

/// Cycle detection and enumeration.
///
/// The three predicates answer different questions and are kept apart:
///
/// * [`has_cycle_directed`](CycleDetection::has_cycle_directed) and
///   [`has_cycle_coloring`](CycleDetection::has_cycle_coloring) look for a back edge
///   following arcs as directed. They always agree.
/// * [`has_cycle_undirected`](CycleDetection::has_cycle_undirected) ignores the edge
///   leading back to the DFS parent, so a plain undirected edge is not a cycle.
///
/// Self-loops are cycles for all three.
pub trait CycleDetection
where
    Self: QueryableGraph + Sized,
{
    /// DFS tracking which vertices are on the current path.
    ///
    /// Returns as soon as an arc reaches a vertex on the path.
    fn has_cycle_directed(&self) -> bool {
        let mut visited = vec![false; self.vertex_size()];
        let mut in_stack = vec![false; self.vertex_size()];
        for root in self.vertices() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            in_stack[root.to_raw()] = true;
            let mut stack = vec![(root, self.out_neighbors(&root))];
            while let Some((v, pending)) = stack.last_mut() {
                match pending.next() {
                    Some(n) => {
                        if in_stack[n.to_raw()] {
                            debug!("back edge {} -> {}", v.to_raw(), n.to_raw());
                            return true;
                        }
                        if !visited[n.to_raw()] {
                            visited[n.to_raw()] = true;
                            in_stack[n.to_raw()] = true;
                            stack.push((n, self.out_neighbors(&n)));
                        }
                    }
                    None => {
                        in_stack[v.to_raw()] = false;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// DFS carrying the parent of each vertex.
    ///
    /// Reaching a visited vertex other than the parent closes a cycle.
    /// An arc from a vertex to itself is always a cycle.
    fn has_cycle_undirected(&self) -> bool {
        let mut visited = vec![false; self.vertex_size()];
        for root in self.vertices() {
            if visited[root.to_raw()] {
                continue;
            }
            visited[root.to_raw()] = true;
            let mut stack = vec![(root, None, self.out_neighbors(&root))];
            while let Some((v, parent, pending)) = stack.last_mut() {
                match pending.next() {
                    Some(n) if n == *v => {
                        debug!("self-loop on {}", n.to_raw());
                        return true;
                    }
                    Some(n) => {
                        if !visited[n.to_raw()] {
                            visited[n.to_raw()] = true;
                            let v = *v;
                            stack.push((n, Some(v), self.out_neighbors(&n)));
                        } else if Some(n) != *parent {
                            debug!("cross edge {} -- {}", v.to_raw(), n.to_raw());
                            return true;
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Three-color DFS: an arc into a GRAY vertex is a back edge.
    fn has_cycle_coloring(&self) -> bool {
        let mut color = vec![Color::White; self.vertex_size()];
        for root in self.vertices() {
            if color[root.to_raw()] != Color::White {
                continue;
            }
            color[root.to_raw()] = Color::Gray;
            let mut stack = vec![(root, self.out_neighbors(&root))];
            while let Some((v, pending)) = stack.last_mut() {
                match pending.next() {
                    Some(n) => match color[n.to_raw()] {
                        Color::Gray => {
                            debug!("gray vertex {} reached from {}", n.to_raw(), v.to_raw());
                            return true;
                        }
                        Color::White => {
                            color[n.to_raw()] = Color::Gray;
                            stack.push((n, self.out_neighbors(&n)));
                        }
                        Color::Black => {}
                    },
                    None => {
                        color[v.to_raw()] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Enumerates cycles with a three-color DFS recording each vertex's DFS parent.
    ///
    /// Roots are taken in ascending order among undiscovered vertices.
    /// The neighbor equal to the current vertex's DFS parent is skipped,
    /// so an undirected tree edge is not reported as a two-vertex cycle.
    /// The same skip hides a directed two-vertex cycle `u -> v -> u`:
    /// such a graph has no enumerated cycle although
    /// [`has_cycle_directed`](CycleDetection::has_cycle_directed) holds.
    /// When vertex `p` reaches a GRAY vertex `u`, the cycle `[p, parent(p), ..., u]`
    /// is recorded and the search goes on.
    ///
    /// Cycles are not deduplicated, and a cycle is found only through the back edge
    /// the DFS happens to take, so the result depends on adjacency order.
    ///
    /// ```rust
    /// use graphwalk::{algorithm::*, graph::*};
    ///
    /// let g = Graph::from_edges(4, GraphOptions::default(), [(0, 1), (1, 2), (2, 0), (2, 3)])
    ///     .unwrap();
    /// assert_eq!(g.find_all_cycles(), vec![vec![VertexId(2), VertexId(1), VertexId(0)]]);
    /// ```
    fn find_all_cycles(&self) -> Vec<Cycle> {
        let mut res = vec![];
        let mut color = vec![Color::White; self.vertex_size()];
        let mut parents: Vec<Option<VertexId>> = vec![None; self.vertex_size()];
        for root in self.vertices() {
            if color[root.to_raw()] != Color::White {
                continue;
            }
            color[root.to_raw()] = Color::Gray;
            let mut stack = vec![(root, self.out_neighbors(&root))];
            while let Some((v, pending)) = stack.last_mut() {
                let v = *v;
                match pending.next() {
                    Some(n) if Some(n) == parents[v.to_raw()] => {}
                    Some(n) => match color[n.to_raw()] {
                        Color::Gray => {
                            let cycle = close_cycle(&parents, v, n);
                            trace!("cycle {:?}", cycle);
                            res.push(cycle);
                        }
                        Color::White => {
                            parents[n.to_raw()] = Some(v);
                            color[n.to_raw()] = Color::Gray;
                            stack.push((n, self.out_neighbors(&n)));
                        }
                        Color::Black => {}
                    },
                    None => {
                        color[v.to_raw()] = Color::Black;
                        stack.pop();
                    }
                }
            }
        }
        debug!("found {} cycles", res.len());
        res
    }
}

impl<G: QueryableGraph> CycleDetection for G {}

/// Walks DFS parents from `from` up to its ancestor `to`.
fn close_cycle(parents: &[Option<VertexId>], from: VertexId, to: VertexId) -> Cycle {
    let mut res = vec![from];
    let mut cur = from;
    while cur != to {
        match parents[cur.to_raw()] {
            Some(p) => {
                cur = p;
                res.push(p);
            }
            None => unreachable!("a gray vertex is an ancestor on the current DFS path"),
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn raw(cycles: &[Cycle]) -> Vec<Vec<usize>> {
        cycles
            .iter()
            .map(|c| c.iter().map(|v| v.to_raw()).collect())
            .collect()
    }

    fn directed(n: usize, edges: &[(usize, usize)]) -> Graph {
        let opts = GraphOptions::default().directed(true);
        Graph::from_edges(n, opts, edges.iter().copied()).unwrap()
    }

    fn undirected(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::from_edges(n, GraphOptions::default(), edges.iter().copied()).unwrap()
    }

    #[test]
    fn directed_with_back_edge_and_self_loop() {
        let g = directed(4, &[(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]);
        assert!(g.has_cycle_directed());
        assert!(g.has_cycle_coloring());
        assert_eq!(raw(&g.find_all_cycles()), vec![vec![2, 1, 0], vec![3]]);
    }

    #[test]
    fn directed_acyclic() {
        let g = directed(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (1, 4), (3, 4)]);
        assert!(!g.has_cycle_directed());
        assert!(!g.has_cycle_coloring());
        assert!(g.find_all_cycles().is_empty());
    }

    #[test]
    fn self_loop_alone() {
        for storage in [Storage::AdjacencyList, Storage::AdjacencyMatrix] {
            for directed in [true, false] {
                let opts = GraphOptions::default().directed(directed).storage(storage);
                let g = Graph::from_edges(2, opts, [(1, 1)]).unwrap();
                assert!(g.has_cycle_directed());
                assert!(g.has_cycle_undirected());
                assert!(g.has_cycle_coloring());
                assert_eq!(raw(&g.find_all_cycles()), vec![vec![1]]);
            }
        }
    }

    #[test]
    fn directed_two_cycle_is_not_enumerated() {
        let g = directed(2, &[(0, 1), (1, 0)]);
        assert!(g.has_cycle_directed());
        assert!(g.has_cycle_coloring());
        assert!(g.find_all_cycles().is_empty());
    }

    #[test]
    fn undirected_tree_is_acyclic() {
        let g = undirected(5, &[(0, 1), (0, 2), (1, 3), (1, 4)]);
        assert!(!g.has_cycle_undirected());
        assert!(g.find_all_cycles().is_empty());
        // each tree edge is a two-arc loop when followed as directed
        assert!(g.has_cycle_directed());
    }

    #[test]
    fn undirected_with_cycle() {
        let g = undirected(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 3)]);
        assert!(g.has_cycle_undirected());
        let g = undirected(4, &[(0, 1), (2, 3), (3, 0), (1, 2)]);
        assert!(g.has_cycle_undirected());
    }

    #[test]
    fn parallel_undirected_edges_form_a_cycle() {
        // the child skips both copies back to its parent, the parent does not
        let g = undirected(2, &[(0, 1), (0, 1)]);
        assert!(g.has_cycle_undirected());
    }

    #[test]
    fn cycles_of_sample_network() {
        let g = undirected(
            13,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 5),
                (3, 6),
                (4, 5),
                (2, 4),
                (6, 7),
                (5, 9),
                (4, 8),
                (9, 8),
                (9, 10),
                (10, 11),
                (10, 12),
                (11, 12),
            ],
        );
        assert_eq!(
            raw(&g.find_all_cycles()),
            vec![vec![4, 5, 3, 2], vec![9, 8, 4, 5], vec![12, 11, 10]]
        );
    }

    #[test]
    fn cycles_in_every_component() {
        let g = undirected(6, &[(0, 1), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(raw(&g.find_all_cycles()), vec![vec![5, 4, 3]]);
    }

    #[test]
    fn empty_graph() {
        let g = Graph::directed(0);
        assert!(!g.has_cycle_directed());
        assert!(!g.has_cycle_undirected());
        assert!(!g.has_cycle_coloring());
        assert!(g.find_all_cycles().is_empty());
    }

    #[quickcheck]
    fn directed_and_coloring_agree(ops: Ops) {
        let g = ops.build_list();
        assert_eq!(g.has_cycle_directed(), g.has_cycle_coloring());
    }

    #[quickcheck]
    fn directed_matches_petgraph(ops: Ops) {
        if !ops.directed {
            return;
        }
        let g = ops.build_list();
        let oracle = petgraph::algo::is_cyclic_directed(&ops.to_petgraph());
        assert_eq!(g.has_cycle_directed(), oracle);
    }

    #[quickcheck]
    fn undirected_simple_graphs_match_edge_count(ops: Ops) {
        if ops.directed {
            return;
        }
        let mut edges: Vec<_> = ops
            .edges
            .iter()
            .map(|(u, v)| (*u.min(v), *u.max(v)))
            .collect();
        edges.sort();
        edges.dedup();
        let simple =
            Graph::from_edges(ops.vertex_size, GraphOptions::default(), edges.iter().copied())
                .unwrap();
        // a simple graph is a forest iff |E| = |V| - #components
        let components = petgraph::algo::connected_components(&ops.to_petgraph());
        let has_loop = edges.iter().any(|(u, v)| u == v);
        let oracle = has_loop || edges.len() + components != ops.vertex_size;
        assert_eq!(simple.has_cycle_undirected(), oracle);
    }

    #[quickcheck]
    fn enumerated_cycles_are_closed_walks(ops: Ops) {
        let g = ops.build_list();
        for cycle in g.find_all_cycles() {
            assert!(!cycle.is_empty());
            let closing = (cycle[0], cycle[cycle.len() - 1]);
            // the walk goes back along DFS tree arcs, which lead from parent to child
            for w in cycle.windows(2) {
                assert!(g.out_neighbors(&w[1]).any(|n| n == w[0]));
            }
            assert!(g.out_neighbors(&closing.0).any(|n| n == closing.1));
        }
    }
}

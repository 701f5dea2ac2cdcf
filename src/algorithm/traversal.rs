use crate::{graph::*, Result};
use log::{debug, trace};
use std::collections::VecDeque;

/// Vertices visited from one start vertex of a whole-graph traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Position of this component in discovery order, starting at 0.
    pub id: usize,
    /// Vertices in visitation order.
    pub vertices: Vec<VertexId>,
}

/// Which depth-first order [`Traversal::dfs_all`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsOrder {
    /// See [`Traversal::dfs_iterative`].
    Iterative,
    /// See [`Traversal::dfs_recursive`].
    Recursive,
}

/// Breadth-first and depth-first visitation.
///
/// Single-source traversals fail with
/// [`GraphError::OutOfBounds`](crate::GraphError::OutOfBounds) if `start` is not a vertex.
/// Whole-graph traversals start from every unvisited vertex in ascending order
/// and share one visited set, so every vertex shows up exactly once.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Queue-based BFS.
    ///
    /// A vertex is marked as visited when it is enqueued, not when it is dequeued.
    /// Hence it is enqueued only once, through the first edge reaching it.
    fn bfs(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&start)?;
        let mut visited = vec![false; self.vertex_size()];
        let res = bfs_from(self, start, &mut visited);
        debug!("bfs from {} visited {} vertices", start.to_raw(), res.len());
        Ok(res)
    }

    fn bfs_all(&self) -> Vec<Component> {
        let res = exhaust(self, bfs_from);
        debug!("bfs over all vertices found {} components", res.len());
        res
    }

    /// Stack-based DFS.
    ///
    /// Vertices are marked when pushed and visited when popped.
    /// The last pushed neighbor is the first explored,
    /// so siblings come out in reverse of their adjacency order.
    ///
    /// ```rust
    /// use graphwalk::{algorithm::*, graph::*};
    ///
    /// let g = Graph::from_edges(
    ///     5,
    ///     GraphOptions::default(),
    ///     [(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)],
    /// )
    /// .unwrap();
    /// let trial: Vec<_> = g.dfs_iterative(VertexId(0)).unwrap().iter().map(|v| v.0).collect();
    /// assert_eq!(trial, vec![0, 2, 4, 1, 3]);
    /// let trial: Vec<_> = g.dfs_recursive(VertexId(0)).unwrap().iter().map(|v| v.0).collect();
    /// assert_eq!(trial, vec![0, 1, 3, 4, 2]);
    /// ```
    fn dfs_iterative(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&start)?;
        let mut visited = vec![false; self.vertex_size()];
        let res = dfs_iterative_from(self, start, &mut visited);
        debug!(
            "iterative dfs from {} visited {} vertices",
            start.to_raw(),
            res.len()
        );
        Ok(res)
    }

    /// Preorder DFS descending into each unvisited neighbor in adjacency order
    /// before moving on to the next sibling.
    ///
    /// Runs on an explicit stack of pending neighbor iterators,
    /// so long paths do not exhaust the call stack.
    fn dfs_recursive(&self, start: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(&start)?;
        let mut visited = vec![false; self.vertex_size()];
        let res = dfs_recursive_from(self, start, &mut visited);
        debug!(
            "recursive dfs from {} visited {} vertices",
            start.to_raw(),
            res.len()
        );
        Ok(res)
    }

    fn dfs_all(&self, order: DfsOrder) -> Vec<Component> {
        let res = match order {
            DfsOrder::Iterative => exhaust(self, dfs_iterative_from),
            DfsOrder::Recursive => exhaust(self, dfs_recursive_from),
        };
        debug!(
            "{:?} dfs over all vertices found {} components",
            order,
            res.len()
        );
        res
    }
}

impl<G: QueryableGraph> Traversal for G {}

fn exhaust<G, F>(graph: &G, mut from: F) -> Vec<Component>
where
    G: QueryableGraph,
    F: FnMut(&G, VertexId, &mut [bool]) -> Vec<VertexId>,
{
    let mut visited = vec![false; graph.vertex_size()];
    let mut res = vec![];
    for v in graph.vertices() {
        if !visited[v.to_raw()] {
            let vertices = from(graph, v, &mut visited);
            res.push(Component {
                id: res.len(),
                vertices,
            });
        }
    }
    res
}

fn bfs_from<G: QueryableGraph>(graph: &G, start: VertexId, visited: &mut [bool]) -> Vec<VertexId> {
    let mut res = vec![];
    let mut queue = VecDeque::new();
    visited[start.to_raw()] = true;
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        trace!("bfs visits {}", v.to_raw());
        res.push(v);
        for n in graph.out_neighbors(&v) {
            if !visited[n.to_raw()] {
                visited[n.to_raw()] = true;
                queue.push_back(n);
            }
        }
    }
    res
}

fn dfs_iterative_from<G: QueryableGraph>(
    graph: &G,
    start: VertexId,
    visited: &mut [bool],
) -> Vec<VertexId> {
    let mut res = vec![];
    let mut stack = vec![start];
    visited[start.to_raw()] = true;
    while let Some(v) = stack.pop() {
        trace!("iterative dfs visits {}", v.to_raw());
        res.push(v);
        for n in graph.out_neighbors(&v) {
            if !visited[n.to_raw()] {
                visited[n.to_raw()] = true;
                stack.push(n);
            }
        }
    }
    res
}

pub(crate) fn dfs_recursive_from<G: QueryableGraph>(
    graph: &G,
    start: VertexId,
    visited: &mut [bool],
) -> Vec<VertexId> {
    let mut res = vec![start];
    visited[start.to_raw()] = true;
    trace!("recursive dfs visits {}", start.to_raw());
    let mut stack = vec![graph.out_neighbors(&start)];
    while let Some(pending) = stack.last_mut() {
        match pending.next() {
            Some(n) => {
                if !visited[n.to_raw()] {
                    visited[n.to_raw()] = true;
                    trace!("recursive dfs visits {}", n.to_raw());
                    res.push(n);
                    stack.push(graph.out_neighbors(&n));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    res
}

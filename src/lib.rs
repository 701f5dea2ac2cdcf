//! Traversals, cycle detection, reachability and DFS numbering over small dense-indexed graphs.
//!
//! # Graphs
//!
//! Vertices are lightweight ID's, essentially `usize` in `[0, vertex_size)`.
//! The vertex count is fixed when a graph is created; only edges grow.
//! Two storages sit behind the same traits:
//!
//! * [`graph::AdjacencyListGraph`] keeps neighbors in insertion order, duplicates included.
//! * [`graph::AdjacencyMatrixGraph`] keeps a dense $|V| \times |V|$ grid and yields neighbors in ascending order.
//!
//! [`graph::Graph`] picks one of them at construction from [`graph::GraphOptions`].
//!
//! # Algorithms
//!
//! Algorithms are extension traits implemented for every [`graph::QueryableGraph`].
//! They borrow the graph immutably, keep their visit state to themselves,
//! and return results as data.
//!
//! ```rust
//! use graphwalk::{algorithm::*, graph::*};
//!
//! let mut g = Graph::undirected(5);
//! for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 4)] {
//!     g.add_edge(VertexId(u), VertexId(v)).unwrap();
//! }
//! let order: Vec<usize> = g.bfs(VertexId(0)).unwrap().iter().map(|v| v.to_raw()).collect();
//! assert_eq!(order, vec![0, 1, 2, 3, 4]);
//! assert!(g.has_cycle_undirected());
//! ```

mod error;
pub use self::error::*;

pub mod algorithm;
pub mod graph;

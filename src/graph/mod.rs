//! Graph storages and the traits algorithms work against.
//!
//! Vertices are dense indices in `[0, vertex_size)`, fixed at construction.
//! Any vertex argument outside that range is rejected with
//! [`GraphError::OutOfBounds`](crate::GraphError::OutOfBounds).

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod options;
pub use self::options::*;
mod adjacency_list;
pub use self::adjacency_list::*;
mod adjacency_matrix;
pub use self::adjacency_matrix::*;
#[allow(clippy::module_inception)]
mod graph;
pub use self::graph::*;
mod mapped_graph;
pub use self::mapped_graph::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;

use crate::graph::VertexId;
use thiserror::Error;

/// Errors returned by graph operations.
///
/// Every operation validates its vertex arguments before it touches storage
/// or allocates output, so a failed call leaves nothing half-done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index falls outside `[0, vertex_size)`.
    #[error("vertex {} is out of bounds for a graph of {} vertices", .vertex.to_raw(), .vertex_size)]
    OutOfBounds {
        vertex: VertexId,
        vertex_size: usize,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;

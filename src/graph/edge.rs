use super::VertexId;

/// A stored arc.
///
/// Undirected graphs store each non-loop edge as two arcs, one per direction.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.sink
    }
}

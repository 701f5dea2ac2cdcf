/// Which edge store backs a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Storage {
    /// Favors sparse graphs. See [`AdjacencyListGraph`](super::AdjacencyListGraph).
    #[default]
    AdjacencyList,
    /// Favors small dense graphs. See [`AdjacencyMatrixGraph`](super::AdjacencyMatrixGraph).
    AdjacencyMatrix,
}

/// Construction-time settings of a [`Graph`](super::Graph).
///
/// Defaults to an undirected, list-backed graph.
///
/// ```rust
/// use graphwalk::graph::*;
///
/// let opts = GraphOptions::default()
///     .directed(true)
///     .storage(Storage::AdjacencyMatrix);
/// let g = Graph::new(3, opts);
/// assert!(g.is_directed());
/// assert_eq!(g.storage(), Storage::AdjacencyMatrix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphOptions {
    pub directed: bool,
    pub storage: Storage,
}

impl GraphOptions {
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn storage(mut self, storage: Storage) -> Self {
        self.storage = storage;
        self
    }
}

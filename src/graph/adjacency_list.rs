use crate::{graph::*, Result};

/// A graph storing, for every vertex, its neighbors in insertion order.
///
/// |                 | Complexity                       |
/// | --------------- | -------------------------------- |
/// | `add_edge`      | amortized $O(1)$                 |
/// | `vertex_size`   | $O(1)$                           |
/// | `out_neighbors` | $O(1)$ per call to `.next`       |
/// | `edges`         | $O(\|V\| + \|E\|)$ in total      |
///
/// Duplicate edges are kept, so a neighbor may show up more than once.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph {
    directed: bool,
    adjacency: Vec<Vec<VertexId>>,
}

impl AdjacencyListGraph {
    pub fn new(vertex_size: usize, directed: bool) -> Self {
        Self {
            directed,
            adjacency: vec![vec![]; vertex_size],
        }
    }

    pub fn directed(vertex_size: usize) -> Self {
        Self::new(vertex_size, true)
    }

    pub fn undirected(vertex_size: usize) -> Self {
        Self::new(vertex_size, false)
    }

    /// Takes neighbor lists as they are. Every neighbor must be below `adjacency.len()`,
    /// and an undirected graph must already list both arcs of each edge.
    pub(crate) fn from_adjacency(directed: bool, adjacency: Vec<Vec<VertexId>>) -> Self {
        debug_assert!(adjacency
            .iter()
            .flatten()
            .all(|n| n.to_raw() < adjacency.len()));
        Self {
            directed,
            adjacency,
        }
    }
}

impl std::fmt::Debug for AdjacencyListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyListGraph {{")?;
        write!(f, "{:?}", self.debug())?;
        writeln!(f, "}}")
    }
}

impl GrowableGraph for AdjacencyListGraph {
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        self.check_vertex(&source)?;
        self.check_vertex(&sink)?;
        self.adjacency[source.to_raw()].push(sink);
        if !self.directed && source != sink {
            self.adjacency[sink.to_raw()].push(source);
        }
        Ok(())
    }
}

impl QueryableGraph for AdjacencyListGraph {
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.adjacency.get(v.to_raw()) {
            Some(ns) => Box::new(ns.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

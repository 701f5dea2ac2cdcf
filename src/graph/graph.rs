use crate::{graph::*, Result};

/// A graph whose storage is chosen when it is created.
///
/// Algorithms see it through [`QueryableGraph`] like any other graph,
/// so callers can switch storages without touching analysis code.
#[derive(Clone, PartialEq, Eq)]
pub enum Graph {
    List(AdjacencyListGraph),
    Matrix(AdjacencyMatrixGraph),
}

impl Graph {
    pub fn new(vertex_size: usize, options: GraphOptions) -> Self {
        match options.storage {
            Storage::AdjacencyList => {
                Self::List(AdjacencyListGraph::new(vertex_size, options.directed))
            }
            Storage::AdjacencyMatrix => {
                Self::Matrix(AdjacencyMatrixGraph::new(vertex_size, options.directed))
            }
        }
    }

    pub fn directed(vertex_size: usize) -> Self {
        Self::new(vertex_size, GraphOptions::default().directed(true))
    }

    pub fn undirected(vertex_size: usize) -> Self {
        Self::new(vertex_size, GraphOptions::default())
    }

    /// Builds a graph by inserting `edges` in order.
    ///
    /// Stops at the first out-of-bounds endpoint.
    pub fn from_edges<I>(vertex_size: usize, options: GraphOptions, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut res = Self::new(vertex_size, options);
        for (u, v) in edges {
            res.add_edge(VertexId::new(u), VertexId::new(v))?;
        }
        Ok(res)
    }

    pub fn storage(&self) -> Storage {
        match self {
            Self::List(_) => Storage::AdjacencyList,
            Self::Matrix(_) => Storage::AdjacencyMatrix,
        }
    }

    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.is_directed(),
            storage: self.storage(),
        }
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(g) => std::fmt::Debug::fmt(g, f),
            Self::Matrix(g) => std::fmt::Debug::fmt(g, f),
        }
    }
}

impl GrowableGraph for Graph {
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        match self {
            Self::List(g) => g.add_edge(source, sink),
            Self::Matrix(g) => g.add_edge(source, sink),
        }
    }
}

impl QueryableGraph for Graph {
    fn vertex_size(&self) -> usize {
        match self {
            Self::List(g) => g.vertex_size(),
            Self::Matrix(g) => g.vertex_size(),
        }
    }

    fn is_directed(&self) -> bool {
        match self {
            Self::List(g) => g.is_directed(),
            Self::Matrix(g) => g.is_directed(),
        }
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self {
            Self::List(g) => g.out_neighbors(v),
            Self::Matrix(g) => g.out_neighbors(v),
        }
    }
}

impl From<AdjacencyListGraph> for Graph {
    fn from(g: AdjacencyListGraph) -> Self {
        Self::List(g)
    }
}

impl From<AdjacencyMatrixGraph> for Graph {
    fn from(g: AdjacencyMatrixGraph) -> Self {
        Self::Matrix(g)
    }
}

use crate::{graph::*, GraphError, Result};

pub trait GrowableGraph {
    /// Inserts an edge.
    ///
    /// Directed graphs get the single arc `source -> sink`.
    /// Undirected graphs get both arcs, except that a self-loop is stored once.
    /// Fails with [`GraphError::OutOfBounds`] without touching the graph
    /// if either endpoint is not a vertex.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn is_directed(&self) -> bool;

    /// Neighbors of `v` without validation.
    ///
    /// Unknown vertices have no neighbors.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    fn check_vertex(&self, v: &VertexId) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::OutOfBounds {
                vertex: *v,
                vertex_size: self.vertex_size(),
            })
        }
    }

    /// Neighbors of `v` in storage order.
    fn neighbors(&self, v: &VertexId) -> Result<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(v)?;
        Ok(self.out_neighbors(v))
    }

    /// Every stored arc, grouped by source in vertex order.
    fn edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.vertices().flat_map(move |source| {
            self.out_neighbors(&source)
                .map(move |sink| Edge { source, sink })
        });
        Box::new(it)
    }

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

use crate::graph::*;
use bimap::BiHashMap;

/// This wraps a graph and how its vertices are mapped from another graph.
///
/// Left values of `vmap` are vertices of the source graph,
/// right values are vertices of `graph`.
#[derive(Clone)]
pub struct MappedGraph<G> {
    pub graph: G,
    pub vmap: BiHashMap<VertexId, VertexId>,
}

impl<G> MappedGraph<G> {
    /// The vertex in `graph` which `origin` was mapped to.
    pub fn mapped(&self, origin: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_left(origin).copied()
    }

    /// The vertex in the source graph which `v` came from.
    pub fn origin(&self, v: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_right(v).copied()
    }
}

impl<G> QueryableGraph for MappedGraph<G>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.out_neighbors(v)
    }
}

impl<G> std::fmt::Debug for MappedGraph<G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MappedGraph {{")?;
        for v in self.graph.vertices() {
            match self.origin(&v) {
                Some(o) => writeln!(f, "  {} (from {}):", v.to_raw(), o.to_raw())?,
                None => writeln!(f, "  {}:", v.to_raw())?,
            }
            for n in self.graph.out_neighbors(&v) {
                writeln!(f, "    -> {}", n.to_raw())?;
            }
        }
        writeln!(f, "}}")
    }
}

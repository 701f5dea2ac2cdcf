use crate::{algorithm::traversal::dfs_recursive_from, graph::*, Result};
use bimap::BiHashMap;
use log::debug;

pub trait CloneReachable
where
    Self: QueryableGraph + Sized,
{
    /// Copies the part of the graph reachable from `start` into a fresh list-backed graph.
    ///
    /// Cloned vertices are numbered in recursive DFS discovery order,
    /// so `start` becomes vertex 0.
    /// Every stored arc leaving a reached vertex is copied, duplicates included,
    /// and each cloned vertex lists its neighbors in the same order as the original,
    /// so traversals of the clone visit the mapped vertices in the same order.
    /// An undirected edge is copied as one edge. Cycles are fine.
    ///
    /// ```rust
    /// use graphwalk::{algorithm::*, graph::*};
    ///
    /// let opts = GraphOptions::default().directed(true);
    /// let g = Graph::from_edges(4, opts, [(2, 3), (3, 2), (0, 1)]).unwrap();
    /// let cloned = g.clone_reachable(VertexId(2)).unwrap();
    /// assert_eq!(cloned.vertex_size(), 2);
    /// assert_eq!(cloned.mapped(&VertexId(2)), Some(VertexId(0)));
    /// assert_eq!(cloned.origin(&VertexId(1)), Some(VertexId(3)));
    /// assert_eq!(cloned.mapped(&VertexId(0)), None);
    /// ```
    fn clone_reachable(&self, start: VertexId) -> Result<MappedGraph<AdjacencyListGraph>> {
        self.check_vertex(&start)?;
        let mut visited = vec![false; self.vertex_size()];
        let reached = dfs_recursive_from(self, start, &mut visited);

        let mut vmap = BiHashMap::with_capacity(reached.len());
        for (i, v) in reached.iter().enumerate() {
            vmap.insert(*v, VertexId::new(i));
        }
        // both arcs of an undirected edge are already listed, one at each end
        let adjacency: Vec<Vec<VertexId>> = reached
            .iter()
            .map(|v| {
                self.out_neighbors(v)
                    .map(|n| match vmap.get_by_left(&n) {
                        Some(x) => *x,
                        None => unreachable!("neighbors of reached vertices are reached"),
                    })
                    .collect()
            })
            .collect();
        let graph = AdjacencyListGraph::from_adjacency(self.is_directed(), adjacency);
        debug!(
            "cloned {} of {} vertices from {}",
            reached.len(),
            self.vertex_size(),
            start.to_raw()
        );
        Ok(MappedGraph { graph, vmap })
    }
}

impl<G: QueryableGraph> CloneReachable for G {}

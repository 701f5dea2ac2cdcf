use crate::{graph::*, Result};

/// A graph storing edges in a dense $|V| \times |V|$ grid.
///
/// |                 | Complexity                       |
/// | --------------- | -------------------------------- |
/// | `add_edge`      | $O(1)$                           |
/// | `vertex_size`   | $O(1)$                           |
/// | `out_neighbors` | $O(\|V\|)$ in total per vertex   |
/// | `edges`         | $O(\|V\|^2)$ in total            |
///
/// Neighbors come out in ascending order. Inserting an edge twice stores it once.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph {
    directed: bool,
    vertex_size: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrixGraph {
    /// # Panics
    ///
    /// If $|V|^2$ overflows `usize`.
    pub fn new(vertex_size: usize, directed: bool) -> Self {
        let cell_size = vertex_size
            .checked_mul(vertex_size)
            .expect("matrix size overflows usize");
        Self {
            directed,
            vertex_size,
            cells: vec![false; cell_size],
        }
    }

    pub fn directed(vertex_size: usize) -> Self {
        Self::new(vertex_size, true)
    }

    pub fn undirected(vertex_size: usize) -> Self {
        Self::new(vertex_size, false)
    }

    /// Whether the arc `source -> sink` is present.
    pub fn has_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.contains_vertex(source)
            && self.contains_vertex(sink)
            && self.cells[self.offset(source, sink)]
    }

    fn offset(&self, source: &VertexId, sink: &VertexId) -> usize {
        source.to_raw() * self.vertex_size + sink.to_raw()
    }
}

impl std::fmt::Debug for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrixGraph {{")?;
        for row in self.cells.chunks(self.vertex_size.max(1)) {
            let line: String = row.iter().map(|x| if *x { '1' } else { '0' }).collect();
            writeln!(f, "  {}", line)?;
        }
        writeln!(f, "}}")
    }
}

impl GrowableGraph for AdjacencyMatrixGraph {
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        self.check_vertex(&source)?;
        self.check_vertex(&sink)?;
        let off = self.offset(&source, &sink);
        self.cells[off] = true;
        if !self.directed {
            let off = self.offset(&sink, &source);
            self.cells[off] = true;
        }
        Ok(())
    }
}

impl QueryableGraph for AdjacencyMatrixGraph {
    fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let start = v.to_raw() * self.vertex_size;
        let row = &self.cells[start..start + self.vertex_size];
        let it = row
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(i, _)| VertexId::new(i));
        Box::new(it)
    }
}

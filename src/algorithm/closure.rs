use crate::graph::*;
use log::debug;

/// Which vertices reach which, as a dense $|V| \times |V|$ grid.
///
/// `is_reachable(i, j)` holds iff a directed path of length $\geq 0$ leads from `i` to `j`.
///
/// Its `Display` renders one line of `0`/`1` per source vertex.
#[derive(Clone, PartialEq, Eq)]
pub struct ReachabilityMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ReachabilityMatrix {
    fn new(size: usize) -> Self {
        let cell_size = size
            .checked_mul(size)
            .expect("matrix size overflows usize");
        Self {
            size,
            cells: vec![false; cell_size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `false` whenever either vertex is out of range.
    pub fn is_reachable(&self, source: &VertexId, sink: &VertexId) -> bool {
        source.to_raw() < self.size && sink.to_raw() < self.size && self.row(source)[sink.to_raw()]
    }

    /// Vertices reachable from `source`, in ascending order.
    pub fn reachable_from(&self, source: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if source.to_raw() >= self.size {
            return Box::new(std::iter::empty());
        }
        let it = self
            .row(source)
            .iter()
            .enumerate()
            .filter(|(_, r)| **r)
            .map(|(i, _)| VertexId::new(i));
        Box::new(it)
    }

    fn row(&self, source: &VertexId) -> &[bool] {
        let start = source.to_raw() * self.size;
        &self.cells[start..start + self.size]
    }

    fn row_mut(&mut self, source: &VertexId) -> &mut [bool] {
        let start = source.to_raw() * self.size;
        &mut self.cells[start..start + self.size]
    }
}

impl std::fmt::Display for ReachabilityMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for r in row {
                write!(f, "{}", if *r { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReachabilityMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ReachabilityMatrix {{")?;
        write!(f, "{}", self)?;
        writeln!(f, "}}")
    }
}

pub trait TransitiveClosure
where
    Self: QueryableGraph + Sized,
{
    /// Runs a DFS from every vertex, marking what it reaches in that vertex's row.
    ///
    /// A source is marked before its neighbors are explored,
    /// so every vertex reaches itself. $O(|V| \cdot (|V| + |E|))$.
    fn transitive_closure(&self) -> ReachabilityMatrix {
        let mut res = ReachabilityMatrix::new(self.vertex_size());
        for source in self.vertices() {
            let row = res.row_mut(&source);
            row[source.to_raw()] = true;
            let mut stack = vec![self.out_neighbors(&source)];
            while let Some(pending) = stack.last_mut() {
                match pending.next() {
                    Some(n) => {
                        if !row[n.to_raw()] {
                            row[n.to_raw()] = true;
                            stack.push(self.out_neighbors(&n));
                        }
                    }
                    None => {
                        stack.pop();
                    }
                }
            }
        }
        debug!("closure of {} vertices computed", self.vertex_size());
        res
    }
}

impl<G: QueryableGraph> TransitiveClosure for G {}

use crate::{graph::*, Result};
use log::{debug, trace};

/// DFS discovery and finish timestamps of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrePost {
    pub pre: usize,
    pub post: usize,
}

/// Pre/post numbers of the vertices reached by one DFS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrePostNumbers {
    numbers: Vec<Option<PrePost>>,
}

impl PrePostNumbers {
    /// `None` for vertices the DFS did not reach.
    pub fn get(&self, v: &VertexId) -> Option<PrePost> {
        self.numbers.get(v.to_raw()).copied().flatten()
    }

    /// Reached vertices with their numbers, in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, PrePost)> + '_ {
        self.numbers
            .iter()
            .enumerate()
            .filter_map(|(i, x)| x.map(|x| (VertexId::new(i), x)))
    }

    /// Whether `descendant` lies in the DFS subtree of `ancestor`.
    ///
    /// A vertex is its own ancestor. Unreached vertices have no ancestors.
    pub fn is_ancestor(&self, ancestor: &VertexId, descendant: &VertexId) -> bool {
        match (self.get(ancestor), self.get(descendant)) {
            (Some(a), Some(d)) => a.pre <= d.pre && d.post <= a.post,
            _ => false,
        }
    }
}

pub trait PrePostNumbering
where
    Self: QueryableGraph + Sized,
{
    /// Numbers the vertices reachable from `start` by a recursive-order DFS.
    ///
    /// One counter, starting at 1, is bumped when a vertex is entered (pre)
    /// and when all of its descendants are done (post).
    /// Thus intervals `[pre, post]` of a vertex and its descendants nest properly.
    ///
    /// ```rust
    /// use graphwalk::{algorithm::*, graph::*};
    ///
    /// let g = Graph::from_edges(3, GraphOptions::default().directed(true), [(0, 1)]).unwrap();
    /// let nums = g.pre_post_numbers(VertexId(0)).unwrap();
    /// assert_eq!(nums.get(&VertexId(0)), Some(PrePost { pre: 1, post: 4 }));
    /// assert_eq!(nums.get(&VertexId(1)), Some(PrePost { pre: 2, post: 3 }));
    /// assert_eq!(nums.get(&VertexId(2)), None);
    /// ```
    fn pre_post_numbers(&self, start: VertexId) -> Result<PrePostNumbers> {
        self.check_vertex(&start)?;
        let mut pre = vec![0; self.vertex_size()];
        let mut numbers = vec![None; self.vertex_size()];
        let mut visited = vec![false; self.vertex_size()];
        let mut time = 1;

        visited[start.to_raw()] = true;
        pre[start.to_raw()] = time;
        time += 1;
        let mut stack = vec![(start, self.out_neighbors(&start))];
        while let Some((v, pending)) = stack.last_mut() {
            let v = *v;
            match pending.next() {
                Some(n) => {
                    if !visited[n.to_raw()] {
                        visited[n.to_raw()] = true;
                        pre[n.to_raw()] = time;
                        time += 1;
                        stack.push((n, self.out_neighbors(&n)));
                    }
                }
                None => {
                    let x = PrePost {
                        pre: pre[v.to_raw()],
                        post: time,
                    };
                    time += 1;
                    trace!("{} numbered {:?}", v.to_raw(), x);
                    numbers[v.to_raw()] = Some(x);
                    stack.pop();
                }
            }
        }
        debug!(
            "numbered {} vertices from {}",
            (time - 1) / 2,
            start.to_raw()
        );
        Ok(PrePostNumbers { numbers })
    }
}

impl<G: QueryableGraph> PrePostNumbering for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::*, GraphError};
    use quickcheck_macros::quickcheck;

    #[test]
    fn sample() {
        let g = Graph::from_edges(
            7,
            GraphOptions::default().directed(true),
            [
                (1, 2),
                (2, 1),
                (2, 4),
                (4, 2),
                (1, 3),
                (3, 1),
                (3, 4),
                (1, 2),
                (4, 3),
                (3, 5),
                (5, 3),
                (5, 6),
                (6, 5),
            ],
        )
        .unwrap();
        let nums = g.pre_post_numbers(VertexId(1)).unwrap();
        let trial: Vec<_> = nums.iter().map(|(v, x)| (v.to_raw(), x.pre, x.post)).collect();
        let oracle = vec![
            (1, 1, 12),
            (2, 2, 11),
            (3, 4, 9),
            (4, 3, 10),
            (5, 5, 8),
            (6, 6, 7),
        ];
        assert_eq!(trial, oracle);
        assert_eq!(nums.get(&VertexId(0)), None);
        assert!(nums.is_ancestor(&VertexId(2), &VertexId(6)));
        assert!(!nums.is_ancestor(&VertexId(6), &VertexId(2)));
        assert!(!nums.is_ancestor(&VertexId(0), &VertexId(1)));
    }

    #[test]
    fn lone_vertex() {
        let g = Graph::undirected(1);
        let nums = g.pre_post_numbers(VertexId(0)).unwrap();
        assert_eq!(nums.get(&VertexId(0)), Some(PrePost { pre: 1, post: 2 }));
    }

    #[test]
    fn counter_restarts_per_call() {
        let g = Graph::from_edges(2, GraphOptions::default(), [(0, 1)]).unwrap();
        let first = g.pre_post_numbers(VertexId(0)).unwrap();
        let second = g.pre_post_numbers(VertexId(0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn start_out_of_bounds() {
        let g = Graph::directed(0);
        assert_eq!(
            g.pre_post_numbers(VertexId(0)),
            Err(GraphError::OutOfBounds {
                vertex: VertexId(0),
                vertex_size: 0
            })
        );
    }

    #[quickcheck]
    fn intervals_nest(ops: Ops, start: usize) {
        if ops.vertex_size == 0 {
            return;
        }
        let start = VertexId(start % ops.vertex_size);
        let g = ops.build_list();
        let nums = g.pre_post_numbers(start).unwrap();
        let reached = g.dfs_recursive(start).unwrap();
        assert_eq!(nums.iter().count(), reached.len());
        for (_, x) in nums.iter() {
            assert!(x.pre < x.post);
        }
        // preorder of the numbering is the recursive DFS order
        let mut by_pre: Vec<_> = nums.iter().collect();
        by_pre.sort_by_key(|(_, x)| x.pre);
        let by_pre: Vec<_> = by_pre.into_iter().map(|(v, _)| v).collect();
        assert_eq!(by_pre, reached);
        // no two intervals partially overlap
        for (_, a) in nums.iter() {
            for (_, b) in nums.iter() {
                let disjoint = a.post < b.pre || b.post < a.pre;
                let a_holds_b = a.pre <= b.pre && b.post <= a.post;
                let b_holds_a = b.pre <= a.pre && a.post <= b.post;
                let nested = a_holds_b || b_holds_a;
                assert!(disjoint || nested);
            }
        }
    }

    #[quickcheck]
    fn descendants_are_reachable(ops: Ops, start: usize) {
        if ops.vertex_size == 0 {
            return;
        }
        let start = VertexId(start % ops.vertex_size);
        let g = ops.build_list();
        let nums = g.pre_post_numbers(start).unwrap();
        let closure = g.transitive_closure();
        for (a, _) in nums.iter() {
            for (d, _) in nums.iter() {
                if nums.is_ancestor(&a, &d) {
                    assert!(closure.is_reachable(&a, &d));
                }
            }
        }
    }
}

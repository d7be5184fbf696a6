use super::{ensure_nodes, Generate};
use crate::graph::{GraphError, UndirectedGraph};

/// Generates a k-ary tree filled level by level.
/// The children of node `i` are `k * i + 1 ..= k * i + k`, as far as they exist.
pub struct KaryTree {
    order: usize,
    children: usize,
}

impl KaryTree {
    pub fn new(order: usize, children: usize) -> KaryTree {
        KaryTree { order, children }
    }
}

impl Generate for KaryTree {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        ensure_nodes(self.order)?;
        if self.children == 0 {
            return Err(GraphError::ZeroBranching);
        }

        let edges: Vec<_> = (1..self.order)
            .map(|child| ((child - 1) / self.children, child))
            .collect();

        UndirectedGraph::from_edges(self.order, &edges)
    }
}

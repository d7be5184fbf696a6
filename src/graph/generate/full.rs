use super::{ensure_nodes, Generate};
use crate::graph::{GraphError, UndirectedGraph};

/// Generates the complete graph, where every pair of distinct nodes shares one edge.
pub struct Full {
    order: usize,
}

impl Full {
    pub fn new(order: usize) -> Full {
        Full { order }
    }
}

impl Generate for Full {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        ensure_nodes(self.order)?;
        let edges: Vec<_> = (0..self.order)
            .flat_map(|i| (i + 1..self.order).map(move |j| (i, j)))
            .collect();

        UndirectedGraph::from_edges(self.order, &edges)
    }
}

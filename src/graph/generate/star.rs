use super::{ensure_nodes, Generate};
use crate::graph::{GraphError, UndirectedGraph};

/// Generates a star with node 0 in the centre.
pub struct Star {
    order: usize,
}

impl Star {
    pub fn new(order: usize) -> Star {
        Star { order }
    }
}

impl Generate for Star {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        ensure_nodes(self.order)?;
        let edges: Vec<_> = (1..self.order).map(|i| (0, i)).collect();

        UndirectedGraph::from_edges(self.order, &edges)
    }
}

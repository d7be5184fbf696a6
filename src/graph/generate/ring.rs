use super::{ensure_nodes, Generate};
use crate::graph::{GraphError, UndirectedGraph};

/// Generates a ring, either as an open path or closed into a cycle.
pub struct Ring {
    order: usize,
    circular: bool,
}

impl Ring {
    pub fn new(order: usize, circular: bool) -> Ring {
        Ring { order, circular }
    }
}

impl Generate for Ring {
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError> {
        ensure_nodes(self.order)?;
        let mut edges: Vec<_> = (1..self.order).map(|i| (i - 1, i)).collect();

        // Closing a ring of one or two nodes yields a self-loop or a parallel edge,
        // which keeps every node at degree two.
        if self.circular {
            edges.push((self.order - 1, 0));
        }

        UndirectedGraph::from_edges(self.order, &edges)
    }
}

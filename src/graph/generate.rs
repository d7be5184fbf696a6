mod full;
mod growing_random;
mod k_regular;
mod ring;
mod star;
mod tree;

pub use full::Full;
pub use growing_random::GrowingRandom;
pub use k_regular::KRegular;
pub use ring::Ring;
pub use star::Star;
pub use tree::KaryTree;

use crate::graph::{GraphError, UndirectedGraph};

/// A Generator for undirected graphs.
pub trait Generate {
    /// Generates a graph, or returns an error if the parameters admit none.
    fn generate(&mut self) -> Result<UndirectedGraph, GraphError>;
}

/// Every generator needs at least one node to work on.
fn ensure_nodes(order: usize) -> Result<(), GraphError> {
    if order == 0 {
        Err(GraphError::NoNodes)
    } else {
        Ok(())
    }
}

mod error;
pub mod export;
pub mod generate;
pub mod layout;
mod undirected_graph;

pub use error::GraphError;
pub use undirected_graph::UndirectedGraph;

pub type Edge<IndexType> = (IndexType, IndexType);

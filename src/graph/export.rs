mod dot;
mod edge_list;
mod error;
mod svg;

pub use dot::Dot;
pub use edge_list::{read_edge_list, EdgeList};
pub use error::FormatError;
pub use svg::SVG;

use crate::graph::UndirectedGraph;

/// An exporter for undirected graphs.
pub trait Export {
    /// Returns a String representation of the graph according to the export format used.
    fn export(&self, graph: &UndirectedGraph, name: &str) -> Result<String, FormatError>;
}

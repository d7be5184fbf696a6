use super::{Export, FormatError};
use crate::graph::UndirectedGraph;

/// Empty struct. Only implements Export trait functionalities.
pub struct Dot {}

impl Export for Dot {
    /// Returns a string representing the graph in Graphviz dot format.
    /// Every node is listed explicitly so isolated nodes survive the export.
    fn export(&self, graph: &UndirectedGraph, name: &str) -> Result<String, FormatError> {
        let mut out = format!("graph \"{}\" {{\n", name.replace('"', "\\\""));

        for node in graph.iter_node_ids() {
            out.push_str(&format!("\t{};\n", node));
        }

        for (from, to) in graph.iter_edges() {
            out.push_str(&format!("\t{} -- {};\n", from, to));
        }

        out.push('}');
        out.push('\n');
        Ok(out)
    }
}

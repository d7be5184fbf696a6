use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::TopologyError;
use crate::graph::export::read_edge_list;
use crate::graph::UndirectedGraph;

/// Summary of a graph read back from an edge list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListStats {
    pub nodes: usize,
    pub edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub connected: bool,
}

impl EdgeListStats {
    pub fn of(graph: &UndirectedGraph) -> Self {
        let degrees = graph.degree_sequence();
        EdgeListStats {
            nodes: graph.order(),
            edges: graph.size(),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            connected: graph.is_connected(),
        }
    }
}

impl fmt::Display for EdgeListStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes: {}", self.nodes)?;
        writeln!(f, "edges: {}", self.edges)?;
        writeln!(f, "min degree: {}", self.min_degree)?;
        writeln!(f, "max degree: {}", self.max_degree)?;
        write!(f, "connected: {}", self.connected)
    }
}

/// Reads an edge list file back into a graph.
/// The node count is inferred from the largest id, isolated trailing nodes are not counted.
pub fn load_edge_list(path: &Path) -> Result<UndirectedGraph, TopologyError> {
    let file = File::open(path).map_err(|source| TopologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = read_edge_list(BufReader::new(file)).map_err(|source| TopologyError::Format {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(UndirectedGraph::from_edge_list(&edges))
}

pub fn edge_list_stats(path: &Path) -> Result<EdgeListStats, TopologyError> {
    Ok(EdgeListStats::of(&load_edge_list(path)?))
}

use std::io::{Read, Write};

use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};

use super::{Export, FormatError};
use crate::graph::{Edge, UndirectedGraph};

/// Plain edge list export: one `"<from> <to>"` line per edge, no header.
pub struct EdgeList {}

impl EdgeList {
    /// Streams the edges of the graph in insertion order into the writer.
    pub fn write_to<W: Write>(graph: &UndirectedGraph, writer: W) -> Result<(), FormatError> {
        let mut out = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        for edge in graph.iter_edges() {
            out.serialize(edge)?;
        }

        out.flush()?;
        Ok(())
    }
}

impl Export for EdgeList {
    /// The name is not part of the format and is ignored.
    fn export(&self, graph: &UndirectedGraph, _name: &str) -> Result<String, FormatError> {
        let mut buf = Vec::with_capacity(graph.size() * 8);
        Self::write_to(graph, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Reads an edge list written by [`EdgeList`] back into its edges, keeping line order.
pub fn read_edge_list<R: Read>(reader: R) -> Result<Vec<Edge<usize>>, FormatError> {
    let mut input = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for record in input.deserialize() {
        let edge: Edge<usize> = record?;
        edges.push(edge);
    }

    Ok(edges)
}

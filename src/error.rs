use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::export::FormatError;
use crate::graph::GraphError;
use crate::topology::{TopologyKind, UnknownTopologyKind};

/// Everything that can make a topology export fail.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The topology selector did not name a known kind. Nothing was written.
    #[error(transparent)]
    InvalidTopologyKind(#[from] UnknownTopologyKind),
    /// The generator rejected the parameters for this kind.
    #[error("cannot build a {kind} topology on {node_count} nodes with degree parameter {degree}: {source}")]
    InvalidParameter {
        kind: TopologyKind,
        node_count: usize,
        degree: usize,
        #[source]
        source: GraphError,
    },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to format {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

//! Synthetic network topologies: generate a graph family, write its edge list, plot it.

pub mod cli;
pub mod config;
mod error;
pub mod exporter;
pub mod graph;
pub mod logging;
pub mod rng;
pub mod stats;
pub mod topology;
pub mod util;

pub use error::TopologyError;
pub use exporter::{export, RenderFormat, TopologyExporter, TopologyRequest};
pub use topology::{TopologyKind, UnknownTopologyKind};

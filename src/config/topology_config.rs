use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Fix;
use crate::exporter::{RenderFormat, TopologyRequest, DEFAULT_EDGE_LIST_PATH, DEFAULT_PLOT_PATH};
use crate::rng::os_random_seed;
use crate::topology::TopologyKind;

fn default_edge_list() -> PathBuf {
    PathBuf::from(DEFAULT_EDGE_LIST_PATH)
}

fn default_plot() -> PathBuf {
    PathBuf::from(DEFAULT_PLOT_PATH)
}

/// A topology described in a config file. The seed may be left out.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct TopologyConfig {
    pub nodes: usize,
    pub kind: TopologyKind,
    #[serde(default)]
    pub degree: usize,
    #[serde(default)]
    pub render: bool,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_edge_list")]
    pub edge_list: PathBuf,
    #[serde(default = "default_plot")]
    pub plot: PathBuf,
    #[serde(default)]
    pub format: RenderFormat,
}

/// A config whose seed is fixed, so running it twice gives the same graph.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct SeededTopology {
    pub nodes: usize,
    pub kind: TopologyKind,
    pub degree: usize,
    pub render: bool,
    pub seed: u64,
    pub edge_list: PathBuf,
    pub plot: PathBuf,
    pub format: RenderFormat,
}

impl Fix<SeededTopology> for TopologyConfig {
    fn to_fixed(&self) -> SeededTopology {
        SeededTopology {
            nodes: self.nodes,
            kind: self.kind,
            degree: self.degree,
            render: self.render,
            seed: self
                .seed
                .unwrap_or_else(|| (os_random_seed() >> 64) as u64),
            edge_list: self.edge_list.clone(),
            plot: self.plot.clone(),
            format: self.format,
        }
    }
}

impl TopologyConfig {
    /// Turns the config into a request, drawing a seed first if none was given.
    pub fn request(&self) -> TopologyRequest {
        self.to_fixed().request()
    }
}

impl SeededTopology {
    pub fn request(&self) -> TopologyRequest {
        TopologyRequest::new(self.nodes, self.kind, self.degree)
            .with_render(self.render)
            .with_seed(self.seed)
            .with_edge_list_path(&self.edge_list)
            .with_plot_path(&self.plot)
            .with_format(self.format)
    }
}

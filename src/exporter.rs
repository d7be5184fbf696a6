use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use oorandom::Rand64;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::error::TopologyError;
use crate::graph::export::{Dot, EdgeList, Export, SVG};
use crate::graph::generate::{Full, Generate, GrowingRandom, KRegular, KaryTree, Ring, Star};
use crate::graph::{GraphError, UndirectedGraph};
use crate::rng::{os_random_seed, rng64};
use crate::topology::TopologyKind;

pub const DEFAULT_EDGE_LIST_PATH: &str = "connlist.dat";
pub const DEFAULT_PLOT_PATH: &str = "ElFarol.svg";

/// File format of the rendered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Scalable vector graphics with a circular layout.
    Svg,
    /// Graphviz source, to be laid out by `dot` or `neato`.
    Dot,
}

impl Default for RenderFormat {
    fn default() -> Self {
        RenderFormat::Svg
    }
}

impl RenderFormat {
    fn exporter(&self) -> Box<dyn Export> {
        match self {
            Self::Svg => Box::new(SVG::default()),
            Self::Dot => Box::new(Dot {}),
        }
    }
}

/// Everything needed to generate one topology and write its artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyRequest {
    pub node_count: usize,
    pub kind: TopologyKind,
    /// Regular degree, branching factor or edges per new node, depending on the kind.
    pub degree: usize,
    /// Only rendered requests write a plot.
    pub render: bool,
    /// Seed for randomized kinds. A seed is drawn from the OS if missing.
    pub seed: Option<u64>,
    pub edge_list_path: PathBuf,
    pub plot_path: PathBuf,
    pub format: RenderFormat,
}

impl TopologyRequest {
    /// Creates an unrendered, unseeded request writing to the default paths.
    pub fn new(node_count: usize, kind: TopologyKind, degree: usize) -> Self {
        TopologyRequest {
            node_count,
            kind,
            degree,
            render: false,
            seed: None,
            edge_list_path: PathBuf::from(DEFAULT_EDGE_LIST_PATH),
            plot_path: PathBuf::from(DEFAULT_PLOT_PATH),
            format: RenderFormat::default(),
        }
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_edge_list_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.edge_list_path = path.into();
        self
    }

    pub fn with_plot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot_path = path.into();
        self
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }
}

/// Generates topologies and writes their edge list and plot.
///
/// Requests targeting the same paths are last-writer-wins. Files are replaced atomically,
/// so readers never observe a partially written artifact.
pub struct TopologyExporter {}

impl TopologyExporter {
    /// Builds the graph described by the request without touching the file system.
    pub fn generate(request: &TopologyRequest) -> Result<UndirectedGraph, TopologyError> {
        if !request.kind.uses_degree() && request.degree != 0 {
            warn!(
                kind = %request.kind,
                degree = request.degree,
                "degree parameter is ignored for this kind"
            );
        }

        let seed = request.seed.unwrap_or_else(|| {
            let seed = (os_random_seed() >> 64) as u64;
            if request.kind.is_randomized() {
                info!(seed, "no seed given, drew one from the operating system");
            }
            seed
        });
        let mut rng = rng64(u128::from(seed));

        build(request.kind, request.node_count, request.degree, &mut rng).map_err(|source| {
            TopologyError::InvalidParameter {
                kind: request.kind,
                node_count: request.node_count,
                degree: request.degree,
                source,
            }
        })
    }

    /// Generates the graph, writes its edge list and, if requested, its plot.
    #[instrument(
        skip_all,
        fields(kind = %request.kind, nodes = request.node_count, degree = request.degree)
    )]
    pub fn export(request: &TopologyRequest) -> Result<(), TopologyError> {
        let graph = Self::generate(request)?;

        write_artifact(&EdgeList {}, &graph, "", &request.edge_list_path)?;
        info!(
            edges = graph.size(),
            path = %request.edge_list_path.display(),
            "wrote edge list"
        );

        if request.render {
            let exporter = request.format.exporter();
            write_artifact(exporter.as_ref(), &graph, request.kind.as_str(), &request.plot_path)?;
            info!(path = %request.plot_path.display(), format = ?request.format, "rendered plot");
        } else {
            debug!("rendering disabled, no plot written");
        }

        Ok(())
    }
}

/// Exports a topology to `connlist.dat` and, if `render` is set, plots it to `ElFarol.svg`.
///
/// The kind is parsed before anything else happens, so an unknown kind leaves all files untouched.
pub fn export(node_count: usize, kind: &str, degree: usize, render: bool) -> Result<(), TopologyError> {
    let kind: TopologyKind = kind.parse()?;
    let request = TopologyRequest::new(node_count, kind, degree).with_render(render);
    TopologyExporter::export(&request)
}

fn build(
    kind: TopologyKind,
    order: usize,
    degree: usize,
    rng: &mut Rand64,
) -> Result<UndirectedGraph, GraphError> {
    debug!(%kind, order, degree, "generating graph");
    match kind {
        TopologyKind::Full => Full::new(order).generate(),
        TopologyKind::KRegular => KRegular::new(order, degree, rng).generate(),
        TopologyKind::GrowingConnected => GrowingRandom::new(order, degree, true, rng).generate(),
        TopologyKind::GrowingUnconnected => {
            GrowingRandom::new(order, degree, false, rng).generate()
        }
        TopologyKind::Ring => Ring::new(order, false).generate(),
        TopologyKind::ClosedRing => Ring::new(order, true).generate(),
        TopologyKind::Star => Star::new(order).generate(),
        TopologyKind::Tree => KaryTree::new(order, degree).generate(),
    }
}

fn write_artifact(
    exporter: &dyn Export,
    graph: &UndirectedGraph,
    name: &str,
    path: &Path,
) -> Result<(), TopologyError> {
    let contents = exporter
        .export(graph, name)
        .map_err(|source| TopologyError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    write_atomically(path, contents.as_bytes()).map_err(|source| TopologyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes into a temporary file next to the target and renames it into place.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

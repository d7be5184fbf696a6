//! Command line interface of the topogen binary.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::{config_paths, load_config, ConfigError};
use crate::error::TopologyError;
use crate::exporter::{
    RenderFormat, TopologyExporter, TopologyRequest, DEFAULT_EDGE_LIST_PATH, DEFAULT_PLOT_PATH,
};
use crate::stats::edge_list_stats;
use crate::topology::TopologyKind;

#[derive(Debug, Parser, Clone)]
#[command(name = "topogen", about = "Generate network topologies as edge lists and plots.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate one topology from command line arguments.
    Generate(GenerateArgs),
    /// Generate every topology described by the config files matching a glob pattern.
    Run(RunArgs),
    /// Print statistics of an edge list file.
    Stats(StatsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of nodes.
    #[arg(short, long)]
    pub nodes: usize,

    /// Topology kind, e.g. Full, KRegular, GrowingConnected, Ring, ClosedRing, Star or Tree.
    #[arg(short, long)]
    pub kind: TopologyKind,

    /// Regular degree, branching factor or edges per new node, depending on the kind.
    #[arg(short, long, default_value_t = 0)]
    pub degree: usize,

    /// Also render a plot of the graph.
    #[arg(long)]
    pub render: bool,

    /// Seed for randomized kinds.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_EDGE_LIST_PATH)]
    pub edge_list: PathBuf,

    #[arg(long, default_value = DEFAULT_PLOT_PATH)]
    pub plot: PathBuf,

    #[arg(long, value_enum, default_value_t = RenderFormat::Svg)]
    pub format: RenderFormat,
}

impl GenerateArgs {
    pub fn request(&self) -> TopologyRequest {
        let request = TopologyRequest::new(self.nodes, self.kind, self.degree)
            .with_render(self.render)
            .with_edge_list_path(&self.edge_list)
            .with_plot_path(&self.plot)
            .with_format(self.format);

        match self.seed {
            Some(seed) => request.with_seed(seed),
            None => request,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Glob pattern of YAML or RON config files, e.g. `configs/*.yaml`.
    pub pattern: String,
}

#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    /// Edge list file to inspect.
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{failed} of {total} configs failed")]
    BatchFailed { failed: usize, total: usize },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub fn run_cli(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate(args) => Ok(TopologyExporter::export(&args.request())?),
        Command::Run(args) => run_batch(&args, ProgressBar::new(0)),
        Command::Stats(args) => {
            let stats = edge_list_stats(&args.path)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", stats)?;
            Ok(())
        }
    }
}

fn run_batch(args: &RunArgs, bar: ProgressBar) -> Result<(), CliError> {
    let paths = config_paths(&args.pattern)?;
    if paths.is_empty() {
        warn!(pattern = %args.pattern, "no config file matched");
        return Ok(());
    }

    bar.set_length(paths.len() as u64);
    bar.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} configs"));

    let mut failed = 0;
    for path in &paths {
        let result = load_config(path)
            .map_err(CliError::from)
            .and_then(|config| Ok(TopologyExporter::export(&config.request())?));

        match result {
            Ok(()) => info!(config = %path.display(), "exported topology"),
            Err(err) => {
                failed += 1;
                error!(config = %path.display(), error = %err, "config failed");
            }
        }
        bar.inc(1);
    }
    bar.finish_with_message("done");

    if failed > 0 {
        Err(CliError::BatchFailed {
            failed,
            total: paths.len(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "topogen", "generate", "--nodes", "6", "--kind", "Tree", "--degree", "2", "--render",
            "--seed", "9", "--format", "dot",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("Expected the generate command.");
        };
        let request = args.request();
        assert_eq!(request.node_count, 6);
        assert_eq!(request.kind, TopologyKind::Tree);
        assert_eq!(request.degree, 2);
        assert!(request.render);
        assert_eq!(request.seed, Some(9));
        assert_eq!(request.format, RenderFormat::Dot);
        assert_eq!(request.edge_list_path, PathBuf::from("connlist.dat"));
    }

    #[test]
    fn unknown_kind_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["topogen", "generate", "-n", "4", "-k", "Bogus"]);

        assert!(result.is_err());
    }

    #[test]
    fn batch_exports_every_config() {
        let dir = tempdir().unwrap();
        for (name, kind) in &[("a.yaml", "Ring"), ("b.yaml", "Star")] {
            let edges = dir.path().join(format!("{}.dat", kind));
            fs::write(
                dir.path().join(name),
                format!("nodes: 4\nkind: {}\nseed: 1\nedge_list: {}\n", kind, edges.display()),
            )
            .unwrap();
        }
        let args = RunArgs {
            pattern: format!("{}/*.yaml", dir.path().display()),
        };

        run_batch(&args, ProgressBar::hidden()).unwrap();

        assert!(dir.path().join("Ring.dat").exists());
        assert!(dir.path().join("Star.dat").exists());
    }

    #[test]
    fn batch_counts_failures() {
        let dir = tempdir().unwrap();
        let edges = dir.path().join("ok.dat");
        fs::write(
            dir.path().join("ok.yaml"),
            format!("nodes: 3\nkind: Full\nseed: 1\nedge_list: {}\n", edges.display()),
        )
        .unwrap();
        fs::write(dir.path().join("odd.yaml"), "nodes: 5\nkind: KRegular\ndegree: 3\nseed: 1\n").unwrap();
        let args = RunArgs {
            pattern: format!("{}/*.yaml", dir.path().display()),
        };

        let err = run_batch(&args, ProgressBar::hidden()).unwrap_err();

        assert!(matches!(err, CliError::BatchFailed { failed: 1, total: 2 }));
        assert!(edges.exists(), "Valid configs still run when others fail.");
    }
}

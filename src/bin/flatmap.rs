//! Flatmap CLI: tree and neuron route views of an ApiNATOMY KB export.
//!
//! Usage:
//!   flatmap tree --export soma-processes.json [--direction INCOMING] [ROOT...]
//!   flatmap route --export soma-processes.json [--json] NEURON...
//!   flatmap stats --export soma-processes.json

use clap::{Parser, Subcommand};
use flatmap::{
    render_tree_text, Direction, FilterReport, FlatmapConfig, FlatmapResult, GraphExport,
    GraphIndex, NodeId, RouteTracer,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flatmap",
    version,
    about = "Generate flatmap connectivity from an ApiNATOMY KB JSON export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase output verbosity
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indented tree under one or more nodes
    Tree {
        /// Path to the JSON export file
        #[arg(long)]
        export: PathBuf,
        /// Tree orientation (OUTGOING or INCOMING)
        #[arg(long, value_parser = parse_direction)]
        direction: Option<Direction>,
        /// Nodes to print trees for (default: the index root)
        roots: Vec<String>,
    },
    /// Trace the routes of one or more neurons
    Route {
        /// Path to the JSON export file
        #[arg(long)]
        export: PathBuf,
        /// Print traces as JSON
        #[arg(long)]
        json: bool,
        /// Neuron ids to trace
        #[arg(required = true)]
        neurons: Vec<String>,
    },
    /// Print node, edge and root counts
    Stats {
        /// Path to the JSON export file
        #[arg(long)]
        export: PathBuf,
        /// Also list every edge as "<subject> <predicate> <object>"
        #[arg(long)]
        edges: bool,
    },
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    s.parse().map_err(|e: flatmap::FlatmapError| e.to_string())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> FlatmapResult<FlatmapConfig> {
    match path {
        Some(path) => FlatmapConfig::from_file(path),
        None => FlatmapConfig::load(),
    }
}

fn load_export(path: &Path, config: &FlatmapConfig) -> FlatmapResult<(GraphExport, FilterReport)> {
    let export = GraphExport::from_path(path)?;
    let stats = export.stats();
    info!(nodes = stats.nodes, edges = stats.edges, "raw input");
    let (export, report) = config.prepare_export(export);
    info!(
        filtered = config.filter_structural,
        owl_nothing = report.after_nothing,
        has_part = report.after_has_part,
        indexed = export.edges.len(),
        "structural edges"
    );
    Ok((export, report))
}

fn cmd_tree(
    config: &FlatmapConfig,
    export: &Path,
    direction: Option<Direction>,
    roots: &[String],
) -> i32 {
    let direction = direction.unwrap_or(config.direction);
    let index = match load_export(export, config)
        .and_then(|(e, _)| GraphIndex::build(&e, direction))
    {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let starts: Vec<NodeId> = if roots.is_empty() {
        vec![index.root().clone()]
    } else {
        roots.iter().map(|r| NodeId::from(r.as_str())).collect()
    };

    let mut code = 0;
    for start in &starts {
        match render_tree_text(&index, start) {
            Ok(text) => {
                println!("{}", start);
                if !text.is_empty() {
                    println!("{}", text);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                code = 1;
            }
        }
    }
    code
}

fn cmd_route(config: &FlatmapConfig, export: &Path, json: bool, neurons: &[String]) -> i32 {
    let index = match load_export(export, config)
        .and_then(|(e, _)| GraphIndex::build(&e, Direction::Outgoing))
    {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let tracer = match RouteTracer::new(&index) {
        Ok(tracer) => tracer.with_max_chain_length(config.max_chain_length),
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let ids: Vec<NodeId> = neurons.iter().map(|n| NodeId::from(n.as_str())).collect();
    let mut code = 0;
    let mut traces = Vec::new();
    for (neuron, result) in tracer.trace_all(&ids) {
        match result {
            Ok(trace) => {
                if trace.has_cycle() {
                    eprintln!("Warning: route of '{}' contains a cycle", neuron);
                }
                traces.push(trace);
            }
            Err(e) => {
                eprintln!("Error: '{}': {}", neuron, e);
                code = 1;
            }
        }
    }

    if json {
        match serde_json::to_string_pretty(&traces) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        for trace in &traces {
            println!("{}", trace.render_text());
        }
    }
    code
}

fn cmd_stats(config: &FlatmapConfig, export: &Path, edges: bool) -> i32 {
    let (export, report) = match load_export(export, config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let index = match GraphIndex::build(&export, config.direction) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!("raw input, number of nodes: {}", export.nodes.len());
    println!("raw input, number of edges: {}", report.raw);
    println!("filter structural: {}", config.filter_structural);
    println!("owl:nothing, number of edges: {}", report.after_nothing);
    println!("filter has part, number of edges: {}", report.after_has_part);
    println!("nodes, direction: {}", index.direction());
    println!("nodes, number of nodes: {}", index.node_count());
    println!("nodes, number of parents: {}", index.children_of().len());
    println!("nodes, number of children: {}", index.parents_of().len());
    println!("nodes, root: {}", index.root());
    println!("nodes, number of roots: {}", index.roots().len());
    println!("nodes, number of leaves: {}", index.leaves().len());
    println!("nodes, number of relations: {}", index.relation_count());
    if edges {
        for line in index.edge_descriptions() {
            println!("{}", line);
        }
    }
    0
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Tree { export, direction, roots } => cmd_tree(&config, &export, direction, &roots),
        Commands::Route { export, json, neurons } => cmd_route(&config, &export, json, &neurons),
        Commands::Stats { export, edges } => cmd_stats(&config, &export, edges),
    };
    std::process::exit(code);
}

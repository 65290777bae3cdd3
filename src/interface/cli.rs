use crate::domain::traits::SccDetector;
use crate::infrastructure::edge_list::load_graph;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::results_log::append_results;
use crate::infrastructure::scc_dcsc::DcscSccDetector;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::infrastructure::scene_json::{read_scene_file, write_scene_file, SceneDto};
use crate::infrastructure::text_report::write_text_report;
use crate::usecase::analyze::analyze_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_scene;
use anyhow::{anyhow, Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::io::Write;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

pub async fn run() -> Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

/// Diagnostics go to stderr; stdout is reserved for the report or NDJSON events.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return Ok(());
        }
        Err(e) => return Err(anyhow!(e.to_string())),
    };

    match cli.command {
        Command::Analyze {
            input,
            algorithm,
            scene,
            results,
            emit_events,
        } => {
            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let loaded = load_graph(&input)
                .await
                .with_context(|| format!("loading graph: {input}"))?;

            let detector = algorithm.detector();
            let analysis = analyze_graph(loaded, detector.as_ref(), Some(tx))
                .await
                .with_context(|| format!("analyzing graph: {input}"))?;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            if let Some(scene_path) = scene.as_deref() {
                write_scene_file(scene_path, &SceneDto::from_analysis(&analysis))
                    .await
                    .with_context(|| format!("writing scene JSON: {scene_path}"))?;
            }

            if let Some(results_path) = results.as_deref() {
                append_results(results_path, &input, &analysis.stats)
                    .await
                    .with_context(|| format!("appending results: {results_path}"))?;
            }

            if emit_events {
                let mut err = std::io::stderr().lock();
                write_text_report(&mut err, &analysis).context("writing report")?;
            } else {
                let mut out = std::io::stdout().lock();
                write_text_report(&mut out, &analysis).context("writing report")?;
                out.flush()?;
            }

            Ok(())
        }

        Command::Validate { input } => {
            let scene = read_scene_file(&input)
                .await
                .with_context(|| format!("reading scene JSON: {input}"))?;

            validate_scene(&scene).with_context(|| format!("validating scene: {input}"))?;

            eprintln!("schema validation passed");
            eprintln!("ok: scene invariants validated");
            Ok(())
        }
    }
}

/// Strongly connected components of an edge-list digraph, one color per component.
#[derive(Parser, Debug)]
#[command(name = "scc-palette")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose a graph file and assign component colors
    Analyze {
        /// Edge-list file: `<vertices> <edges>` header, then one `<x> <y>` edge per line
        #[arg(long = "in", visible_alias = "input")]
        input: String,

        #[arg(long, value_enum, default_value_t = SccAlgorithm::Tarjan)]
        algorithm: SccAlgorithm,

        /// Write the render scene JSON here
        #[arg(long)]
        scene: Option<String>,

        /// Append a one-line timing record to this file
        #[arg(long)]
        results: Option<String>,

        /// Stream NDJSON progress events to stdout (report moves to stderr)
        #[arg(long, default_value_t = false)]
        emit_events: bool,
    },

    /// Check a scene JSON against the schema and partition invariants
    Validate {
        #[arg(long = "in", visible_alias = "input")]
        input: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SccAlgorithm {
    Tarjan,
    Kosaraju,
    Dcsc,
}

impl SccAlgorithm {
    pub fn detector(self) -> Box<dyn SccDetector> {
        match self {
            Self::Tarjan => Box::new(TarjanSccDetector),
            Self::Kosaraju => Box::new(KosarajuSccDetector),
            Self::Dcsc => Box::new(DcscSccDetector),
        }
    }
}

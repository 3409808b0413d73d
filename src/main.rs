//! logo-forge command line
//!
//! Replays an action script against a fresh design and exports the result.
//!
//! # Usage
//!
//! ```bash
//! # Favicon package from a script of actions
//! logo-forge export --script design.json --format icon-bundle --out dist/
//!
//! # 2x PNG of the default design at 256px
//! logo-forge export --format png --size 256
//!
//! logo-forge search arrow
//! logo-forge palettes
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logo_forge::{
    Action, DesignState, ExportFormat, ExportPipeline, ExportRequest, History, HistoryConfig,
    IconCatalog, IconSearch, PALETTES, PREVIEW_SIZE, PreviewHost, SEARCH_SUGGESTIONS, SizePx,
    StyleModel, Surface,
};

/// Logo and favicon designer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an action script and export the design
    Export {
        /// JSON array of actions, e.g. [{"type":"SET_ICON","payload":"Star"}]
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// raster (png), vector (svg) or icon-bundle (favicon-package)
        #[arg(short, long, default_value = "vector")]
        format: ExportFormat,

        /// Edge length of the exported design in pixels
        #[arg(long, default_value_t = PREVIEW_SIZE)]
        size: u32,

        /// Keep at most this many undo steps while replaying
        #[arg(long)]
        history_depth: Option<usize>,

        /// Leave manifest.json out of the icon bundle
        #[arg(long)]
        no_manifest: bool,

        /// Leave browserconfig.xml out of the icon bundle
        #[arg(long)]
        no_browser_config: bool,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Fuzzy-search the icon catalog
    Search {
        /// Query; omit to list the suggestions
        query: Option<String>,
    },
    /// List the built-in color palettes
    Palettes,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Export {
            script,
            format,
            size,
            history_depth,
            no_manifest,
            no_browser_config,
            out,
        } => {
            let config = match history_depth {
                Some(depth) => HistoryConfig::bounded(depth),
                None => HistoryConfig::unbounded(),
            };
            let mut state = DesignState::with_config(StyleModel::default(), config);
            if let Some(path) = script {
                replay(&mut state, &path)?;
            }

            let request = ExportRequest::new(format)
                .with_size(size)
                .with_manifest(!no_manifest)
                .with_browser_config(!no_browser_config);
            export(state.present(), &request, &out)
        }
        Command::Search { query } => {
            match query {
                Some(query) => {
                    for hit in IconSearch::global().search(&query) {
                        println!(
                            "{:<14} {:<8} {:.3}",
                            hit.icon.name,
                            hit.icon.category.as_str(),
                            hit.score
                        );
                    }
                }
                None => println!("Try: {}", SEARCH_SUGGESTIONS.join(", ")),
            }
            Ok(())
        }
        Command::Palettes => {
            for palette in &PALETTES {
                let c = palette.colors;
                println!(
                    "{:<14} {:<14} {} {} {} -> {}",
                    palette.id, palette.name, c.primary, c.secondary, c.gradient_from, c.gradient_to
                );
            }
            Ok(())
        }
    }
}

fn replay(state: &mut DesignState, path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let actions = Action::script_from_json(&json)
        .with_context(|| format!("Invalid action script: {}", path.display()))?;

    let total = actions.len();
    let applied = actions
        .into_iter()
        .map(|action| state.dispatch(action))
        .filter(|&changed| changed)
        .count();
    let history: &History<StyleModel> = state.history();
    info!(
        total,
        applied,
        undo_steps = history.past().len(),
        "replayed action script"
    );
    Ok(())
}

fn export(model: &StyleModel, request: &ExportRequest, out: &Path) -> anyhow::Result<()> {
    let mut host = PreviewHost::new();
    host.mount(Surface::project(
        model,
        IconCatalog::global(),
        SizePx::square(PREVIEW_SIZE),
    ));

    let artifact = ExportPipeline::new().export(&host, request)?;

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;
    let path = artifact
        .save_to(out)
        .with_context(|| format!("Failed to write {}", artifact.filename))?;
    info!(path = %path.display(), mime = artifact.mime, "saved");
    println!("{}", path.display());
    Ok(())
}

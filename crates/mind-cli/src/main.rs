//! mind - Critical Mind command-line front end
//!
//! Stands in for the app screens: prints the Explore, Insights and Library
//! view models and applies the same user actions the cards do.
//!
//! Usage:
//!   mind explore                 Recommended and discover feeds
//!   mind insights                Level, points and category progress
//!   mind library                 Saved topics
//!   mind like <id>               Toggle like
//!   mind favorite <id>           Toggle favorite
//!   mind complete <id>           Mark completed (awards points once)
//!   mind read <id>               Read every section of a topic
//!
//! Environment:
//!   MIND_DATA_DIR  Interaction database directory (default: ./mind-data)
//!   MIND_CATALOG   Topic catalog JSON (default: bundled sample)

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mind_catalog::Catalog;
use mind_engine::{
    compute_level_with, explore_view, insights_view, library_view, share_message, Advance,
    EngineConfig, ReadingSession,
};
use mind_store::{InteractionStore, InteractionView, PersistentStore, SledBackend};
use std::fmt::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_CATALOG: &str = include_str!("../data/topics.json");

#[derive(Debug, Parser)]
#[command(name = "mind")]
#[command(about = "Explore controversial topics and track your progress")]
struct Cli {
    /// Topic catalog (JSON array); the bundled sample is used when omitted
    #[arg(long, env = "MIND_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding persisted interactions
    #[arg(long, env = "MIND_DATA_DIR", default_value = "./mind-data", global = true)]
    data_dir: PathBuf,

    /// Engine configuration (JSON); MIND_* variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print view models as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every topic in catalog order
    Topics,
    /// Recommended and discover feeds
    Explore,
    /// Level, points and category progress
    Insights,
    /// Saved topics
    Library,
    /// Progress summary for sharing
    Share,
    /// Toggle like on a topic
    Like { id: String },
    /// Toggle favorite on a topic
    Favorite { id: String },
    /// Mark a topic completed
    Complete { id: String },
    /// Read a topic section by section
    Read { id: String },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Catalog::from_json(SAMPLE_CATALOG).context("bundled catalog is invalid"),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            EngineConfig::from_json(&raw)?
        }
        None => EngineConfig::from_env()?,
    };
    Ok(config)
}

fn require_topic(catalog: &Catalog, id: &str) -> Result<()> {
    if catalog.contains(id) {
        Ok(())
    } else {
        Err(mind_engine::Error::UnknownTopic(id.to_string()).into())
    }
}

fn run(cli: Cli) -> Result<String> {
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let config = load_config(cli.config.as_ref())?;
    let backend = SledBackend::open(&cli.data_dir)
        .with_context(|| format!("failed to open data dir {}", cli.data_dir.display()))?;
    let mut store = PersistentStore::open(backend)?;

    let out = match cli.command {
        Command::Topics => {
            let mut out = String::new();
            for topic in catalog.iter() {
                writeln!(out, "{:<28} {:<12} {}", topic.id, topic.category, topic.title)?;
            }
            out
        }
        Command::Explore => {
            let view = explore_view(&catalog, &store, &config);
            if cli.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::explore(&view, &store)
            }
        }
        Command::Insights => {
            let view = insights_view(&catalog, &store, &config);
            if cli.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::insights(&view)
            }
        }
        Command::Library => {
            let view = library_view(&catalog, &store);
            if cli.json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::library(&view, &store)
            }
        }
        Command::Share => {
            let level = compute_level_with(store.points(), config.points_per_level);
            share_message(level.level, store.points(), store.completed_topics().len())
        }
        Command::Like { id } => {
            require_topic(&catalog, &id)?;
            let liked = store.toggle_like(&id)?;
            format!("{} {}", if liked { "Liked" } else { "Unliked" }, id)
        }
        Command::Favorite { id } => {
            require_topic(&catalog, &id)?;
            let saved = store.toggle_favorite(&id)?;
            format!("{} {}", if saved { "Saved" } else { "Removed" }, id)
        }
        Command::Complete { id } => {
            require_topic(&catalog, &id)?;
            if store.complete_topic(&id, config.points_per_completion)? {
                format!(
                    "Completed {} (+{} points, {} total)",
                    id,
                    config.points_per_completion,
                    store.points()
                )
            } else {
                format!("{} was already completed", id)
            }
        }
        Command::Read { id } => read(&catalog, &mut store, &config, &id)?,
    };

    Ok(out)
}

fn read<S: InteractionStore>(
    catalog: &Catalog,
    store: &mut S,
    config: &EngineConfig,
    id: &str,
) -> Result<String> {
    let mut session = ReadingSession::at(catalog, id)?;
    let mut out = String::new();

    loop {
        if let Some((_, section)) = session.current(catalog) {
            if let Some((n, total)) = session.section_progress(catalog) {
                writeln!(out, "[{}/{}] {}", n, total, section.title)?;
            }
            writeln!(out, "{}\n", section.text)?;
        }

        match session.advance_section(catalog, store, config)? {
            Advance::NextSection { .. } => continue,
            Advance::Completed { points_awarded, .. } => {
                if points_awarded > 0 {
                    writeln!(out, "Topic complete: +{} points", points_awarded)?;
                } else {
                    writeln!(out, "Topic complete (already counted)")?;
                }
                break;
            }
        }
    }

    Ok(out)
}

fn main() {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mind=info,mind_store=info,mind_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    match run(cli) {
        Ok(out) => println!("{}", out.trim_end()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

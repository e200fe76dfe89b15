//! Craftmatch - find DIY projects for the stuff you already have
//!
//! Command-line front end over the craftmatch library.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use craftmatch::catalog::{estimate_difficulty, Catalog};
use craftmatch::config::{config_path, Config};
use craftmatch::items::{is_valid_input_with, parse_items_with};
use craftmatch::matcher::MatchEngine;
use craftmatch::messages::project_results_message;
use craftmatch::processor::{ProcessResult, SearchProcessor};
use craftmatch::search::{LocalVideoProvider, VideoFinder};
use craftmatch::utils::{find_best_match, OverlapMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank projects by how many of their materials you have
    Projects {
        /// Items you have, separated by commas or newlines
        items: String,
        /// Catalog JSON file (built-in demo projects when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Rank videos from a catalog file against your items
    Videos {
        /// Items you have, separated by commas or newlines
        items: String,
        /// Catalog JSON file containing videos
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Show the alias expansion of a term
    Aliases {
        term: String,
        /// Use the video-path resolver threshold
        #[arg(long)]
        video: bool,
    },
    /// Inspect or create the config file
    Config {
        /// Print the effective config
        #[arg(long)]
        show: bool,
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// Write the default config if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_file = args.config.clone().unwrap_or_else(config_path);
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .with_context(|| format!("Failed to load config {}", config_file.display()))?;
    let engine = MatchEngine::new(config.alias_table(), config.match_settings());

    match args.command {
        Commands::Projects { items, catalog } => {
            let items = read_items(&items, &config)?;
            let catalog = match catalog {
                Some(path) => Catalog::load(&path)?,
                None => Catalog::demo(),
            };

            let results = engine.ranked_projects(&items, &catalog);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            println!("{}", project_results_message(&results, items.len()));
            for result in &results {
                println!(
                    "{:>4.0}%  {} ({:?}, {})",
                    result.match_score * 100.0,
                    result.project.title,
                    result.project.difficulty,
                    result.project.time_estimate
                );
                println!("       have: {}", result.matched_materials.join(", "));
                if !result.suggested_materials.is_empty() {
                    println!("       need: {}", result.suggested_materials.join(", "));
                }
            }
        }
        Commands::Videos { items, catalog } => {
            let items = read_items(&items, &config)?;
            let catalog = Catalog::load(&catalog)?;
            let videos: Vec<_> = catalog.videos().cloned().collect();

            let provider = Arc::new(LocalVideoProvider::new(videos));
            let finder = VideoFinder::new(provider, &config);
            let processor = SearchProcessor::new(finder, engine, &config);

            match processor.process(&items).await {
                ProcessResult::Ranked {
                    results,
                    fetched,
                    message,
                } => {
                    info!("Fetched {} candidate videos", fetched);
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                        return Ok(());
                    }

                    println!("{}", message);
                    for result in &results {
                        println!(
                            "{:>4}%  {} [{:?}, {:?}, relevance {:.2}]",
                            result.match_percentage,
                            result.video.title,
                            result.match_type,
                            estimate_difficulty(&result.video),
                            result.relevance_score
                        );
                        let mut details = vec![result.video.url.clone()];
                        if let Some(duration) = &result.video.duration {
                            details.push(duration.clone());
                        }
                        if let Some(views) = result.video.views {
                            details.push(format!("{} views", views));
                        }
                        println!("       {}", details.join(" | "));
                        if !result.suggested_items.is_empty() {
                            println!("       unused: {}", result.suggested_items.join(", "));
                        }
                    }
                }
                ProcessResult::NoItems(message) | ProcessResult::NoVideos(message) => {
                    println!("{}", message);
                }
                ProcessResult::Failed(message) => bail!(message),
            }
        }
        Commands::Aliases { term, video } => {
            let settings = engine.settings();
            let resolver = if video {
                engine
                    .aliases()
                    .resolver(settings.video_alias_threshold, settings.video_overlap)
            } else {
                engine
                    .aliases()
                    .resolver(settings.project_alias_threshold, settings.project_overlap)
            };

            let variants = resolver.expand(&term);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&variants)?);
            } else {
                for variant in &variants {
                    println!("{}", variant);
                }

                if variants.len() <= 1 {
                    let canonical: Vec<String> = engine
                        .aliases()
                        .entries()
                        .iter()
                        .map(|e| e.canonical.clone())
                        .collect();
                    if let Some(best) =
                        find_best_match(&term, &canonical, 0.3, OverlapMode::Proportional)
                    {
                        println!("No aliases found. Closest known material: {}", best.value);
                    }
                }
            }
        }
        Commands::Config { show, path, init } => {
            if path {
                println!("{}", config_file.display());
            }
            if init {
                if config_file.exists() {
                    info!("Config already exists at {}", config_file.display());
                } else {
                    match &args.config {
                        Some(path) => config.save_to(path)?,
                        None => config.save()?,
                    }
                    info!("📝 Wrote default config to {}", config_file.display());
                }
            }
            if show || !(path || init) {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

/// Parse and validate the items argument
fn read_items(raw: &str, config: &Config) -> Result<Vec<String>> {
    let limits = config.item_limits();
    let items = parse_items_with(raw, &limits);
    if !is_valid_input_with(&items, &limits) {
        bail!("No usable items in {:?}. Try something like \"scissors, glue, paper\".", raw);
    }
    Ok(items)
}

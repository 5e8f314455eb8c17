use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_article::Article;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assets;
mod config;

use config::{RunConfig, ASSET_DIR_ENV, PRETTY_ENV};

/// Longest content preview printed by `summary --excerpt`.
const DEFAULT_EXCERPT_CHARS: &str = "160";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Inspect and normalise article JSON documents")]
struct Cli {
    /// Pretty-print JSON output (overrides FOLIO_PRETTY)
    #[arg(long, global = true)]
    pretty: bool,

    /// Directory holding bundled image assets (overrides FOLIO_ASSET_DIR)
    #[arg(long, global = true)]
    asset_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an article and report its block counts
    Validate {
        /// Path to the article JSON file
        file: PathBuf,
    },
    /// Print the article summary as JSON
    Summary {
        /// Path to the article JSON file
        file: PathBuf,
        /// Cut the content preview to this many characters
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXCERPT_CHARS)]
        excerpt: Option<usize>,
    },
    /// Decode an article and write it back out in canonical form
    Normalise {
        /// Path to the article JSON file
        file: PathBuf,
    },
    /// Check that every bundled image asset referenced by the article exists
    CheckAssets {
        /// Path to the article JSON file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = RunConfig::resolve(
        cli.pretty,
        cli.asset_dir,
        std::env::var(PRETTY_ENV).ok(),
        std::env::var(ASSET_DIR_ENV).ok(),
    )?;

    match cli.command {
        Commands::Validate { file } => {
            let article = read_article(&file)?;
            println!(
                "{}: ok ({} header blocks, {} content blocks)",
                article.id(),
                article.header().len(),
                article.content().len()
            );
        }
        Commands::Summary { file, excerpt } => {
            let article = read_article(&file)?;
            let mut summary = article.summary();
            if let Some(max_chars) = excerpt {
                summary.content_preview = summary.preview_excerpt(max_chars);
            }
            let output = if config.pretty() {
                serde_json::to_string_pretty(&summary)?
            } else {
                serde_json::to_string(&summary)?
            };
            println!("{output}");
        }
        Commands::Normalise { file } => {
            let article = read_article(&file)?;
            let output = if config.pretty() {
                article.to_json_string_pretty()?
            } else {
                article.to_json_string()?
            };
            println!("{output}");
        }
        Commands::CheckAssets { file } => {
            let asset_dir = config.asset_dir().with_context(|| {
                format!("no asset directory configured (use --asset-dir or {ASSET_DIR_ENV})")
            })?;
            let article = read_article(&file)?;
            let checked = assets::check_assets(&article, asset_dir)?;
            println!("{}: {checked} bundled assets resolved", article.id());
        }
    }

    Ok(())
}

fn read_article(path: &Path) -> Result<Article> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let article = Article::from_json_bytes(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::info!(
        article_id = article.id(),
        path = %path.display(),
        "loaded article"
    );
    Ok(article)
}

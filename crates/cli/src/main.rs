use std::path::PathBuf;

use anyhow::Result;
use artsearch_core::constants::ANY_FILTER;
use artsearch_core::{FilterSelection, Settings};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "artsearch")]
#[command(about = "Search a museum object catalog from the terminal", long_about = None)]
struct Cli {
    /// Catalog API base URL (overrides ARTSEARCH_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Directory for cached reference lists (overrides ARTSEARCH_CACHE_DIR)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    #[arg(short, long, default_value = "")]
    keyword: String,
    #[arg(short, long, default_value = ANY_FILTER)]
    classification: String,
    #[arg(short = 'y', long, default_value = ANY_FILTER)]
    century: String,
}

impl From<FilterArgs> for FilterSelection {
    fn from(args: FilterArgs) -> Self {
        Self { keyword: args.keyword, classification: args.classification, century: args.century }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search objects by keyword, classification and century
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        /// Also show the detail view of the result at this index
        #[arg(long)]
        open: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Fetch a page cursor (next/previous URL) verbatim
    Page {
        url: String,
        #[arg(long)]
        open: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Show the classification and century lists
    Lists {
        #[arg(long)]
        json: bool,
    },
    /// Print the request URL and query label without fetching
    Url {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Interactive browsing session
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }
    if let Some(cache_dir) = cli.cache_dir {
        settings.cache_dir = cache_dir;
    }
    tracing::debug!(?settings, "loaded settings");

    match cli.command {
        Commands::Search { filters, open, json } => {
            commands::search::run_search(&settings, filters.into(), open, json).await?;
        },
        Commands::Page { url, open, json } => {
            commands::search::run_page(&settings, &url, open, json).await?;
        },
        Commands::Lists { json } => commands::lists::run_lists(&settings, json).await?,
        Commands::Url { filters } => commands::search::run_url(&settings, &filters.into())?,
        Commands::Browse => commands::browse::run_browse(&settings).await?,
    }

    Ok(())
}

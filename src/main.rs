use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod archive;
mod console;
mod correlation;
mod distribution;
mod error;
mod filter;
mod models;
mod ranker;
mod report;
mod scanner;
mod years;

use crate::archive::{ArchiveConfig, CodeforcesClient, ContestArchive};
use crate::console::Console;
use crate::filter::FilterSelection;

#[derive(Parser)]
#[command(name = "contest-linearity")]
#[command(about = "Rank archived contests by how linearly their solve counts fall off", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Archive API root (also reads CONTEST_ARCHIVE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// List gym contests instead of regular rounds
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    gym: bool,

    /// Number of contests to report
    #[arg(long, global = true, default_value_t = ranker::DEFAULT_TOP)]
    top: usize,

    /// Also write the ranking to a CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose contest types, kinds and seasons interactively, then rank
    Explore,
    /// Rank finished official ICPC contests without prompting
    Official,
}

fn init_tracing(level: tracing::Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let config = ArchiveConfig {
        base_url: cli
            .base_url
            .clone()
            .or_else(|| std::env::var("CONTEST_ARCHIVE_URL").ok())
            .unwrap_or_else(|| archive::DEFAULT_BASE_URL.to_string()),
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let client = CodeforcesClient::new(&config).context("failed to build HTTP client")?;

    let catalog = client
        .list_contests(cli.gym)
        .await
        .context("failed to fetch the contest catalog")?;
    tracing::info!(contests = catalog.len(), base_url = %config.base_url, "catalog loaded");

    let filter = match cli.command {
        Commands::Explore => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            console
                .choose_filters(&catalog, years::current_year())
                .context("failed to read filter choices")?
        }
        Commands::Official => FilterSelection::official_icpc(),
    };
    tracing::info!(%filter, "filter selected");

    let outcome = scanner::scan(&client, &catalog, &filter, |progress| {
        eprintln!(
            "Scanned {} matching contests ({:.1}% of catalog)",
            progress.matched,
            progress.percent()
        );
    })
    .await
    .context("contest scan aborted")?;

    let ranked = ranker::rank_scores(&outcome.scores, &catalog, cli.top);

    eprintln!("{}", report::summary_line(&outcome));
    print!("{}", report::build_report(&ranked));

    if let Some(path) = cli.csv {
        report::write_csv(&path, &ranked)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Ranking written to {}.", path.display());
    }

    Ok(())
}

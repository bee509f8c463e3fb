mod run;
mod schedule;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tickerbrief_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::run::RunArgs;

#[derive(Debug, Parser)]
#[command(name = "tickerbrief")]
#[command(about = "Collect and summarize news for a stock ticker")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Flags for the default `run` when no subcommand is given
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect feeds, store items, and write the daily report (default)
    Run(RunArgs),
    /// Print the feed sources that would be fetched
    Sources {
        /// Stock ticker symbol
        #[arg(long, default_value = "DASH")]
        ticker: String,

        /// News search query
        #[arg(long, default_value = "DoorDash stock")]
        query: String,

        /// Path to the sources file (JSON, or YAML by extension)
        #[arg(long, default_value = "sources.json")]
        sources: PathBuf,
    },
    /// Run the daily job on a cron schedule until interrupted
    Schedule {
        /// Six-field cron expression (seconds first), evaluated in UTC
        #[arg(long, default_value = "0 0 6 * * *")]
        cron: String,

        #[command(flatten)]
        run: RunArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sources {
            ticker,
            query,
            sources,
        }) => run::print_sources(&sources, &ticker, &query)?,
        Some(Commands::Run(args)) => {
            let config = init_runtime()?;
            let out = run::run_daily(&config, &args).await?;
            println!("Wrote {}", out.display());
        }
        Some(Commands::Schedule { cron, run }) => {
            let config = init_runtime()?;
            schedule::run_schedule(Arc::new(config), &cron, run).await?;
        }
        None => {
            let config = init_runtime()?;
            let out = run::run_daily(&config, &cli.run).await?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}

/// Load `.env` and the environment config, then install the subscriber.
fn init_runtime() -> anyhow::Result<AppConfig> {
    let config = tickerbrief_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(config)
}

#[cfg(test)]
mod tests;

//! The daily collect, digest, store, and render job.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Utc};
use clap::Args;
use tickerbrief_core::AppConfig;
use tickerbrief_digest::Digest;
use tickerbrief_feeds::{collect_items, FeedClient};
use tickerbrief_report::ReportContext;

#[derive(Debug, Clone, Args)]
pub(crate) struct RunArgs {
    /// Stock ticker symbol
    #[arg(long, default_value = "DASH")]
    pub ticker: String,

    /// News search query
    #[arg(long, default_value = "DoorDash stock")]
    pub query: String,

    /// Report date (YYYY-MM-DD); defaults to the local date at run time
    #[arg(long)]
    pub date: Option<String>,

    /// Path to the sources file (JSON, or YAML by extension)
    #[arg(long, default_value = "sources.json")]
    pub sources: PathBuf,

    /// SQLite database for raw items
    #[arg(long, default_value = "data/news.db")]
    pub db: PathBuf,

    /// Markdown report output path
    #[arg(long, default_value = "reports/latest.md")]
    pub out: PathBuf,

    /// Static site output directory
    #[arg(long, default_value = "site")]
    pub site: PathBuf,

    /// Skip static site output
    #[arg(long)]
    pub no_site: bool,

    /// Custom domain written to the site's CNAME file (e.g. dash.example.com)
    #[arg(long, default_value = "")]
    pub cname: String,
}

impl RunArgs {
    fn report_date(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string())
    }
}

/// Run one full collection and write the report. Returns the report path.
///
/// Per-source fetch failures end up in the report; anything else (bad
/// sources file, database, filesystem) aborts the run.
pub(crate) async fn run_daily(config: &AppConfig, args: &RunArgs) -> anyhow::Result<PathBuf> {
    let date = args.report_date();
    let sources = tickerbrief_core::load_sources(&args.sources, &args.ticker, &args.query)
        .context("failed to load feed sources")?;

    let client = FeedClient::from_app_config(config).context("failed to build feed client")?;
    let collection = collect_items(&client, &sources, config.max_concurrent_feeds).await;
    for error in &collection.errors {
        eprintln!("WARN: failed to fetch {error}");
    }

    let output = Digest::default().run(collection.items);

    let fetched_at = tickerbrief_db::format_fetched_at(Utc::now());
    let pool_config = tickerbrief_db::PoolConfig::from_app_config(config);
    let pool = tickerbrief_db::connect_pool(&args.db, pool_config)
        .await
        .with_context(|| format!("failed to open database {}", args.db.display()))?;
    tickerbrief_db::run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;
    let inserted = tickerbrief_db::insert_news_items(&pool, &output.items, &fetched_at)
        .await
        .context("failed to store news items")?;
    pool.close().await;

    let ctx = ReportContext {
        date: &date,
        ticker: &args.ticker,
        items: &output.items,
        summary: &output.result,
        errors: &collection.errors,
    };
    let report = tickerbrief_report::render_text_report(&ctx);
    tickerbrief_report::write_text_report(&args.out, &report)?;
    if !args.no_site {
        tickerbrief_report::write_site(&args.site, &ctx, &args.cname)?;
    }

    tracing::info!(
        ticker = %args.ticker,
        date = %date,
        items = output.items.len(),
        inserted,
        failed_sources = collection.errors.len(),
        sentiment = %output.result.sentiment.label,
        "daily digest complete"
    );
    Ok(args.out.clone())
}

/// Print each rendered source as `name<TAB>url`.
pub(crate) fn print_sources(path: &Path, ticker: &str, query: &str) -> anyhow::Result<()> {
    let sources = tickerbrief_core::load_sources(path, ticker, query)
        .context("failed to load feed sources")?;
    for source in &sources {
        println!("{}\t{}", source.name, source.url);
    }
    Ok(())
}

//! Cron-driven repetition of the daily job.

use std::sync::Arc;

use tickerbrief_core::AppConfig;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::run::{run_daily, RunArgs};

/// Build the daily digest job for `cron`.
///
/// A failed run is logged and the schedule keeps going. Without `--date`,
/// every run stamps its own current date.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if `cron` is not a valid expression.
pub(crate) fn build_daily_job(
    config: Arc<AppConfig>,
    cron: &str,
    args: RunArgs,
) -> Result<Job, JobSchedulerError> {
    let args = Arc::new(args);

    Job::new_async(cron, move |_uuid, _lock| {
        let config = Arc::clone(&config);
        let args = Arc::clone(&args);

        Box::pin(async move {
            tracing::info!(ticker = %args.ticker, "scheduler: starting daily digest run");
            match run_daily(&config, &args).await {
                Ok(out) => {
                    tracing::info!(out = %out.display(), "scheduler: daily digest run complete");
                }
                Err(e) => {
                    tracing::error!(
                        error = %format!("{e:#}"),
                        "scheduler: daily digest run failed"
                    );
                }
            }
        })
    })
}

/// Register the daily job under `cron` and block until Ctrl-C.
pub(crate) async fn run_schedule(
    config: Arc<AppConfig>,
    cron: &str,
    args: RunArgs,
) -> anyhow::Result<()> {
    let mut scheduler = JobScheduler::new().await?;
    scheduler.add(build_daily_job(config, cron, args)?).await?;
    scheduler.start().await?;
    tracing::info!(cron = %cron, "scheduler: registered daily digest job");

    tokio::signal::ctrl_c().await?;
    tracing::info!("scheduler: shutting down");
    scheduler.shutdown().await?;
    Ok(())
}

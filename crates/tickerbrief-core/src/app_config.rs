/// Runtime settings read from the environment.
///
/// Report inputs (ticker, query, output paths) come from the command line;
/// this holds the knobs that stay fixed between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub max_concurrent_feeds: usize,
    pub db_max_connections: u32,
}

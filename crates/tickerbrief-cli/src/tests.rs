use std::fs;

use tickerbrief_core::AppConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[test]
fn no_command_uses_default_run_flags() {
    let cli = Cli::try_parse_from(["tickerbrief"]).expect("expected valid cli args");

    assert!(cli.command.is_none());
    assert_eq!(cli.run.ticker, "DASH");
    assert_eq!(cli.run.query, "DoorDash stock");
    assert_eq!(cli.run.date, None);
    assert_eq!(cli.run.sources, PathBuf::from("sources.json"));
    assert_eq!(cli.run.db, PathBuf::from("data/news.db"));
    assert_eq!(cli.run.out, PathBuf::from("reports/latest.md"));
    assert_eq!(cli.run.site, PathBuf::from("site"));
    assert!(!cli.run.no_site);
    assert_eq!(cli.run.cname, "");
}

#[test]
fn top_level_flags_work_without_subcommand() {
    let cli = Cli::try_parse_from(["tickerbrief", "--ticker", "TSLA", "--no-site"])
        .expect("expected valid cli args");

    assert!(cli.command.is_none());
    assert_eq!(cli.run.ticker, "TSLA");
    assert!(cli.run.no_site);
}

#[test]
fn parses_run_subcommand() {
    let cli = Cli::try_parse_from([
        "tickerbrief",
        "run",
        "--ticker",
        "TSLA",
        "--query",
        "Tesla stock",
        "--date",
        "2025-01-06",
        "--cname",
        "tsla.example.com",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Run(ref args))
            if args.ticker == "TSLA"
                && args.query == "Tesla stock"
                && args.date.as_deref() == Some("2025-01-06")
                && args.cname == "tsla.example.com"
    ));
}

#[test]
fn parses_sources_subcommand() {
    let cli = Cli::try_parse_from(["tickerbrief", "sources", "--sources", "feeds.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Sources { ref ticker, ref sources, .. })
            if ticker == "DASH" && sources == &PathBuf::from("feeds.yaml")
    ));
}

#[test]
fn schedule_defaults_to_six_am() {
    let cli = Cli::try_parse_from(["tickerbrief", "schedule"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Schedule { ref cron, .. }) if cron == "0 0 6 * * *"
    ));
}

#[test]
fn schedule_accepts_run_flags() {
    let cli = Cli::try_parse_from([
        "tickerbrief",
        "schedule",
        "--cron",
        "0 30 21 * * Mon-Fri",
        "--ticker",
        "TSLA",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Schedule { ref cron, ref run })
            if cron == "0 30 21 * * Mon-Fri" && run.ticker == "TSLA"
    ));
}

#[test]
fn subcommand_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["tickerbrief", "sources", "--no-site"]).is_err());
}

fn test_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        user_agent: "news-collector/1.0".to_string(),
        request_timeout_secs: 5,
        max_retries: 0,
        retry_backoff_base_ms: 1,
        max_concurrent_feeds: 2,
        db_max_connections: 1,
    }
}

const RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Wire</title>
<item>
  <title>Company beats estimates</title>
  <link>https://example.com/a</link>
  <description>Strong growth reported</description>
  <pubDate>Mon, 06 Jan 2025 14:00:00 GMT</pubDate>
</item>
<item>
  <title>Company beats estimates</title>
  <link>https://example.com/a</link>
  <description>Strong growth reported</description>
</item>
</channel></rss>"#;

#[tokio::test]
async fn run_daily_writes_report_site_and_database() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/good.rss"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RSS))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.rss"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let sources_path = dir.path().join("sources.json");
    fs::write(
        &sources_path,
        format!(
            r#"{{"sources": [
                {{"name": "Good", "url": "{uri}/good.rss"}},
                {{"name": "Missing", "url": "{uri}/missing.rss"}}
            ]}}"#,
            uri = server.uri()
        ),
    )
    .unwrap();

    let args = RunArgs {
        ticker: "DASH".to_string(),
        query: "DoorDash stock".to_string(),
        date: Some("2025-01-06".to_string()),
        sources: sources_path,
        db: dir.path().join("data/news.db"),
        out: dir.path().join("reports/latest.md"),
        site: dir.path().join("site"),
        no_site: false,
        cname: "dash.example.com".to_string(),
    };

    let out = run::run_daily(&test_config(), &args).await.expect("run succeeds");
    assert_eq!(out, args.out);

    let report = fs::read_to_string(&args.out).unwrap();
    assert!(report.starts_with("# DASH Daily News Summary\n\nDate: 2025-01-06"));
    assert!(report.contains("Items: 1"));
    assert!(report.contains("Label: bullish\nScore: 3"));
    assert!(report.contains("## Fetch Errors\n- Missing: "));
    assert!(
        report.contains("- Company beats estimates\n  Published: Mon, 06 Jan 2025 14:00:00 GMT")
    );

    assert!(args.site.join("index.html").exists());
    assert!(args.site.join("archive/2025-01-06.html").exists());
    assert!(args.site.join("archive.html").exists());
    assert_eq!(
        fs::read_to_string(args.site.join("CNAME")).unwrap(),
        "dash.example.com\n"
    );

    // A second run stores nothing new.
    run::run_daily(&test_config(), &args).await.expect("rerun succeeds");
    let pool = tickerbrief_db::connect_pool(&args.db, tickerbrief_db::PoolConfig::default())
        .await
        .unwrap();
    assert_eq!(tickerbrief_db::count_news_items(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn run_daily_skips_site_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let sources_path = dir.path().join("sources.json");
    fs::write(&sources_path, r#"{"sources": []}"#).unwrap();

    let args = RunArgs {
        ticker: "DASH".to_string(),
        query: "DoorDash stock".to_string(),
        date: Some("2025-01-06".to_string()),
        sources: sources_path,
        db: dir.path().join("news.db"),
        out: dir.path().join("latest.md"),
        site: dir.path().join("site"),
        no_site: true,
        cname: String::new(),
    };

    run::run_daily(&test_config(), &args).await.expect("run succeeds");

    let report = fs::read_to_string(&args.out).unwrap();
    assert!(report.contains("No items found."));
    assert!(report.ends_with("## Articles\nNo articles found."));
    assert!(!args.site.exists());
}

#[test]
fn help_is_rendered_by_the_parser_alone() {
    let err = Cli::try_parse_from(["tickerbrief", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    assert!(err.to_string().contains("schedule"));
}

#[test]
fn print_sources_needs_no_runtime_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sources.yaml");
    fs::write(
        &path,
        "sources:\n  - name: Wire\n    url: \"https://example.com/rss?s={ticker}\"\n",
    )
    .unwrap();

    run::print_sources(&path, "DASH", "DoorDash stock").expect("sources print");
}

fn schedule_args(dir: &tempfile::TempDir) -> RunArgs {
    RunArgs {
        ticker: "DASH".to_string(),
        query: "DoorDash stock".to_string(),
        date: None,
        sources: dir.path().join("sources.json"),
        db: dir.path().join("news.db"),
        out: dir.path().join("latest.md"),
        site: dir.path().join("site"),
        no_site: true,
        cname: String::new(),
    }
}

#[tokio::test]
async fn daily_job_builds_for_valid_cron() {
    let dir = tempfile::tempdir().unwrap();
    let job = schedule::build_daily_job(
        Arc::new(test_config()),
        "0 0 6 * * *",
        schedule_args(&dir),
    );
    assert!(job.is_ok());
}

#[tokio::test]
async fn daily_job_rejects_invalid_cron() {
    let dir = tempfile::tempdir().unwrap();
    let job = schedule::build_daily_job(Arc::new(test_config()), "not a cron", schedule_args(&dir));
    assert!(job.is_err());
}

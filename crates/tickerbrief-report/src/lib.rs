//! Markdown and static-HTML rendering of a daily digest.

pub mod error;
pub mod html;
pub mod site;
pub mod text;

pub use error::ReportError;
pub use html::{escape_html, render_html_report};
pub use site::{write_site, write_text_report};
pub use text::render_text_report;

use tickerbrief_core::FeedItem;
use tickerbrief_digest::SummaryResult;

/// Everything a renderer needs for one day's report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Report date, conventionally `YYYY-MM-DD`. Also names the archive page.
    pub date: &'a str,
    pub ticker: &'a str,
    /// Deduplicated items in collection order.
    pub items: &'a [FeedItem],
    pub summary: &'a SummaryResult,
    /// Per-source fetch failures, already formatted as `"<name>: <error>"`.
    pub errors: &'a [String],
}

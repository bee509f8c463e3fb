use crate::ReportContext;

/// Render the Markdown report.
///
/// Optional per-article lines (`Published`, `Link`, `Summary`) are omitted
/// when the field is empty. Lines are joined with `\n` and there is no
/// trailing newline.
#[must_use]
pub fn render_text_report(ctx: &ReportContext<'_>) -> String {
    let sentiment = &ctx.summary.sentiment;
    let mut lines: Vec<String> = vec![
        format!("# {} Daily News Summary", ctx.ticker),
        String::new(),
        format!("Date: {}", ctx.date),
        String::new(),
        "## Summary".to_string(),
        ctx.summary.summary.clone(),
        String::new(),
        format!("Items: {}", ctx.items.len()),
        String::new(),
        "## Sentiment (non-predictive)".to_string(),
        format!("Label: {}", sentiment.label),
        format!("Score: {}", sentiment.score),
        String::new(),
    ];

    if !ctx.errors.is_empty() {
        lines.push("## Fetch Errors".to_string());
        lines.extend(ctx.errors.iter().map(|e| format!("- {e}")));
        lines.push(String::new());
    }

    lines.push("## Articles".to_string());
    if ctx.items.is_empty() {
        lines.push("No articles found.".to_string());
    }
    for item in ctx.items {
        lines.push(format!("- {}", item.title));
        if !item.published.is_empty() {
            lines.push(format!("  Published: {}", item.published));
        }
        if !item.link.is_empty() {
            lines.push(format!("  Link: {}", item.link));
        }
        if !item.summary.is_empty() {
            lines.push(format!("  Summary: {}", item.summary));
        }
    }

    lines.join("\n")
}

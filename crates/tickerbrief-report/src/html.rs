//! Standalone HTML page for the static site.

use crate::ReportContext;

const STYLE: &[&str] = &[
    "body{font-family:system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin:40px; color:#111;}",
    "h1{margin-bottom:4px;} .meta{color:#555; margin-bottom:20px;}",
    ".card{border:1px solid #ddd; padding:16px; border-radius:8px; margin-bottom:16px;}",
    "a{color:#0b57d0; text-decoration:none;} a:hover{text-decoration:underline;}",
];

/// Escape `& < > " '` for use in element text and quoted attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the report as a complete HTML document.
///
/// All feed-derived and user-supplied text is escaped; only the numeric
/// score and item count are interpolated raw.
#[must_use]
pub fn render_html_report(ctx: &ReportContext<'_>) -> String {
    let ticker = escape_html(ctx.ticker);
    let sentiment = &ctx.summary.sentiment;

    let mut lines: Vec<String> = vec![
        "<!doctype html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">".to_string(),
        format!("<title>{ticker} Daily News Summary</title>"),
        "<style>".to_string(),
    ];
    lines.extend(STYLE.iter().map(|s| (*s).to_string()));
    lines.extend([
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{ticker} Daily News Summary</h1>"),
        format!(
            "<div class=\"meta\">Date: {} \u{2022} Items: {}</div>",
            escape_html(ctx.date),
            ctx.items.len()
        ),
        "<div class=\"card\">".to_string(),
        "<h2>Summary</h2>".to_string(),
        format!("<p>{}</p>", escape_html(&ctx.summary.summary)),
        "</div>".to_string(),
        "<div class=\"card\">".to_string(),
        "<h2>Sentiment (non-predictive)</h2>".to_string(),
        format!(
            "<p>Label: {} \u{2022} Score: {}</p>",
            escape_html(sentiment.label.as_str()),
            sentiment.score
        ),
        "</div>".to_string(),
    ]);

    if !ctx.errors.is_empty() {
        lines.push("<div class=\"card\">".to_string());
        lines.push("<h2>Fetch Errors</h2>".to_string());
        lines.push("<ul>".to_string());
        lines.extend(
            ctx.errors
                .iter()
                .map(|e| format!("<li>{}</li>", escape_html(e))),
        );
        lines.push("</ul>".to_string());
        lines.push("</div>".to_string());
    }

    lines.push("<div class=\"card\">".to_string());
    lines.push("<h2>Articles</h2>".to_string());
    if ctx.items.is_empty() {
        lines.push("<p>No articles found.</p>".to_string());
    } else {
        lines.push("<ul>".to_string());
        for item in ctx.items {
            let title = escape_html(&item.title);
            if item.link.is_empty() {
                lines.push(format!("<li>{title}</li>"));
            } else {
                lines.push(format!(
                    "<li><a href=\"{}\">{title}</a></li>",
                    escape_html(&item.link)
                ));
            }
            if !item.published.is_empty() {
                lines.push(format!(
                    "<div class=\"meta\">Published: {}</div>",
                    escape_html(&item.published)
                ));
            }
            if !item.summary.is_empty() {
                lines.push(format!("<div>{}</div>", escape_html(&item.summary)));
            }
        }
        lines.push("</ul>".to_string());
    }
    lines.push("</div>".to_string());
    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n")
}

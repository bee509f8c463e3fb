//! Writing the Markdown report and the static site to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{escape_html, render_html_report, ReportContext, ReportError};

const INDEX_FILE: &str = "index.html";
const ARCHIVE_DIR: &str = "archive";
const ARCHIVE_INDEX_FILE: &str = "archive.html";
const CNAME_FILE: &str = "CNAME";

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ReportError + '_ {
    move |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(io_err(path))
}

fn create_dir_all(path: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(path).map_err(io_err(path))
}

/// Write the Markdown report, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if a directory or the file cannot be written.
pub fn write_text_report(path: &Path, text: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    write_file(path, text)
}

/// Write the static site for one report.
///
/// Produces `index.html` (latest), `archive/<date>.html`, and a regenerated
/// `archive.html` that links every archived page, newest name first. When
/// `cname` is non-empty a `CNAME` file is written with its trimmed value.
///
/// # Errors
///
/// Returns [`ReportError::Io`] on any filesystem failure.
pub fn write_site(
    site_dir: &Path,
    ctx: &ReportContext<'_>,
    cname: &str,
) -> Result<(), ReportError> {
    let archive_dir = site_dir.join(ARCHIVE_DIR);
    create_dir_all(&archive_dir)?;

    let page = render_html_report(ctx);
    write_file(&site_dir.join(INDEX_FILE), &page)?;
    write_file(&archive_dir.join(format!("{}.html", ctx.date)), &page)?;

    let archived = list_archive_pages(&archive_dir)?;
    let index = render_archive_index(ctx.ticker, &archived);
    write_file(&site_dir.join(ARCHIVE_INDEX_FILE), &index)?;

    // Written only when set; an existing CNAME is left alone otherwise.
    if !cname.is_empty() {
        write_file(
            &site_dir.join(CNAME_FILE),
            &format!("{}\n", cname.trim()),
        )?;
    }

    tracing::info!(
        site_dir = %site_dir.display(),
        date = ctx.date,
        archived = archived.len(),
        "wrote static site"
    );
    Ok(())
}

/// `*.html` files in the archive directory, reverse-sorted by path.
fn list_archive_pages(archive_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(archive_dir).map_err(io_err(archive_dir))?;
    let mut pages = Vec::new();
    for entry in entries {
        let path = entry.map_err(io_err(archive_dir))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "html") {
            pages.push(path);
        }
    }
    pages.sort_unstable_by(|a, b| b.cmp(a));
    Ok(pages)
}

fn render_archive_index(ticker: &str, pages: &[PathBuf]) -> String {
    let ticker = escape_html(ticker);
    let mut lines = vec![
        "<!doctype html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
            .to_string(),
        format!("<title>{ticker} Report Archive</title></head>"),
        "<body>".to_string(),
        format!("<h1>{ticker} Report Archive</h1>"),
        "<ul>".to_string(),
    ];
    for page in pages {
        let (Some(stem), Some(name)) = (page.file_stem(), page.file_name()) else {
            continue;
        };
        lines.push(format!(
            "<li><a href=\"{ARCHIVE_DIR}/{}\">{}</a></li>",
            name.to_string_lossy(),
            escape_html(&stem.to_string_lossy())
        ));
    }
    lines.push("</ul>".to_string());
    lines.push("</body></html>".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;

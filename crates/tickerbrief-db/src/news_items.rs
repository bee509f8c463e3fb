//! Database operations for the `news_items` table.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tickerbrief_core::FeedItem;

use crate::DbError;

/// A row from the `news_items` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct NewsItemRow {
    pub id: i64,
    pub source: String,
    pub title: String,
    /// `None` for items that had no link.
    pub link: Option<String>,
    pub summary: String,
    pub published: String,
    pub fetched_at: String,
}

/// Format a fetch timestamp the way rows store it: `YYYY-MM-DDTHH:MM:SSZ`.
#[must_use]
pub fn format_fetched_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Insert `items`, skipping any whose link is already stored.
///
/// Runs in a single transaction. Empty links are stored as `NULL`, so
/// linkless items never collide with each other. Returns the number of rows
/// actually inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the transaction fails.
pub async fn insert_news_items(
    pool: &SqlitePool,
    items: &[FeedItem],
    fetched_at: &str,
) -> Result<u64, DbError> {
    if items.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for item in items {
        let link = Some(item.link.as_str()).filter(|l| !l.is_empty());
        let result = sqlx::query(
            "INSERT OR IGNORE INTO news_items \
                 (source, title, link, summary, published, fetched_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(item.source.as_str())
        .bind(item.title.as_str())
        .bind(link)
        .bind(item.summary.as_str())
        .bind(item.published.as_str())
        .bind(fetched_at)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;

    tracing::debug!(offered = items.len(), inserted, "stored news items");
    Ok(inserted)
}

/// List the most recently stored items, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_news_items(pool: &SqlitePool, limit: i64) -> Result<Vec<NewsItemRow>, DbError> {
    let rows = sqlx::query_as::<_, NewsItemRow>(
        "SELECT id, source, title, link, summary, published, fetched_at \
         FROM news_items \
         ORDER BY id DESC \
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count stored items.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_news_items(pool: &SqlitePool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news_items")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

//! Response validation and reshaping. No I/O: takes a body, returns a report.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use super::model::{SentimentReport, SentimentRow, SentimentSummary};
use super::params::NewsQuery;
use super::wire::{Article, Entity, NewsEnvelope};
use crate::core::Error;

/// Parses a `news/all` body and turns it into a report for `query`.
pub(crate) fn normalize(body: &str, query: &NewsQuery) -> Result<SentimentReport, Error> {
    let envelope: NewsEnvelope = serde_json::from_str(body)?;

    let meta = envelope
        .meta
        .ok_or_else(|| malformed("missing top-level `meta`"))?;
    let found = meta.found.ok_or_else(|| malformed("missing `meta.found`"))?;
    let articles = envelope
        .data
        .ok_or_else(|| malformed("missing top-level `data` list"))?;

    if found == 0 {
        return Ok(empty(query));
    }

    let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
    let rows = articles
        .iter()
        .take(limit)
        .enumerate()
        .filter_map(|(idx, article)| row_for(article, idx, query).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        symbol = %query.symbol,
        found,
        kept = rows.len(),
        dropped = articles.len().min(limit) - rows.len(),
        "normalized news response"
    );

    let summary = SentimentSummary::from_rows(&rows, found);
    Ok(SentimentReport {
        symbol: query.symbol,
        rows,
        summary,
    })
}

fn empty(query: &NewsQuery) -> SentimentReport {
    SentimentReport {
        symbol: query.symbol,
        rows: Vec::new(),
        summary: SentimentSummary::from_rows(&[], 0),
    }
}

/// First entity tagged with `symbol`, if any. A missing or non-list `entities` counts as empty.
fn first_match<'a>(raw: &'a Value, symbol: &str) -> Option<&'a Value> {
    raw.get("entities")
        .and_then(Value::as_array)?
        .iter()
        .find(|e| e.get("symbol").and_then(Value::as_str) == Some(symbol))
}

fn row_for(raw: &Value, idx: usize, query: &NewsQuery) -> Result<Option<SentimentRow>, Error> {
    let Some(raw_entity) = first_match(raw, query.symbol.as_str()) else {
        return Ok(None);
    };
    let entity = Entity::deserialize(raw_entity)
        .map_err(|e| malformed(format!("data[{idx}]: matched entity: {e}")))?;

    let score = entity
        .sentiment_score
        .ok_or_else(|| malformed(format!("data[{idx}]: matched entity has no `sentiment_score`")))?;
    if !query.filter.accepts(score) {
        return Ok(None);
    }

    let article = Article::deserialize(raw).map_err(|e| malformed(format!("data[{idx}]: {e}")))?;
    let title = required(article.title.as_deref(), idx, "title")?;
    let source = required(article.source.as_deref(), idx, "source")?;
    let url = required(article.url.as_deref(), idx, "url")?;
    let published_at = required(article.published_at.as_deref(), idx, "published_at")?;
    let date = publication_day(published_at).ok_or_else(|| {
        malformed(format!("data[{idx}]: unparseable `published_at` {published_at:?}"))
    })?;

    Ok(Some(SentimentRow {
        title: title.to_string(),
        source: source.to_string(),
        date,
        sentiment_score: score,
        url: url.to_string(),
        excerpt: excerpt(&article, &entity),
    }))
}

fn required<'a>(value: Option<&'a str>, idx: usize, field: &str) -> Result<&'a str, Error> {
    value.ok_or_else(|| malformed(format!("data[{idx}]: missing `{field}`")))
}

/// The calendar day of an ISO-8601 timestamp, as written (no timezone shift).
fn publication_day(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// First non-blank highlight of the matched entity, else the article snippet or description.
fn excerpt(article: &Article, entity: &Entity) -> Option<String> {
    entity
        .highlights
        .iter()
        .flatten()
        .filter_map(|h| h.highlight.as_deref())
        .chain(article.snippet.as_deref())
        .chain(article.description.as_deref())
        .map(strip_emphasis)
        .find(|s| !s.is_empty())
}

// Highlights wrap the matched term in `<em>` tags.
fn strip_emphasis(s: &str) -> String {
    s.replace("<em>", "").replace("</em>", "").trim().to_string()
}

fn malformed(msg: impl Into<String>) -> Error {
    Error::MalformedResponse(msg.into())
}

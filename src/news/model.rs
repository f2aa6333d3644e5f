use chrono::NaiveDate;
use serde::Serialize;

use super::GoldSymbol;

/// One article's sentiment toward the requested symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRow {
    /// The headline of the article.
    pub title: String,
    /// The publisher domain (e.g., "reuters.com").
    pub source: String,
    /// Publication day.
    pub date: NaiveDate,
    /// The matched entity's score in `[-1, 1]`.
    pub sentiment_score: f64,
    /// A direct link to the article.
    pub url: String,
    /// A highlighted sentence mentioning the symbol, when the upstream supplies one.
    pub excerpt: Option<String>,
}

/// Aggregates over a set of [`SentimentRow`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSummary {
    /// Total articles the upstream reports as matching (`meta.found`).
    pub found: u64,
    /// Number of rows.
    pub count: usize,
    /// Arithmetic mean of the scores; `None` when there are no rows.
    pub mean: Option<f64>,
    /// Rows with a score `> 0`.
    pub positive: usize,
    /// Rows with a score `< 0`.
    pub negative: usize,
}

impl SentimentSummary {
    /// Computes the summary of `rows`.
    pub fn from_rows(rows: &[SentimentRow], found: u64) -> Self {
        let count = rows.len();
        let total: f64 = rows.iter().map(|r| r.sentiment_score).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = (count > 0).then(|| total / count as f64);
        Self {
            found,
            count,
            mean,
            positive: rows.iter().filter(|r| r.sentiment_score > 0.0).count(),
            negative: rows.iter().filter(|r| r.sentiment_score < 0.0).count(),
        }
    }
}

/// The normalized outcome of a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    /// The symbol the rows were matched against.
    pub symbol: GoldSymbol,
    /// Rows in upstream order.
    pub rows: Vec<SentimentRow>,
    /// Aggregates over `rows`.
    pub summary: SentimentSummary,
}

impl SentimentReport {
    /// `true` when no article matched; a valid outcome, not a failure.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(index, score)` pairs for a line chart, in row order.
    pub fn chart_points(&self) -> Vec<(usize, f64)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.sentiment_score))
            .collect()
    }
}

use polars::prelude::*;

use crate::news::{SentimentReport, SentimentRow};

/// Trait for converting sentiment results into Polars DataFrames.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for [SentimentRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let titles: Vec<&str> = self.iter().map(|r| r.title.as_str()).collect();
        let sources: Vec<&str> = self.iter().map(|r| r.source.as_str()).collect();
        let dates: Vec<String> = self.iter().map(|r| r.date.to_string()).collect();
        let scores: Vec<f64> = self.iter().map(|r| r.sentiment_score).collect();
        let urls: Vec<&str> = self.iter().map(|r| r.url.as_str()).collect();
        let excerpts: Vec<Option<&str>> = self.iter().map(|r| r.excerpt.as_deref()).collect();

        df!(
            "title" => titles,
            "source" => sources,
            "date" => dates,
            "sentiment_score" => scores,
            "url" => urls,
            "excerpt" => excerpts,
        )
    }
}

impl ToDataFrame for SentimentReport {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        self.rows.as_slice().to_dataframe()
    }
}

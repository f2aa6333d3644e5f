//! xau-sentiment: gold news sentiment from the Marketaux API.
//!
//! One call fetches recent English-language articles tagged with a gold
//! instrument (`XAU` spot or the `XAUUSD` pair), keeps the articles whose
//! entity list mentions that symbol, and returns flat rows plus summary
//! statistics ready for a table, metrics panel or line chart.
//!
//! ```no_run
//! use xau_sentiment::{Client, GoldSymbol, SentimentFilter};
//!
//! # async fn run() -> Result<(), xau_sentiment::Error> {
//! let client = Client::builder().api_token_from_env().build()?;
//! let report = client
//!     .news(GoldSymbol::Xau)
//!     .limit(20)
//!     .sentiment(SentimentFilter::Negative)
//!     .fetch()
//!     .await?;
//!
//! for row in &report.rows {
//!     println!("{} {:+.3} {}", row.date, row.sentiment_score, row.title);
//! }
//! if let Some(mean) = report.summary.mean {
//!     println!("mean sentiment: {mean:.3}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod news;

pub use crate::core::{API_TOKEN_ENV, Client, ClientBuilder, Error};
pub use news::{
    DEFAULT_LIMIT, GoldSymbol, MAX_LIMIT, MIN_LIMIT, NewsBuilder, SentimentFilter,
    SentimentReport, SentimentRow, SentimentSummary,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;

//! Gold news sentiment: request parameters, the `news/all` fetch and row normalization.

mod api;
mod model;
mod normalize;
mod params;
mod wire;

pub use model::{SentimentReport, SentimentRow, SentimentSummary};
pub use params::{DEFAULT_LIMIT, GoldSymbol, MAX_LIMIT, MIN_LIMIT, SentimentFilter};

use crate::core::{Client, Error};
use params::NewsQuery;

/// A builder for fetching gold news sentiment for one symbol.
#[derive(Debug, Clone)]
pub struct NewsBuilder {
    client: Client,
    symbol: GoldSymbol,
    limit: u32,
    filter: SentimentFilter,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &Client, symbol: GoldSymbol) -> Self {
        Self {
            client: client.clone(),
            symbol,
            limit: DEFAULT_LIMIT,
            filter: SentimentFilter::default(),
        }
    }

    /// Sets the maximum number of articles to request (`1..=50`).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Restricts results by sentiment sign.
    #[must_use]
    pub const fn sentiment(mut self, filter: SentimentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Issues the request and normalizes the response.
    ///
    /// Exactly one GET is sent; there is no retry. An upstream reporting zero
    /// matches yields an empty report rather than an error.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParams`] if the limit is out of range (nothing is sent).
    /// - [`Error::Http`], [`Error::Status`] or [`Error::Api`] if the upstream
    ///   cannot be reached or answers with a non-2xx status.
    /// - [`Error::MalformedResponse`] if the body lacks `meta.found`, `data`,
    ///   or a required field of a matched article.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self),
            err,
            fields(symbol = %self.symbol, limit = self.limit, filter = ?self.filter)
        )
    )]
    pub async fn fetch(self) -> Result<SentimentReport, Error> {
        let query = NewsQuery {
            symbol: self.symbol,
            limit: self.limit,
            filter: self.filter,
        };
        api::fetch_sentiment(&self.client, query).await
    }
}

//! Public client surface + builder.
//! Defaults (endpoint, UA, token variable) live in `constants`.

mod constants;

pub use constants::API_TOKEN_ENV;

use crate::core::Error;
use crate::news::{GoldSymbol, NewsBuilder, SentimentFilter, SentimentReport};
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client as HttpClient;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Handle to the Marketaux news API.
///
/// Cheap to clone; holds no mutable state between requests.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_news: Url,
    api_token: Arc<str>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_news", &self.base_news.as_str())
            .field("api_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Starts a news request for `symbol`.
    pub fn news(&self, symbol: GoldSymbol) -> NewsBuilder {
        NewsBuilder::new(self, symbol)
    }

    /// Fetches and normalizes gold news sentiment in one call.
    ///
    /// Shorthand for `client.news(symbol).limit(limit).sentiment(filter).fetch()`.
    ///
    /// # Errors
    ///
    /// See [`NewsBuilder::fetch`].
    pub async fn gold_sentiment(
        &self,
        symbol: GoldSymbol,
        limit: u32,
        filter: SentimentFilter,
    ) -> Result<SentimentReport, Error> {
        self.news(symbol).limit(limit).sentiment(filter).fetch().await
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures a [`Client`]; only the API token is required.
#[derive(Default)]
pub struct ClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    api_token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Set the Marketaux API token.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Read the API token from `MARKETAUX_API_TOKEN`, if set.
    ///
    /// A token already given through [`Self::api_token`] wins.
    #[must_use]
    pub fn api_token_from_env(mut self) -> Self {
        if self.api_token.is_none() {
            self.api_token = std::env::var(API_TOKEN_ENV).ok();
        }
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://api.marketaux.com/v1/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no (or a blank) API token was provided,
    /// [`Error::Url`] if the default base URL cannot be parsed, and
    /// [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client, Error> {
        let api_token = match self.api_token {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(Error::Config(format!(
                    "no Marketaux API token; set {API_TOKEN_ENV} or call ClientBuilder::api_token"
                )));
            }
        };

        let mut base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        // `Url::join` replaces the last segment unless the base ends with a slash.
        if !base_news.path().ends_with('/') {
            let path = format!("{}/", base_news.path());
            base_news.set_path(&path);
        }

        let mut httpb = HttpClient::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(Client {
            http,
            base_news,
            api_token: Arc::from(api_token),
        })
    }
}

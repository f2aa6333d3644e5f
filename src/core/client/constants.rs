//! Centralized constants for default endpoints, UA and credentials.

/// Identifies this client to the upstream.
pub(crate) const USER_AGENT: &str = concat!("xau-sentiment/", env!("CARGO_PKG_VERSION"));

/// Marketaux API base (`news/all` is joined onto it).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://api.marketaux.com/v1/";

/// Environment variable consulted by [`super::ClientBuilder::api_token_from_env`].
pub const API_TOKEN_ENV: &str = "MARKETAUX_API_TOKEN";

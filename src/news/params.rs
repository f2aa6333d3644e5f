use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::core::Error;

/// Smallest accepted article limit.
pub const MIN_LIMIT: u32 = 1;
/// Largest accepted article limit.
pub const MAX_LIMIT: u32 = 50;
/// Article limit used when none is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Source language restriction sent with every request.
pub(crate) const LANGUAGE: &str = "en";
/// Source-country allowlist sent with every request.
pub(crate) const COUNTRIES: &str = "us,gb,ca,au";
/// Upper bound sent for [`SentimentFilter::Negative`]; keeps exact zero out upstream.
pub(crate) const NEGATIVE_EPSILON: f64 = -0.0001;

/// The gold instruments the upstream tags articles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GoldSymbol {
    /// Gold spot.
    #[serde(rename = "XAU")]
    Xau,
    /// Gold priced in US dollars.
    #[serde(rename = "XAUUSD")]
    XauUsd,
}

impl GoldSymbol {
    /// Every supported symbol, in display order.
    pub const ALL: [Self; 2] = [Self::Xau, Self::XauUsd];

    /// The code the upstream uses both in requests and in entity tags.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xau => "XAU",
            Self::XauUsd => "XAUUSD",
        }
    }

    /// A human label suitable for a picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xau => "XAU (Gold Spot)",
            Self::XauUsd => "XAUUSD (Gold vs USD)",
        }
    }
}

impl fmt::Display for GoldSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoldSymbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XAU" => Ok(Self::Xau),
            "XAUUSD" | "XAU/USD" => Ok(Self::XauUsd),
            other => Err(Error::InvalidParams(format!(
                "unsupported symbol {other:?}; expected XAU or XAUUSD"
            ))),
        }
    }
}

/// Restricts results by the sign of the matched entity's sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentFilter {
    /// No restriction.
    #[default]
    Any,
    /// Scores `>= 0`.
    NonNegative,
    /// Scores `< 0`.
    Negative,
}

impl SentimentFilter {
    /// Whether `score` passes this filter.
    pub fn accepts(self, score: f64) -> bool {
        match self {
            Self::Any => true,
            Self::NonNegative => score >= 0.0,
            Self::Negative => score < 0.0,
        }
    }

    /// The single query bound this filter implies, if any.
    pub(crate) fn bound(self) -> Option<(&'static str, f64)> {
        match self {
            Self::Any => None,
            Self::NonNegative => Some(("sentiment_gte", 0.0)),
            Self::Negative => Some(("sentiment_lte", NEGATIVE_EPSILON)),
        }
    }
}

impl FromStr for SentimentFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "all" => Ok(Self::Any),
            "positive" | "non-negative" | "non_negative" | "nonnegative" => Ok(Self::NonNegative),
            "negative" => Ok(Self::Negative),
            other => Err(Error::InvalidParams(format!(
                "unknown sentiment filter {other:?}; expected any, non-negative or negative"
            ))),
        }
    }
}

/// A fully-specified request against `news/all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NewsQuery {
    pub(crate) symbol: GoldSymbol,
    pub(crate) limit: u32,
    pub(crate) filter: SentimentFilter,
}

impl NewsQuery {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            return Err(Error::InvalidParams(format!(
                "limit must be within {MIN_LIMIT}..={MAX_LIMIT}, got {}",
                self.limit
            )));
        }
        Ok(())
    }

    /// Appends every query pair, token included, to `url`.
    pub(crate) fn apply(&self, url: &mut Url, api_token: &str) {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("api_token", api_token)
            .append_pair("symbols", self.symbol.as_str())
            .append_pair("filter_entities", "true")
            .append_pair("language", LANGUAGE)
            .append_pair("countries", COUNTRIES)
            .append_pair("limit", &self.limit.to_string());
        if let Some((key, value)) = self.filter.bound() {
            qp.append_pair(key, &value.to_string());
        }
    }
}

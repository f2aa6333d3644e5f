use serde::Deserialize;

// Every field is optional here; `normalize` decides what is required so a
// missing field becomes a `MalformedResponse` with a useful message rather
// than a bare serde error.
//
// Articles stay as raw JSON until their entity list matches the requested
// symbol; only then are `Article` and the matched `Entity` decoded.

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) meta: Option<Meta>,
    pub(crate) data: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
pub(crate) struct Meta {
    pub(crate) found: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct Article {
    pub(crate) title: Option<String>,
    pub(crate) source: Option<String>,
    pub(crate) published_at: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) snippet: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Entity {
    pub(crate) symbol: Option<String>,
    pub(crate) sentiment_score: Option<f64>,
    pub(crate) highlights: Option<Vec<Highlight>>,
}

#[derive(Deserialize)]
pub(crate) struct Highlight {
    pub(crate) highlight: Option<String>,
}

/// Body Marketaux sends alongside 4xx/5xx statuses.
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: ApiError,
}

#[derive(Deserialize)]
pub(crate) struct ApiError {
    pub(crate) code: String,
    pub(crate) message: String,
}

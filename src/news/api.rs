use crate::{
    core::{Client, Error, net},
    news::{model::SentimentReport, normalize::normalize, params::NewsQuery, wire},
};

const ENDPOINT: &str = "news/all";

pub(super) async fn fetch_sentiment(
    client: &Client,
    query: NewsQuery,
) -> Result<SentimentReport, Error> {
    query.validate()?;

    let mut url = client.base_news().join(ENDPOINT)?;
    query.apply(&mut url, client.api_token());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        url = %net::redact(&url),
        symbol = %query.symbol,
        limit = query.limit,
        filter = ?query.filter,
        "requesting news"
    );

    let resp = client.http().get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        let url = net::redact(resp.url());
        // An unreadable error body still leaves the status to report.
        let body = match resp.text().await {
            Ok(text) => text,
            Err(_) => String::new(),
        };
        return Err(status_error(status.as_u16(), url, &body));
    }

    let body = net::read_body(resp, "news_all", query.symbol.as_str()).await?;
    normalize(&body, &query)
}

/// Prefers the upstream's own error envelope over a bare status when one is present.
fn status_error(status: u16, url: String, body: &str) -> Error {
    match serde_json::from_str::<wire::ErrorEnvelope>(body) {
        Ok(env) => Error::Api {
            status,
            code: env.error.code,
            message: env.error.message,
        },
        Err(_) => Error::Status { status, url },
    }
}

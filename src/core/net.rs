/// Reads a successful response body.
///
/// Built with `test-mode` and run with `MARKETAUX_RECORD=1`, the body is also
/// stored as `tests/fixtures/{endpoint}_{symbol}.json` for offline tests.
pub(crate) async fn read_body(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
) -> Result<String, reqwest::Error> {
    let body = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if crate::core::fixtures::recording() {
            crate::core::fixtures::record(&format!("{endpoint}_{symbol}"), &body);
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (endpoint, symbol);

    Ok(body)
}

/// Drops the query string (which carries the API token) from a URL before it is reported.
pub(crate) fn redact(url: &url::Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}

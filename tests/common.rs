#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;
use xau_sentiment::Client;

pub const TOKEN: &str = "test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{symbol}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_token(TOKEN)
        .base_news(Url::parse(&format!("{}/v1/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// Mocks `GET /v1/news/all` for `symbol`, answering with a recorded fixture.
pub fn mock_news_all<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/news/all")
            .query_param("api_token", TOKEN)
            .query_param("symbols", symbol);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("news_all", symbol, "json"));
    })
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("MARKETAUX_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("MARKETAUX_RECORD").ok().as_deref() == Some("1")
}

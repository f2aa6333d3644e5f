use httpmock::Method::GET;
use url::Url;
use xau_sentiment::{Client, Error, GoldSymbol, SentimentFilter};

use crate::common::{TOKEN, client_for, setup_server};

#[tokio::test]
async fn non_2xx_is_a_connection_error_without_token() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(503).body("upstream unavailable");
    });
    let client = client_for(&server);

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();
    // No retry: exactly one hit.
    mock.assert_calls(1);

    assert!(err.is_connection());
    match &err {
        Error::Status { status, url } => {
            assert_eq!(*status, 503);
            assert!(url.ends_with("/v1/news/all"), "{url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn marketaux_error_envelope_is_surfaced() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":{"code":"invalid_api_token","message":"An invalid API token was supplied."}}"#);
    });
    let client = client_for(&server);

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();
    mock.assert();

    assert!(err.is_connection());
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 401);
            assert_eq!(code, "invalid_api_token");
            assert!(message.contains("invalid API token"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_a_connection_error() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .api_token(TOKEN)
        .base_news(Url::parse("http://127.0.0.1:1/v1/").unwrap())
        .build()
        .unwrap();

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();

    assert!(matches!(err, Error::Http(_)), "got {err:?}");
    assert!(err.is_connection());
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn missing_meta_is_malformed() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(200).body(r#"{"data":[]}"#);
    });
    let client = client_for(&server);

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();
    match err {
        Error::MalformedResponse(msg) => assert!(msg.contains("meta"), "{msg}"),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_data_is_malformed() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(200).body(r#"{"meta":{"found":3}}"#);
    });
    let client = client_for(&server);

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();
    assert!(err.is_malformed(), "got {err:?}");
    assert!(!err.is_connection());
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(200).body("<html>maintenance</html>");
    });
    let client = client_for(&server);

    let err = client.news(GoldSymbol::Xau).fetch().await.unwrap_err();
    assert!(err.is_malformed(), "got {err:?}");
}

#[tokio::test]
async fn out_of_range_limit_sends_nothing() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/news/all");
        then.status(200).body(r#"{"meta":{"found":0},"data":[]}"#);
    });
    let client = client_for(&server);

    for limit in [0, 51] {
        let err = client
            .gold_sentiment(GoldSymbol::Xau, limit, SentimentFilter::Any)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)), "got {err:?}");
    }
    assert_eq!(mock.calls(), 0);
}

#[test]
fn missing_token_is_a_config_error() {
    let err = Client::builder().build().unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
    assert!(!err.is_connection());
}

use httpmock::Method::GET;
use xau_sentiment::{GoldSymbol, SentimentFilter};

use crate::common::{client_for, fixture, setup_server};

#[tokio::test]
async fn negative_filter_sends_epsilon_bound_and_keeps_only_negative_rows() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/news/all")
            .query_param("symbols", "XAU")
            .query_param("sentiment_lte", "-0.0001")
            .query_param_missing("sentiment_gte");
        // Serve the unfiltered fixture to check the local predicate too.
        then.status(200).body(fixture("news_all", "XAU", "json"));
    });
    let client = client_for(&server);

    let report = client
        .gold_sentiment(GoldSymbol::Xau, 10, SentimentFilter::Negative)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.rows.len(), 1);
    assert!(report.rows.iter().all(|r| r.sentiment_score < 0.0));
    assert_eq!(report.summary.positive, 0);
    assert_eq!(report.summary.negative, 1);
}

#[tokio::test]
async fn non_negative_filter_sends_lower_bound_only() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/news/all")
            .query_param("symbols", "XAU")
            .query_param("sentiment_gte", "0")
            .query_param_missing("sentiment_lte");
        then.status(200).body(fixture("news_all", "XAU", "json"));
    });
    let client = client_for(&server);

    let report = client
        .news(GoldSymbol::Xau)
        .sentiment(SentimentFilter::NonNegative)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(report.rows.len(), 2);
    assert!(report.rows.iter().all(|r| r.sentiment_score >= 0.0));
}

use xau_sentiment::{Client, GoldSymbol, SentimentFilter};

#[tokio::test]
#[ignore]
async fn live_news_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let client = Client::builder().api_token_from_env().build().unwrap();

    // With `--features test-mode` and MARKETAUX_RECORD=1 this writes
    // `tests/fixtures/news_all_XAU.json`.
    let report = client.news(GoldSymbol::Xau).fetch().await.unwrap();

    if !crate::common::is_recording() {
        assert!(report.rows.len() <= 10);
        for row in &report.rows {
            assert!((-1.0..=1.0).contains(&row.sentiment_score));
            assert!(!row.title.is_empty());
            assert!(!row.url.is_empty());
        }
    }
}

#[tokio::test]
#[ignore]
async fn live_negative_filter_holds() {
    if !crate::common::live_or_record_enabled() || crate::common::is_recording() {
        return;
    }

    let client = Client::builder().api_token_from_env().build().unwrap();
    let report = client
        .gold_sentiment(GoldSymbol::XauUsd, 5, SentimentFilter::Negative)
        .await
        .unwrap();

    assert!(report.rows.len() <= 5);
    assert!(report.rows.iter().all(|r| r.sentiment_score < 0.0));
}

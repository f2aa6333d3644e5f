//! Terminal rendition of the gold news sentiment dashboard.
//!
//! Usage: `cargo run --example gold_sentiment -- [XAU|XAUUSD] [limit] [any|non-negative|negative]`
//! Requires `MARKETAUX_API_TOKEN` in the environment.

use std::process::ExitCode;

use xau_sentiment::{
    API_TOKEN_ENV, Client, DEFAULT_LIMIT, Error, GoldSymbol, SentimentFilter, SentimentReport,
};

const CHART_WIDTH: usize = 40;

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (symbol, limit, filter) = match parse_args(&args) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let client = match Client::builder().api_token_from_env().build() {
        Ok(c) => c,
        Err(Error::Config(msg)) => {
            eprintln!("Configuration error: {msg}");
            eprintln!("Export it first, e.g. `export {API_TOKEN_ENV}=your_key`.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Failed to build client: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Gold news sentiment for {}", symbol.label());
    match client.gold_sentiment(symbol, limit, filter).await {
        Ok(report) if report.is_empty() => {
            println!("No articles found.");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            render(&report);
            ExitCode::SUCCESS
        }
        Err(e) if e.is_connection() => {
            eprintln!("Connection error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<(GoldSymbol, u32, SentimentFilter), Error> {
    let symbol = match args.first() {
        Some(s) => s.parse()?,
        None => GoldSymbol::Xau,
    };
    let limit = match args.get(1) {
        Some(s) => s
            .parse()
            .map_err(|_| Error::InvalidParams(format!("limit must be a number, got {s:?}")))?,
        None => DEFAULT_LIMIT,
    };
    let filter = match args.get(2) {
        Some(s) => s.parse()?,
        None => SentimentFilter::Any,
    };
    Ok((symbol, limit, filter))
}

fn render(report: &SentimentReport) {
    let s = &report.summary;
    println!(
        "Found {} article(s) for {} ({} upstream matches)\n",
        s.count, report.symbol, s.found
    );

    println!("{:<10}  {:>7}  {:<20}  Title", "Date", "Score", "Source");
    for row in &report.rows {
        println!(
            "{:<10}  {:>+7.3}  {:<20}  {}",
            row.date,
            row.sentiment_score,
            truncate(&row.source, 20),
            truncate(&row.title, 70)
        );
        if let Some(excerpt) = &row.excerpt {
            println!("{:<41}> {}", "", truncate(excerpt, 90));
        }
        println!("{:<41}{}", "", row.url);
    }

    println!();
    if let Some(mean) = s.mean {
        println!("Mean sentiment: {mean:+.3}");
    }
    println!("Positive: {}   Negative: {}\n", s.positive, s.negative);

    println!("Sentiment by article:");
    for (i, score) in report.chart_points() {
        println!("{i:>3} {}", bar(score));
    }
}

// Centered bar: left half for negative scores, right half for positive.
fn bar(score: f64) -> String {
    let half = CHART_WIDTH / 2;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let len = ((score.abs().min(1.0)) * half as f64).round() as usize;
    let mut line = vec![' '; CHART_WIDTH + 1];
    line[half] = '|';
    if score < 0.0 {
        for c in &mut line[half - len..half] {
            *c = '#';
        }
    } else {
        for c in &mut line[half + 1..=half + len] {
            *c = '#';
        }
    }
    format!("{} {score:+.3}", line.into_iter().collect::<String>())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

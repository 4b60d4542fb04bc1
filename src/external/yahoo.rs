use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::external::price_provider::{
    parse_request_date, ExternalPricePoint, PriceProvider, PriceProviderError,
};

pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

// Minimal response structs (only what we need)
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    // Omitted entirely when the range covers no trading days.
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Unix-second bounds covering both request dates in full: start at 00:00:00
/// UTC, end at 23:59:59 UTC, so the end date stays inside the window.
fn day_bounds(start_date: &str, end_date: &str) -> Result<(i64, i64), PriceProviderError> {
    let start = parse_request_date(start_date)?;
    let end = parse_request_date(end_date)?;

    let period1 = Utc
        .from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap())
        .timestamp();
    let period2 = Utc
        .from_utc_datetime(&end.and_hms_opt(23, 59, 59).unwrap())
        .timestamp();

    Ok((period1, period2))
}

fn extract_points(result: YahooResult) -> Result<Vec<ExternalPricePoint>, PriceProviderError> {
    // timestamp aligns with the close list by index
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| PriceProviderError::BadResponse("missing quote".into()))?
        .close;

    let mut out = Vec::new();

    for (i, ts) in result.timestamp.iter().enumerate() {
        // skip missing closes
        let Some(close) = closes.get(i).and_then(|v| *v) else { continue };

        let date = DateTime::from_timestamp(*ts, 0)
            .ok_or_else(|| PriceProviderError::Parse("bad timestamp".into()))?
            .date_naive();

        out.push(ExternalPricePoint { date, close });
    }

    // Ensure ascending by date
    out.sort_by_key(|p| p.date);

    Ok(out)
}

#[async_trait]
impl PriceProvider for YahooProvider {
    async fn fetch_close_history(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ExternalPricePoint>, PriceProviderError> {
        let (period1, period2) = day_bounds(start_date, end_date)?;

        let url = format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{symbol}?period1={period1}&period2={period2}&interval=1d"
        );

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PriceProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PriceProviderError::RateLimited);
        }

        let body = resp
            .json::<YahooChartResponse>()
            .await
            .map_err(|e| PriceProviderError::Parse(e.to_string()))?;

        if let Some(error) = body.chart.error {
            return Err(PriceProviderError::BadResponse(error.to_string()));
        }

        let result = body
            .chart
            .result
            .and_then(|mut r| r.pop())
            .ok_or_else(|| PriceProviderError::BadResponse("missing result".into()))?;

        extract_points(result)
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalPricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Daily closing prices for `symbol` between `start_date` and `end_date`
    /// (inclusive), ordered by date ascending. An empty vec means the
    /// provider had no observations for the range.
    ///
    /// Dates arrive exactly as the caller typed them; each provider parses
    /// them and rejects what it cannot understand.
    async fn fetch_close_history(
        &self,
        symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ExternalPricePoint>, PriceProviderError>;
}

pub(crate) fn parse_request_date(raw: &str) -> Result<NaiveDate, PriceProviderError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| PriceProviderError::Parse(format!("unusable date {raw:?}: {e}")))
}

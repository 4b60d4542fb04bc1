use async_trait::async_trait;

use crate::external::price_provider::{
    parse_request_date, ExternalPricePoint, PriceProvider, PriceProviderError,
};

/// Offline provider for local development: a random walk with one observation
/// per calendar day, weekends included. Prices stay positive because each
/// step scales the previous close by at most ±1%.
pub struct MockProvider;

#[async_trait]
impl PriceProvider for MockProvider {
    async fn fetch_close_history(
        &self,
        _symbol: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ExternalPricePoint>, PriceProviderError> {
        let start = parse_request_date(start_date)?;
        let end = parse_request_date(end_date)?;

        let mut points = Vec::new();
        let mut current = 100.0_f64;

        for date in start.iter_days().take_while(|d| *d <= end) {
            current *= 1.0 + (rand::random::<f64>() - 0.5) * 0.02;
            points.push(ExternalPricePoint { date, close: current });
        }

        Ok(points)
    }
}

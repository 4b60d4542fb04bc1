use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::external::price_provider::{ExternalPricePoint, PriceProvider, PriceProviderError};
use crate::models::{Comparison, InvestmentRequest, PriceSeries};
use crate::services::{chart_service, series_export_service};
use crate::store::charts::ChartStore;

/// Yahoo symbol for the Bitcoin leg of every comparison.
pub const BITCOIN_SYMBOL: &str = "BTC-USD";

/// Runs one comparison end to end: fetch both close series, project the
/// invested amount through each, export the raw series, render the chart.
///
/// Both entry points (`/compare` and `/upload-request`) funnel into this
/// function.
pub async fn compare(
    provider: &dyn PriceProvider,
    charts: &ChartStore,
    request: &InvestmentRequest,
) -> Result<Comparison, AppError> {
    let btc_points = fetch_series(provider, BITCOIN_SYMBOL, request).await?;
    let stock_points = fetch_series(provider, &request.stock_symbol, request).await?;

    let (Some(btc), Some(stock)) = (
        PriceSeries::from_points(btc_points),
        PriceSeries::from_points(stock_points),
    ) else {
        info!(
            "No data for {} or {} between {} and {}",
            BITCOIN_SYMBOL, request.stock_symbol, request.start_date, request.end_date
        );
        return Err(AppError::NoData);
    };

    let bitcoin_return = btc.projected_value(request.amount);
    let stock_return = stock.projected_value(request.amount);

    // The raw-series dump is auxiliary output; a full disk must not take the
    // comparison down with it.
    if let Err(e) = series_export_service::export_close_series(&request.stock_symbol, &btc, &stock)
    {
        warn!(
            "Failed to export close series for {}: {:#}",
            request.stock_symbol, e
        );
    }

    let chart_url = chart_service::render_comparison(charts, request, &btc, &stock)?;

    Ok(Comparison {
        bitcoin_return,
        stock_return,
        bitcoin_gain_loss: bitcoin_return - request.amount,
        stock_gain_loss: stock_return - request.amount,
        chart_url,
    })
}

async fn fetch_series(
    provider: &dyn PriceProvider,
    symbol: &str,
    request: &InvestmentRequest,
) -> Result<Vec<ExternalPricePoint>, AppError> {
    match provider
        .fetch_close_history(symbol, &request.start_date, &request.end_date)
        .await
    {
        Ok(points) => {
            info!("Fetched {} closes for {}", points.len(), symbol);
            Ok(points)
        }
        Err(PriceProviderError::RateLimited) => Err(AppError::RateLimited),
        Err(e) => {
            error!("Failed to fetch close history for {}: {}", symbol, e);
            Err(AppError::External(e.to_string()))
        }
    }
}

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{Comparison, InvestmentRequest};
use crate::services::comparison_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/compare", post(compare))
}

pub async fn compare(
    State(state): State<AppState>,
    Json(request): Json<InvestmentRequest>,
) -> Result<Json<Comparison>, AppError> {
    info!(
        "POST /compare - Bitcoin vs {} from {} to {}",
        request.stock_symbol, request.start_date, request.end_date
    );

    let comparison = comparison_service::compare(
        state.price_provider.as_ref(),
        &state.chart_store,
        &request,
    )
    .await
    .map_err(|e| {
        match &e {
            AppError::NoData => info!("No data for comparison against {}", request.stock_symbol),
            _ => error!("Comparison against {} failed: {}", request.stock_symbol, e),
        }
        e
    })?;

    Ok(Json(comparison))
}

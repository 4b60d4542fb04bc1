use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{Comparison, InvestmentRequest};
use crate::services::{comparison_service, request_csv_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/download-request", post(download_request))
        .route("/upload-request", post(upload_request))
}

pub async fn download_request(
    Json(request): Json<InvestmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "POST /download-request - Serializing request for {}",
        request.stock_symbol
    );

    let csv = request_csv_service::serialize_request(&request).map_err(|e| {
        error!("Failed to build request CSV: {:#}", e);
        AppError::Validation(format!("Failed to build request CSV: {e}"))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"investment_request.csv\""),
    );

    Ok((headers, csv))
}

pub async fn upload_request(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Comparison>, AppError> {
    info!("POST /upload-request - Re-running comparison from uploaded CSV");

    let mut csv_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
            csv_bytes = Some(data);
            break;
        }
    }

    let csv_bytes = csv_bytes
        .ok_or_else(|| AppError::Validation("Missing `file` field in upload".to_string()))?;

    let request = request_csv_service::deserialize_request(&csv_bytes).map_err(|e| {
        error!("Failed to parse uploaded request CSV: {:#}", e);
        AppError::Validation(format!("Failed to parse uploaded request CSV: {e}"))
    })?;

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

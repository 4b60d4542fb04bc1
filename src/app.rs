use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes::{compare, health, requests};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let charts = ServeDir::new(state.chart_store.root().to_path_buf());

    Router::<AppState>::new()
        .route("/", get(index))
        .nest("/health", health::router())
        .merge(compare::router())
        .merge(requests::router())
        .nest_service("/static", charts)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../templates/index.html"))
}

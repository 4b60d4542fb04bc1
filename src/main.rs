mod app;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::external::mock::MockProvider;
use crate::external::yahoo::YahooProvider;
use crate::logging::LoggingConfig;
use crate::state::AppState;
use crate::store::charts::ChartStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    // Select price provider based on PRICE_PROVIDER env var (defaults to yahoo)
    let provider_name = std::env::var("PRICE_PROVIDER").unwrap_or_else(|_| "yahoo".to_string());

    let provider: Arc<dyn crate::external::price_provider::PriceProvider> =
        match provider_name.to_lowercase().as_str() {
            "yahoo" => {
                tracing::info!("📊 Using price provider: Yahoo Finance");
                Arc::new(YahooProvider::new())
            }
            "mock" => {
                tracing::info!("📊 Using price provider: mock random walk (offline)");
                Arc::new(MockProvider)
            }
            _ => {
                panic!(
                    "Invalid PRICE_PROVIDER: {}. Must be 'yahoo' or 'mock'",
                    provider_name
                );
            }
        };

    let chart_dir = std::env::var("CHART_DIR").unwrap_or_else(|_| "static".to_string());
    let chart_store = ChartStore::new(chart_dir);
    chart_store.ensure_root()?;

    let state = AppState {
        price_provider: provider,
        chart_store,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Coinpare backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;
use crate::external::price_provider::PriceProvider;
use crate::store::charts::ChartStore;

#[derive(Clone)]
pub struct AppState {
    pub price_provider: Arc<dyn PriceProvider>,
    pub chart_store: ChartStore,
}

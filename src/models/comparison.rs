use serde::{Deserialize, Serialize};

// The outcome of one Bitcoin-versus-stock comparison. Serialized verbatim as
// the response body of `/compare` and `/upload-request`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub bitcoin_return: f64,
    pub stock_return: f64,
    pub bitcoin_gain_loss: f64,
    pub stock_gain_loss: f64,
    pub chart_url: String,
}

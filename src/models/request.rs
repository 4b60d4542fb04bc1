use serde::{Deserialize, Serialize};

// Represents one comparison request as submitted by the UI.
//
// Dates and ticker travel as the user typed them; the market-data provider is
// the only component that parses or rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub amount: f64,
    pub start_date: String,
    pub end_date: String,
    pub stock_symbol: String,
}

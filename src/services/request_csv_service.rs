use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, WriterBuilder};

use crate::models::InvestmentRequest;

/// Serializes a request as exactly one header row
/// (`amount,start_date,end_date,stock_symbol`) and one data row.
pub fn serialize_request(request: &InvestmentRequest) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer
        .serialize(request)
        .context("Failed to serialize request row")?;

    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush request CSV")
}

/// Reads the first data row only; trailing rows, if present, are ignored.
/// Missing or malformed columns fail the whole parse.
pub fn deserialize_request(csv_bytes: &[u8]) -> Result<InvestmentRequest> {
    let mut reader = ReaderBuilder::new().from_reader(csv_bytes);

    match reader.deserialize::<InvestmentRequest>().next() {
        Some(row) => row.context("Malformed request CSV"),
        None => bail!("Request CSV has no data rows"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> InvestmentRequest {
        InvestmentRequest {
            amount: 1000.0,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-06-01".to_string(),
            stock_symbol: "AAPL".to_string(),
        }
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let original = request();
        let bytes = serialize_request(&original).unwrap();
        let restored = deserialize_request(&bytes).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_serialized_shape_is_header_plus_one_row() {
        let bytes = serialize_request(&request()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "amount,start_date,end_date,stock_symbol");
        assert_eq!(lines[1], "1000.0,2024-01-01,2024-06-01,AAPL");
    }

    #[test]
    fn test_only_first_data_row_is_read() {
        let csv = b"amount,start_date,end_date,stock_symbol\n\
                    500,2023-01-01,2023-06-01,TSLA\n\
                    9999,2020-01-01,2020-06-01,MSFT\n";

        let restored = deserialize_request(csv).unwrap();
        assert_eq!(restored.amount, 500.0);
        assert_eq!(restored.stock_symbol, "TSLA");
    }

    #[test]
    fn test_header_only_input_errors() {
        let csv = b"amount,start_date,end_date,stock_symbol\n";
        assert!(deserialize_request(csv).is_err());
    }

    #[test]
    fn test_missing_column_errors() {
        let csv = b"amount,start_date\n1000,2024-01-01\n";
        assert!(deserialize_request(csv).is_err());
    }

    #[test]
    fn test_non_numeric_amount_errors() {
        let csv = b"amount,start_date,end_date,stock_symbol\nlots,2024-01-01,2024-06-01,AAPL\n";
        assert!(deserialize_request(csv).is_err());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::PriceSeries;

/// Directory the close-series dumps land in, relative to the server's working
/// directory. The files exist so fetched data can be re-plotted with external
/// tooling; each export overwrites the previous one for the same symbol.
const EXPORT_DIR: &str = "data";

pub fn export_close_series(
    stock_symbol: &str,
    btc: &PriceSeries,
    stock: &PriceSeries,
) -> Result<()> {
    let dir = PathBuf::from(EXPORT_DIR);
    fs::create_dir_all(&dir).context("Failed to create export directory")?;

    write_series(&dir.join("btc_data.csv"), btc)?;
    write_series(&dir.join(format!("{stock_symbol}_data.csv")), stock)?;

    info!("Exported close series for BTC-USD and {}", stock_symbol);
    Ok(())
}

fn write_series(path: &Path, series: &PriceSeries) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writer.write_record(["Date", "Close"])?;
    for point in series.points() {
        writer.write_record([point.date.to_string(), point.close.to_string()])?;
    }
    writer.flush()?;

    Ok(())
}

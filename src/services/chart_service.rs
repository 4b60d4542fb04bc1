use std::ops::Range;
use std::path::Path;

use chrono::NaiveDate;
use plotters::prelude::*;
use tracing::info;

use crate::errors::AppError;
use crate::models::{InvestmentRequest, PriceSeries};
use crate::store::charts::ChartStore;

const CHART_WIDTH: u32 = 1000;
const CHART_HEIGHT: u32 = 600;

// Series palette: Bitcoin in orange, the chosen stock in blue.
const BITCOIN_COLOR: RGBColor = RGBColor(255, 165, 0);
const STOCK_COLOR: RGBColor = RGBColor(0, 0, 255);

/// Renders both investment-value series into a PNG under the chart store and
/// returns the public URL it is served from. Re-rendering the same request
/// key overwrites the previous image.
pub fn render_comparison(
    charts: &ChartStore,
    request: &InvestmentRequest,
    btc: &PriceSeries,
    stock: &PriceSeries,
) -> Result<String, AppError> {
    let btc_values = btc.value_over_time(request.amount);
    let stock_values = stock.value_over_time(request.amount);

    let path = charts.chart_path(&request.stock_symbol, &request.start_date, &request.end_date);

    draw_chart(&path, &request.stock_symbol, &btc_values, &stock_values)
        .map_err(|e| AppError::Chart(e.to_string()))?;

    info!("Rendered comparison chart to {}", path.display());

    Ok(charts.public_url(&request.stock_symbol, &request.start_date, &request.end_date))
}

fn draw_chart(
    path: &Path,
    stock_symbol: &str,
    btc: &[(NaiveDate, f64)],
    stock: &[(NaiveDate, f64)],
) -> Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) = axis_bounds(btc, stock);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Value of Your Investment Over Time", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Investment Value (USD)")
        .x_labels(8)
        .y_labels(10)
        .label_style(("sans-serif", 14))
        .draw()?;

    chart
        .draw_series(LineSeries::new(btc.iter().copied(), &BITCOIN_COLOR))?
        .label("Bitcoin (BTC-USD)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BITCOIN_COLOR));

    chart
        .draw_series(LineSeries::new(stock.iter().copied(), &STOCK_COLOR))?
        .label(stock_symbol.to_string())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], STOCK_COLOR));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;

    Ok(())
}

fn axis_bounds(
    btc: &[(NaiveDate, f64)],
    stock: &[(NaiveDate, f64)],
) -> (Range<NaiveDate>, Range<f64>) {
    let mut x_min = btc[0].0;
    let mut x_max = btc[0].0;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(date, value) in btc.iter().chain(stock) {
        x_min = x_min.min(date);
        x_max = x_max.max(date);
        y_min = y_min.min(value);
        y_max = y_max.max(value);
    }

    // A single-observation window would give the x-axis zero width.
    if x_min == x_max {
        if let Some(next) = x_max.succ_opt() {
            x_max = next;
        }
    }

    // Pad the y-axis so flat series still plot inside a visible band.
    let pad = ((y_max - y_min) * 0.05).max(1.0);

    (x_min..x_max, (y_min - pad)..(y_max + pad))
}

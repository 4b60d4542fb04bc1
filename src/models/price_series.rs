use chrono::NaiveDate;

use crate::external::price_provider::ExternalPricePoint;

/// Daily closing prices for one symbol, ordered by date ascending.
///
/// Construction guarantees at least one observation, so first/last access is
/// always valid and call sites never index into a raw vec.
///
/// When markets were closed on a requested boundary date, the first and last
/// *available* observations stand in for it. Callers get the nearest trading
/// day, silently.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    points: Vec<ExternalPricePoint>,
}

impl PriceSeries {
    /// Returns `None` when the provider had nothing for the requested range.
    pub fn from_points(mut points: Vec<ExternalPricePoint>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        points.sort_by_key(|p| p.date);
        Some(Self { points })
    }

    pub fn first_close(&self) -> f64 {
        self.points[0].close
    }

    pub fn last_close(&self) -> f64 {
        self.points[self.points.len() - 1].close
    }

    pub fn points(&self) -> &[ExternalPricePoint] {
        &self.points
    }

    /// Ending dollar value of `amount` invested at the first observation and
    /// held through the last. Pure price-ratio projection: no fees, dividends
    /// or compounding schedule.
    pub fn projected_value(&self, amount: f64) -> f64 {
        amount * (self.last_close() / self.first_close())
    }

    /// Dollar value of `amount` at every observation, rebased so the series
    /// starts at exactly `amount`.
    pub fn value_over_time(&self, amount: f64) -> Vec<(NaiveDate, f64)> {
        let base = self.first_close();
        self.points
            .iter()
            .map(|p| (p.date, amount * (p.close / base)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> ExternalPricePoint {
        ExternalPricePoint {
            date: date.parse().unwrap(),
            close,
        }
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(PriceSeries::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_date() {
        let series = PriceSeries::from_points(vec![
            point("2024-03-01", 30.0),
            point("2024-01-01", 10.0),
            point("2024-02-01", 20.0),
        ])
        .unwrap();

        let dates: Vec<NaiveDate> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                "2024-01-01".parse().unwrap(),
                "2024-02-01".parse().unwrap(),
                "2024-03-01".parse().unwrap(),
            ]
        );
        assert_eq!(series.first_close(), 10.0);
        assert_eq!(series.last_close(), 30.0);
    }

    #[test]
    fn test_flat_series_returns_initial_amount() {
        let series = PriceSeries::from_points(vec![
            point("2024-01-01", 42.0),
            point("2024-01-02", 41.0),
            point("2024-01-03", 42.0),
        ])
        .unwrap();

        assert_eq!(series.projected_value(1000.0), 1000.0);
    }

    #[test]
    fn test_projected_value_matches_reference_figures() {
        // 1000 invested, close 100 -> 150 ends at 1500 (+500)
        let btc = PriceSeries::from_points(vec![
            point("2024-01-01", 100.0),
            point("2024-06-01", 150.0),
        ])
        .unwrap();
        assert_eq!(btc.projected_value(1000.0), 1500.0);

        // 1000 invested, close 50 -> 40 ends at 800 (-200)
        let stock = PriceSeries::from_points(vec![
            point("2024-01-01", 50.0),
            point("2024-06-01", 40.0),
        ])
        .unwrap();
        assert_eq!(stock.projected_value(1000.0), 800.0);
    }

    #[test]
    fn test_projected_value_is_linear_in_amount() {
        let series = PriceSeries::from_points(vec![
            point("2024-01-01", 80.0),
            point("2024-01-05", 120.0),
        ])
        .unwrap();

        let base = series.projected_value(250.0);
        assert!((series.projected_value(500.0) - 2.0 * base).abs() < 1e-9);
        assert!((series.projected_value(750.0) - 3.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_value_over_time_starts_at_amount() {
        let series = PriceSeries::from_points(vec![
            point("2024-01-01", 50.0),
            point("2024-01-02", 55.0),
            point("2024-01-03", 40.0),
        ])
        .unwrap();

        let values = series.value_over_time(1000.0);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].1, 1000.0);
        assert_eq!(values[1].1, 1100.0);
        assert_eq!(values[2].1, 800.0);
    }

    #[test]
    fn test_single_observation_series() {
        let series = PriceSeries::from_points(vec![point("2024-01-01", 7.5)]).unwrap();
        assert_eq!(series.points().len(), 1);
        assert_eq!(series.first_close(), series.last_close());
        assert_eq!(series.projected_value(300.0), 300.0);
    }
}

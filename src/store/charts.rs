use std::io;
use std::path::{Path, PathBuf};

/// Filesystem store for rendered comparison charts.
///
/// Charts are keyed by (symbol, start_date, end_date): the same key always
/// maps to the same file, and rendering a key again overwrites the previous
/// image in place. Concurrent writes to one key are not synchronized.
#[derive(Debug, Clone)]
pub struct ChartStore {
    root: PathBuf,
}

impl ChartStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn ensure_root(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(symbol: &str, start_date: &str, end_date: &str) -> String {
        format!("chart_{symbol}_{start_date}_{end_date}.png")
    }

    /// Path the chart for this key is written to.
    pub fn chart_path(&self, symbol: &str, start_date: &str, end_date: &str) -> PathBuf {
        self.root.join(Self::file_name(symbol, start_date, end_date))
    }

    /// URL the chart is served from, under the `/static` route.
    pub fn public_url(&self, symbol: &str, start_date: &str, end_date: &str) -> String {
        format!("/static/{}", Self::file_name(symbol, start_date, end_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_path_matches_reference_layout() {
        let store = ChartStore::new("static");
        assert_eq!(
            store.chart_path("AAPL", "2024-01-01", "2024-06-01"),
            PathBuf::from("static/chart_AAPL_2024-01-01_2024-06-01.png")
        );
    }

    #[test]
    fn test_identical_keys_map_to_identical_paths() {
        let store = ChartStore::new("static");
        assert_eq!(
            store.chart_path("TSLA", "2023-01-01", "2023-12-31"),
            store.chart_path("TSLA", "2023-01-01", "2023-12-31"),
        );
    }

    #[test]
    fn test_public_url_is_served_from_static() {
        let store = ChartStore::new("/var/charts");
        assert_eq!(
            store.public_url("AAPL", "2024-01-01", "2024-06-01"),
            "/static/chart_AAPL_2024-01-01_2024-06-01.png"
        );
    }
}

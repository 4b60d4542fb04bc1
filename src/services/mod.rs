pub(crate) mod chart_service;
pub(crate) mod comparison_service;
pub(crate) mod request_csv_service;
pub(crate) mod series_export_service;

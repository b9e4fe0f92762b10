use serde::{Deserialize, Serialize};

/// One submitted transfer-log line. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRow {
    pub from_date: String,
    pub route: String,
    pub from_driver: String,
    pub from_range: String,
    pub to_date: String,
    pub to_driver: String,
    pub to_range: String,
    /// Row explicitly marked non-transferable.
    #[serde(default)]
    pub locked: bool,
}

impl TransferRow {
    /// Field values in column order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.from_date.as_str(),
            self.route.as_str(),
            self.from_driver.as_str(),
            self.from_range.as_str(),
            self.to_date.as_str(),
            self.to_driver.as_str(),
            self.to_range.as_str(),
        ]
    }
}

/// Body of `POST /pdf`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequest {
    /// Language tag; unknown or missing tags use the configured default.
    #[serde(default)]
    pub lang: Option<String>,
    /// Comma-separated blocked ranges, e.g. `"100-120, 205-210"`.
    #[serde(default)]
    pub blocked_ranges: String,
    #[serde(default)]
    pub rows: Vec<TransferRow>,
}

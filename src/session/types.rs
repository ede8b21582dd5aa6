use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;
use crate::scoring::ScoreResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub score: u8,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRecord>,
}

impl HistoryEntry {
    /// Timestamp for history listings, e.g. "2026-10-19 14:05"
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// The product currently on display together with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedProduct {
    pub product: ProductRecord,
    pub result: ScoreResult,
}

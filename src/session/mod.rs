mod types;

pub use types::{HistoryEntry, ScannedProduct};

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::product::{ProductLookup, UNKNOWN};
use crate::scoring::{score_product, ScoringConfig, FAILURE_MESSAGE};

/// Scan history and the current product for one user session.
///
/// History is append-only: entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
    current: Option<ScannedProduct>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a lookup and record it, stamped with the current time.
    pub fn record_scan(
        &mut self,
        lookup: &ProductLookup,
        config: &ScoringConfig,
    ) -> Result<&ScannedProduct> {
        self.record_scan_at(lookup, config, Utc::now())
    }

    /// Score a lookup and record it with an explicit timestamp.
    ///
    /// A failed lookup leaves both history and the current product untouched.
    pub fn record_scan_at(
        &mut self,
        lookup: &ProductLookup,
        config: &ScoringConfig,
        at: DateTime<Utc>,
    ) -> Result<&ScannedProduct> {
        let product = match lookup {
            ProductLookup::Found(product) => product,
            ProductLookup::Failed { error } => {
                warn!(error = %error, "scan not recorded");
                anyhow::bail!("{}: {}", FAILURE_MESSAGE, error);
            }
        };

        let result = score_product(product, config);
        let entry = HistoryEntry {
            barcode: product.barcode.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            name: product.display_name().to_string(),
            brand: product.display_brand().to_string(),
            score: result.score,
            timestamp: at,
            product: Some(product.clone()),
        };
        info!(barcode = %entry.barcode, score = entry.score, "scan recorded");

        self.history.push(entry);
        let scanned = self.current.insert(ScannedProduct {
            product: product.clone(),
            result,
        });
        Ok(scanned)
    }

    /// Recorded scans, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current(&self) -> Option<&ScannedProduct> {
        self.current.as_ref()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of one product on one day.
///
/// Created once by ingestion from a single raw row, immutable thereafter,
/// and held only in memory for the duration of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub product_name: String,
    pub date: NaiveDate,
    /// Stock on hand that day.
    pub inventory_level: f64,
    /// Units sold/ordered that day.
    pub orders: f64,
    /// Replenishment lead time observed that day.
    pub lead_time_days: f64,
}

impl InventoryRecord {
    /// Total-order key: product id lexicographic, then date ascending.
    ///
    /// Consumers (charting, per-product iteration) depend on record
    /// sequences being sorted by this key.
    pub fn sort_key(&self) -> (&str, NaiveDate) {
        (&self.product_id, self.date)
    }
}

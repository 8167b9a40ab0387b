use serde::{Deserialize, Serialize};

/// Aggregate statistics for one product over all of its records.
///
/// Derived entirely from a validated record sequence; recomputed whenever
/// the record set changes, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_id: String,
    /// Display name for the id — the first-seen name wins when records
    /// disagree.
    pub product_name: String,
    /// Mean inventory level, rounded to a whole number.
    pub avg_inventory: f64,
    /// Mean daily orders, rounded to two decimals.
    pub avg_orders: f64,
    /// Mean observed lead time, rounded to one decimal.
    pub avg_lead_time: f64,
    /// Number of contributing records.
    pub data_points: usize,
}

use serde::{Deserialize, Serialize};

/// One reorder-threshold result row for one product.
///
/// `low <= medium <= high` holds by construction for any valid,
/// non-negative inputs: `medium` and `high` are fixed multiples of `low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLevels {
    pub product_id: String,
    pub product_name: String,
    /// Reorder point: expected lead-time demand plus safety stock.
    pub low: i64,
    /// `round(low * 1.5)`.
    pub medium: i64,
    /// `round(low * 2)`.
    pub high: i64,
    /// Lead time actually applied, rounded to one decimal.
    pub lead_time_used: f64,
    /// Demand actually applied, rounded to two decimals.
    pub avg_daily_sales: f64,
}

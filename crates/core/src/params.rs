use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// User-supplied configuration for one threshold calculation run.
///
/// Constructed fresh per request, never persisted. The engine assumes a
/// parameter set that already passed [`ThresholdParams::validate`]; range
/// violations must be rejected by the caller before calculating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdParams {
    /// Safety-stock margin in percent, 0–100 inclusive.
    pub safety_stock_percentage: f64,
    /// Global demand override for the run. `None` means "compute from the
    /// order history of each product".
    pub average_daily_sales: Option<f64>,
    /// When true, derive lead time per product from its records; otherwise
    /// apply `custom_lead_time` to every product.
    pub use_product_lead_time: bool,
    /// Fallback lead time in days. Only consulted (and only validated) when
    /// `use_product_lead_time` is false.
    pub custom_lead_time: f64,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            safety_stock_percentage: 20.0,
            average_daily_sales: None,
            use_product_lead_time: true,
            custom_lead_time: 7.0,
        }
    }
}

impl ThresholdParams {
    /// Caller-side gate for the threshold engine.
    ///
    /// The engine itself performs no range checks; anything rejected here
    /// must never reach it.
    pub fn validate(&self) -> DomainResult<()> {
        if !(0.0..=100.0).contains(&self.safety_stock_percentage) {
            return Err(DomainError::validation(
                "safety stock percentage must be between 0 and 100",
            ));
        }
        if let Some(sales) = self.average_daily_sales {
            if !sales.is_finite() || sales < 0.0 {
                return Err(DomainError::validation(
                    "average daily sales override cannot be negative",
                ));
            }
        }
        if !self.use_product_lead_time
            && !(self.custom_lead_time.is_finite() && self.custom_lead_time > 0.0)
        {
            return Err(DomainError::validation(
                "custom lead time must be a positive number of days",
            ));
        }
        Ok(())
    }
}

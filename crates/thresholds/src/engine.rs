//! Per-product threshold derivation.

use indexmap::IndexMap;

use restock_core::{InventoryRecord, ThresholdLevels, ThresholdParams, round};

/// Compute reorder thresholds for every product in `records`, or for the
/// single product named by `selected_product_id`.
///
/// Per product: lead-time demand is average daily sales times lead time,
/// safety stock is the configured percentage of that demand, `low` is their
/// rounded sum, and `medium`/`high` are `round(low * 1.5)` and
/// `round(low * 2)` of the rounded `low`. Results come back in
/// first-appearance order of the product ids.
///
/// Assumes `params` already passed [`ThresholdParams::validate`]; see the
/// crate docs.
pub fn calculate_thresholds(
    records: &[InventoryRecord],
    params: &ThresholdParams,
    selected_product_id: Option<&str>,
) -> Vec<ThresholdLevels> {
    let mut groups: IndexMap<&str, Vec<&InventoryRecord>> = IndexMap::new();
    for record in records {
        if selected_product_id.is_some_and(|id| id != record.product_id) {
            continue;
        }
        groups
            .entry(record.product_id.as_str())
            .or_default()
            .push(record);
    }

    let mut results = Vec::with_capacity(groups.len());
    for (product_id, group) in &groups {
        let n = group.len() as f64;

        let avg_daily_sales = match params.average_daily_sales {
            // The override is global for the run, not per-product.
            Some(sales) => sales,
            None => group.iter().map(|r| r.orders).sum::<f64>() / n,
        };

        let lead_time = if params.use_product_lead_time {
            group.iter().map(|r| r.lead_time_days).sum::<f64>() / n
        } else {
            params.custom_lead_time
        };

        let lead_time_demand = avg_daily_sales * lead_time;
        let safety_stock = lead_time_demand * (params.safety_stock_percentage / 100.0);

        let low = round::whole(lead_time_demand + safety_stock);
        let medium = round::whole(low * 1.5);
        let high = round::whole(low * 2.0);

        results.push(ThresholdLevels {
            product_id: (*product_id).to_string(),
            product_name: group[0].product_name.clone(),
            low: low as i64,
            medium: medium as i64,
            high: high as i64,
            lead_time_used: round::one_dp(lead_time),
            avg_daily_sales: round::two_dp(avg_daily_sales),
        });
    }

    tracing::debug!(
        products = results.len(),
        selected = selected_product_id.is_some(),
        "calculated reorder thresholds"
    );
    results
}

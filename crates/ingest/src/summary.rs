//! Per-product aggregate summaries.

use indexmap::IndexMap;

use restock_core::{InventoryRecord, ProductSummary, round};

/// Running totals for one product group.
struct Totals {
    product_name: String,
    inventory: f64,
    orders: f64,
    lead_time: f64,
    count: usize,
}

/// Derive one [`ProductSummary`] per product, in first-appearance order.
///
/// Total function over validated records: grouping by `product_id` means an
/// empty group cannot occur. When records disagree on the display name for
/// an id, the first-seen name wins.
pub fn summarize(records: &[InventoryRecord]) -> Vec<ProductSummary> {
    let mut groups: IndexMap<&str, Totals> = IndexMap::new();

    for record in records {
        let totals = groups
            .entry(record.product_id.as_str())
            .or_insert_with(|| Totals {
                product_name: record.product_name.clone(),
                inventory: 0.0,
                orders: 0.0,
                lead_time: 0.0,
                count: 0,
            });
        totals.inventory += record.inventory_level;
        totals.orders += record.orders;
        totals.lead_time += record.lead_time_days;
        totals.count += 1;
    }

    groups
        .into_iter()
        .map(|(product_id, totals)| {
            let n = totals.count as f64;
            ProductSummary {
                product_id: product_id.to_string(),
                product_name: totals.product_name,
                avg_inventory: round::whole(totals.inventory / n),
                avg_orders: round::two_dp(totals.orders / n),
                avg_lead_time: round::one_dp(totals.lead_time / n),
                data_points: totals.count,
            }
        })
        .collect()
}

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use restock_core::{InventoryRecord, ThresholdParams};
use restock_thresholds::calculate_thresholds;

/// Synthetic history: `products` ids, `days` observations each.
fn synthetic_records(products: usize, days: u32) -> Vec<InventoryRecord> {
    let mut records = Vec::with_capacity(products * days as usize);
    for p in 0..products {
        for day in 0..days {
            records.push(InventoryRecord {
                product_id: format!("P{p:05}"),
                product_name: format!("Product {p}"),
                date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(day as u64))
                    .unwrap(),
                inventory_level: 100.0 + (day % 50) as f64,
                orders: 5.0 + (day % 10) as f64,
                lead_time_days: 3.0 + (p % 7) as f64,
            });
        }
    }
    records
}

fn bench_calculate_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_thresholds");
    let params = ThresholdParams::default();

    for products in [10usize, 100, 1000] {
        let records = synthetic_records(products, 90);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("all_products", products),
            &records,
            |b, records| {
                b.iter(|| calculate_thresholds(black_box(records), black_box(&params), None));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("selected_product", products),
            &records,
            |b, records| {
                b.iter(|| {
                    calculate_thresholds(black_box(records), black_box(&params), Some("P00000"))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_thresholds);
criterion_main!(benches);

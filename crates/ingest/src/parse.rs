//! CSV table → validated, ordered record sequence.

use chrono::NaiveDate;

use restock_core::InventoryRecord;

use crate::error::ParseError;

/// Required header names, case-sensitive. Columns may appear in any order;
/// extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "product_id",
    "product_name",
    "date",
    "inventory_level",
    "orders",
    "lead_time_days",
];

/// Date formats accepted at the ingestion boundary, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Parse raw CSV text into a validated sequence of [`InventoryRecord`]s,
/// sorted by `(product_id, date)`.
///
/// Fail-fast: the first invalid row aborts the whole parse. Empty or
/// header-only input yields an empty Vec, not an error.
pub fn parse(input: &str) -> Result<Vec<InventoryRecord>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input.as_bytes());

    let columns = ColumnIndex::from_headers(&reader.headers()?.clone());

    let mut records = Vec::new();
    for (index, raw) in reader.records().enumerate() {
        // 1-based over data rows; the header does not count.
        records.push(build_record(index + 1, &raw?, &columns)?);
    }

    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    tracing::debug!(records = records.len(), "parsed inventory table");
    Ok(records)
}

/// Positions of the required columns within the header row.
struct ColumnIndex {
    product_id: Option<usize>,
    product_name: Option<usize>,
    date: Option<usize>,
    inventory_level: Option<usize>,
    orders: Option<usize>,
    lead_time_days: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            product_id: find("product_id"),
            product_name: find("product_name"),
            date: find("date"),
            inventory_level: find("inventory_level"),
            orders: find("orders"),
            lead_time_days: find("lead_time_days"),
        }
    }
}

fn build_record(
    row: usize,
    raw: &csv::StringRecord,
    columns: &ColumnIndex,
) -> Result<InventoryRecord, ParseError> {
    // Order matches REQUIRED_COLUMNS.
    let values: [Option<&str>; 6] = [
        field(raw, columns.product_id),
        field(raw, columns.product_name),
        field(raw, columns.date),
        field(raw, columns.inventory_level),
        field(raw, columns.orders),
        field(raw, columns.lead_time_days),
    ];

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingColumns { row, columns: missing });
    }

    let [
        Some(product_id),
        Some(product_name),
        Some(date),
        Some(inventory_level),
        Some(orders),
        Some(lead_time_days),
    ] = values
    else {
        return Err(ParseError::MissingColumns { row, columns: missing });
    };

    Ok(InventoryRecord {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        date: parse_date(row, date)?,
        inventory_level: parse_number(row, "inventory_level", inventory_level)?,
        orders: parse_number(row, "orders", orders)?,
        lead_time_days: parse_number(row, "lead_time_days", lead_time_days)?,
    })
}

/// A required value is "present" only if its column exists and the cell is
/// non-empty; an empty cell counts as a missing column.
fn field<'a>(raw: &'a csv::StringRecord, index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| raw.get(i)).filter(|v| !v.is_empty())
}

fn parse_number(row: usize, column: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        })
}

fn parse_date(row: usize, value: &str) -> Result<NaiveDate, ParseError> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .ok_or_else(|| ParseError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

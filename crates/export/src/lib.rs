//! Export rendering for threshold runs.
//!
//! Wraps a finished [`ThresholdLevels`] sequence with its generation
//! timestamp and renders it as a JSON document or a CSV table. File
//! download/IO mechanics stay with the presentation layer; this crate only
//! produces the strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use restock_core::ThresholdLevels;

/// CSV header for threshold exports.
pub const CSV_HEADER: &str = "product_id,product_name,low_threshold,medium_threshold,high_threshold,lead_time_used,avg_daily_sales";

/// One exportable threshold run.
///
/// Serializes as `{ "thresholds": [...], "generatedAt": "<ISO-8601>" }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdExport {
    pub thresholds: Vec<ThresholdLevels>,
    pub generated_at: DateTime<Utc>,
}

impl ThresholdExport {
    pub fn new(thresholds: Vec<ThresholdLevels>, generated_at: DateTime<Utc>) -> Self {
        Self {
            thresholds,
            generated_at,
        }
    }

    /// Pretty-printed JSON export document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// CSV export: fixed header, one row per product, text fields quoted.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for levels in &self.thresholds {
            out.push_str(&format!(
                "\"{}\",\"{}\",{},{},{},{},{}\n",
                quote(&levels.product_id),
                quote(&levels.product_name),
                levels.low,
                levels.medium,
                levels.high,
                levels.lead_time_used,
                levels.avg_daily_sales,
            ));
        }
        out
    }

    /// Suggested download name, dated with the generation day:
    /// `inventory-thresholds-YYYY-MM-DD.<ext>`.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "inventory-thresholds-{}.{extension}",
            self.generated_at.format("%Y-%m-%d")
        )
    }
}

/// Double any embedded quotes so quoted text fields stay one CSV field.
fn quote(text: &str) -> String {
    text.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_levels() -> ThresholdLevels {
        ThresholdLevels {
            product_id: "P1".to_string(),
            product_name: "Widget".to_string(),
            low: 68,
            medium: 102,
            high: 136,
            lead_time_used: 5.7,
            avg_daily_sales: 10.0,
        }
    }

    fn sample_export() -> ThresholdExport {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        ThresholdExport::new(vec![sample_levels()], generated_at)
    }

    #[test]
    fn json_document_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&sample_export().to_json().unwrap()).unwrap();

        assert_eq!(json["generatedAt"], "2024-03-15T09:30:00Z");
        assert_eq!(json["thresholds"][0]["product_id"], "P1");
        assert_eq!(json["thresholds"][0]["low"], 68);
        assert_eq!(json["thresholds"][0]["lead_time_used"], 5.7);
    }

    #[test]
    fn csv_header_and_rows() {
        let csv = sample_export().to_csv();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("\"P1\",\"Widget\",68,102,136,5.7,10"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_are_doubled() {
        let mut export = sample_export();
        export.thresholds[0].product_name = "Widget \"Pro\"".to_string();

        let csv = export.to_csv();
        assert!(csv.contains("\"Widget \"\"Pro\"\"\""));
    }

    #[test]
    fn empty_run_renders_header_only() {
        let export = ThresholdExport::new(Vec::new(), Utc::now());
        assert_eq!(export.to_csv(), format!("{CSV_HEADER}\n"));

        let json: serde_json::Value = serde_json::from_str(&export.to_json().unwrap()).unwrap();
        assert_eq!(json["thresholds"], serde_json::json!([]));
    }

    #[test]
    fn file_name_is_dated() {
        assert_eq!(
            sample_export().file_name("csv"),
            "inventory-thresholds-2024-03-15.csv"
        );
        assert_eq!(
            sample_export().file_name("json"),
            "inventory-thresholds-2024-03-15.json"
        );
    }
}

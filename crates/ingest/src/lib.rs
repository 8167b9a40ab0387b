//! Inventory data ingestion.
//!
//! Turns raw CSV text into a validated, totally ordered sequence of
//! [`InventoryRecord`]s and derives per-product [`ProductSummary`]
//! aggregates. Pure functions over their inputs; no IO beyond the text
//! handed in, no state between calls.
//!
//! [`InventoryRecord`]: restock_core::InventoryRecord
//! [`ProductSummary`]: restock_core::ProductSummary

pub mod error;
pub mod parse;
pub mod summary;

pub use error::ParseError;
pub use parse::parse;
pub use summary::summarize;

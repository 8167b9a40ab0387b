//! `restock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** data types (no IO, no parsing, no
//! rendering): the inventory observation record, per-product summary,
//! threshold parameters/results, and the rounding rules shared by every
//! consumer of those types.

pub mod error;
pub mod levels;
pub mod params;
pub mod record;
pub mod round;
pub mod summary;

pub use error::{DomainError, DomainResult};
pub use levels::ThresholdLevels;
pub use params::ThresholdParams;
pub use record::InventoryRecord;
pub use summary::ProductSummary;

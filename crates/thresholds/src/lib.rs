//! Reorder-threshold engine.
//!
//! Deterministic domain logic only: no IO, no storage, no state between
//! runs. Callers validate [`ThresholdParams`] before invoking the engine;
//! its output on out-of-range parameters is unspecified.
//!
//! [`ThresholdParams`]: restock_core::ThresholdParams

pub mod engine;

pub use engine::calculate_thresholds;

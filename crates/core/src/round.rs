//! Fixed-decimal rounding shared by summaries, the threshold engine, and
//! export rendering.
//!
//! Half-way values round away from zero; inputs here are non-negative
//! averages, so this matches the conventional round-half-up display rule.

/// Round to the nearest whole number.
pub fn whole(value: f64) -> f64 {
    value.round()
}

/// Round to one decimal place.
pub fn one_dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn two_dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Numeric helpers.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Clamp `num` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result is
/// `max`, and a NaN `num` yields `min` (then bounded by `max`).
#[must_use]
pub fn clamp(num: f64, min: f64, max: f64) -> f64 {
    num.max(min).min(max)
}

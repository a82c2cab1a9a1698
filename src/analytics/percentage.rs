//! # Growth Percentage Calculator
//!
//! Period-over-period change for the dashboard summary cards.

/// Whole-number percentage change between two period aggregates.
///
/// A zero previous period has no defined ratio; the current value scaled by
/// 100 is reported instead so a brand-new system still shows growth figures.
/// That scaling is a compatibility behavior the storefront clients expect,
/// not a mathematical percentage.
pub fn change_percent(current: i64, previous: i64) -> i64 {
    if previous == 0 {
        return current * 100;
    }
    let delta = (current - previous) as f64 / previous as f64;
    (delta * 100.0).round() as i64
}

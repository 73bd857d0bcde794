//! Half-open time intervals and the default interval generators.

use chrono::{DateTime, Datelike, Utc};
use cred_core::constants::{DAY_MS, WEEK_MS};
use cred_core::errors::NumericError;
use serde::{Deserialize, Serialize};

use crate::weights::ResolvedGraph;

/// `[start_ms, end_ms)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Interval {
    pub const fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        self.start_ms <= timestamp_ms && timestamp_ms < self.end_ms
    }

    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// Consecutive buckets of `bucket_ms`, aligned to multiples of `bucket_ms`
/// since the epoch, covering `[start_ms, end_ms)`.
///
/// An empty range yields no intervals.
pub fn generate_intervals(start_ms: i64, end_ms: i64, bucket_ms: i64) -> Result<Vec<Interval>, NumericError> {
    if bucket_ms <= 0 {
        return Err(NumericError::invalid_argument(format!(
            "bucket_ms: expected positive integer, got {bucket_ms}"
        )));
    }
    let first = start_ms.div_euclid(bucket_ms) * bucket_ms;
    Ok(buckets_from(first, end_ms, bucket_ms, start_ms))
}

/// Week-long buckets starting Sunday 00:00 UTC, covering `[start_ms, end_ms)`.
pub fn weekly_intervals(start_ms: i64, end_ms: i64) -> Result<Vec<Interval>, NumericError> {
    if start_ms >= end_ms {
        return Ok(Vec::new());
    }
    let start = DateTime::<Utc>::from_timestamp_millis(start_ms).ok_or_else(|| {
        NumericError::invalid_argument(format!("start_ms out of range: {start_ms}"))
    })?;
    let days_since_sunday = i64::from(start.weekday().num_days_from_sunday());
    let first = start_ms.div_euclid(DAY_MS) * DAY_MS - days_since_sunday * DAY_MS;
    Ok(buckets_from(first, end_ms, WEEK_MS, start_ms))
}

fn buckets_from(first: i64, end_ms: i64, bucket_ms: i64, start_ms: i64) -> Vec<Interval> {
    if start_ms >= end_ms {
        return Vec::new();
    }
    let mut intervals = Vec::new();
    let mut boundary = first;
    while boundary < end_ms {
        let next = boundary.saturating_add(bucket_ms);
        intervals.push(Interval::new(boundary, next));
        if next == boundary {
            break;
        }
        boundary = next;
    }
    intervals
}

/// Buckets covering every timestamped node of `graph`. Empty when no node
/// carries a timestamp.
pub fn intervals_for_graph(graph: &ResolvedGraph, bucket_ms: i64) -> Result<Vec<Interval>, NumericError> {
    let (start, end) = graph.time_range().unwrap_or((0, 0));
    generate_intervals(start, end, bucket_ms)
}

/// Every interval must be non-empty, and the sequence ascending and
/// non-overlapping.
pub fn validate_intervals(intervals: &[Interval]) -> Result<(), NumericError> {
    for (i, interval) in intervals.iter().enumerate() {
        if interval.start_ms >= interval.end_ms {
            return Err(NumericError::invalid_input(format!(
                "interval {i} is empty: [{}, {})",
                interval.start_ms, interval.end_ms
            )));
        }
    }
    for (i, pair) in intervals.windows(2).enumerate() {
        if pair[1].start_ms < pair[0].end_ms {
            return Err(NumericError::invalid_input(format!(
                "intervals {i} and {} overlap or are out of order",
                i + 1
            )));
        }
    }
    Ok(())
}

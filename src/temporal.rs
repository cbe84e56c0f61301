use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Hour-of-day error concentration. Buckets ignore the date, so logs spanning
/// multiple days fold into one 24-hour profile (known limitation, kept on
/// purpose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalFinding {
    pub peak_hour: u32,
    pub peak_count: usize,
}

/// Bucket timestamped error records by hour of day and report the peak bucket
/// when its count exceeds `threshold`. Ties resolve to the earliest hour.
pub fn peak_error_hour(times: &[DateTime<Utc>], threshold: usize) -> Option<TemporalFinding> {
    if times.is_empty() {
        return None;
    }
    let mut buckets = [0usize; 24];
    for t in times {
        buckets[t.hour() as usize] += 1;
    }
    let mut peak_hour = 0u32;
    let mut peak_count = 0usize;
    for (hour, &count) in buckets.iter().enumerate() {
        if count > peak_count {
            peak_hour = hour as u32;
            peak_count = count;
        }
    }
    (peak_count > threshold).then_some(TemporalFinding {
        peak_hour,
        peak_count,
    })
}

//! Date range filtering and dataset bounds.

use sentiboard_core::types::{DateRange, ReviewRecord};

/// Records with `range.start <= review_time <= range.end`.
///
/// An inverted range yields an empty vec. The input is left untouched.
pub fn filter_by_date_range(records: &[ReviewRecord], range: DateRange) -> Vec<ReviewRecord> {
    if range.is_inverted() {
        tracing::warn!(start = %range.start, end = %range.end, "inverted date range, nothing selected");
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| range.contains(r.review_time))
        .copied()
        .collect()
}

/// Earliest and latest review date, or `None` for an empty set.
pub fn date_bounds(records: &[ReviewRecord]) -> Option<DateRange> {
    let start = records.iter().map(|r| r.review_time).min()?;
    let end = records.iter().map(|r| r.review_time).max()?;
    Some(DateRange::new(start, end))
}

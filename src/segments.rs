//! Segment aggregation: total sales grouped by one record field.

use indexmap::IndexMap;

use crate::constants::rounding::SHARE_DECIMALS;
use crate::data::{SalesField, SalesRecord, SegmentShare, SegmentValue};
use crate::utils::round_to;

/// Sum `total_sales` per distinct value of `field`, largest group first.
///
/// Records whose key is empty (or whose numeric field is missing) are skipped.
/// Groups with equal totals keep the order in which they were first seen.
pub fn aggregate_by(records: &[SalesRecord], field: SalesField) -> Vec<SegmentValue> {
    let mut aggregated: IndexMap<String, f64> = IndexMap::new();
    for record in records {
        let Some(key) = record.group_key(field) else {
            continue;
        };
        *aggregated.entry(key).or_insert(0.0) += record.total_sales;
    }

    let mut segments: Vec<SegmentValue> = aggregated
        .into_iter()
        .map(|(label, value)| SegmentValue { label, value })
        .collect();
    // `sort_by` is stable, so ties stay in first-seen order.
    segments.sort_by(|a, b| b.value.total_cmp(&a.value));
    segments
}

/// Attach each segment's share of the overall total, rounded to one decimal.
///
/// When the overall total is zero every share is reported as `0.0`.
pub fn with_percentages(segments: &[SegmentValue]) -> Vec<SegmentShare> {
    let total: f64 = segments.iter().map(|segment| segment.value).sum();
    segments
        .iter()
        .map(|segment| SegmentShare {
            label: segment.label.clone(),
            value: segment.value,
            percentage: if total == 0.0 {
                0.0
            } else {
                round_to(segment.value / total * 100.0, SHARE_DECIMALS)
            },
        })
        .collect()
}

/// Combined percentage of the first `n` shares, rounded to one decimal.
pub fn top_segments_share(shares: &[SegmentShare], n: usize) -> f64 {
    let combined: f64 = shares.iter().take(n).map(|share| share.percentage).sum();
    round_to(combined, SHARE_DECIMALS)
}

/// Convenience: aggregate and attach percentages in one call.
pub fn segment_shares(records: &[SalesRecord], field: SalesField) -> Vec<SegmentShare> {
    with_percentages(&aggregate_by(records, field))
}

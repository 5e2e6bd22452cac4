//! Temporal views over sales records: yearly growth, quarterly seasonality,
//! and monthly series.
//!
//! Records are bucketed by the local calendar date in their `date` field.
//! Records whose date cannot be parsed are left out of every view.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::constants::rounding::TREND_DECIMALS;
use crate::data::{MonthlySales, QuarterAverage, QuarterlySales, SalesRecord, YearlyGrowth};
use crate::dates::{Quarter, month_key, parse_sales_date, year_of};
use crate::types::{MonthKey, Year};
use crate::utils::round_to;

/// Pair each record with its parsed date, dropping (and logging) unparseable ones.
fn dated(records: &[SalesRecord]) -> Vec<(NaiveDate, &SalesRecord)> {
    let mut skipped = 0usize;
    let dated: Vec<(NaiveDate, &SalesRecord)> = records
        .iter()
        .filter_map(|record| match parse_sales_date(&record.date) {
            Some(date) => Some((date, record)),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        warn!(skipped, "ignoring sales records with unparseable dates");
    }
    dated
}

/// Growth percentage of `current` over `previous`, rounded to two decimals.
///
/// Returns `None` when `previous` is zero: growth from nothing is undefined.
pub fn growth_rate(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some(round_to(
        (current - previous) / previous * 100.0,
        TREND_DECIMALS,
    ))
}

/// Total sales per calendar year (ascending) with year-over-year growth.
///
/// The first year's growth is `Some(0.0)`. A year following a zero-sales year
/// has `growth: None`.
pub fn calculate_yoy_growth(records: &[SalesRecord]) -> Vec<YearlyGrowth> {
    let mut yearly: BTreeMap<Year, f64> = BTreeMap::new();
    for (date, record) in dated(records) {
        *yearly.entry(year_of(&date)).or_insert(0.0) += record.total_sales;
    }

    let mut result = Vec::with_capacity(yearly.len());
    let mut previous: Option<f64> = None;
    for (year, sales) in yearly {
        let growth = match previous {
            None => Some(0.0),
            Some(previous) => growth_rate(previous, sales),
        };
        result.push(YearlyGrowth {
            year,
            sales,
            growth,
        });
        previous = Some(sales);
    }
    result
}

/// Average `total_sales` per record for each quarter, pooled across years.
///
/// Non-empty input always yields the four quarters in order; a quarter with no
/// records averages `0.0`. Empty input yields an empty vector.
pub fn detect_seasonality(records: &[SalesRecord]) -> Vec<QuarterAverage> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut sums = [0.0f64; 4];
    let mut counts = [0usize; 4];
    for (date, record) in dated(records) {
        let idx = Quarter::of(&date).index();
        sums[idx] += record.total_sales;
        counts[idx] += 1;
    }

    Quarter::ALL
        .iter()
        .map(|quarter| {
            let idx = quarter.index();
            let average = if counts[idx] == 0 {
                0.0
            } else {
                sums[idx] / counts[idx] as f64
            };
            QuarterAverage {
                quarter: *quarter,
                average_sales: round_to(average, TREND_DECIMALS),
            }
        })
        .collect()
}

/// Total sales per (year, quarter), ordered by year then quarter.
///
/// Only buckets that contain at least one record are emitted.
pub fn seasonal_sales(records: &[SalesRecord]) -> Vec<QuarterlySales> {
    let mut buckets: BTreeMap<(Year, Quarter), f64> = BTreeMap::new();
    for (date, record) in dated(records) {
        *buckets
            .entry((year_of(&date), Quarter::of(&date)))
            .or_insert(0.0) += record.total_sales;
    }
    buckets
        .into_iter()
        .map(|((year, quarter), sales)| QuarterlySales {
            quarter,
            year,
            sales,
        })
        .collect()
}

/// Total sales per `YYYY-MM` month, in ascending month order.
pub fn monthly_sales(records: &[SalesRecord]) -> Vec<MonthlySales> {
    let mut monthly: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for (date, record) in dated(records) {
        *monthly.entry(month_key(&date)).or_insert(0.0) += record.total_sales;
    }
    monthly
        .into_iter()
        .map(|(month, sales)| MonthlySales { month, sales })
        .collect()
}

/// Highest and lowest quarter by average sales.
///
/// Ties resolve to the earlier quarter. Returns `None` for empty input.
pub fn quarter_extremes(averages: &[QuarterAverage]) -> Option<(&QuarterAverage, &QuarterAverage)> {
    let first = averages.first()?;
    let mut highest = first;
    let mut lowest = first;
    for candidate in &averages[1..] {
        if candidate.average_sales > highest.average_sales {
            highest = candidate;
        }
        if candidate.average_sales < lowest.average_sales {
            lowest = candidate;
        }
    }
    Some((highest, lowest))
}

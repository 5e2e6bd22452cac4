use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::constants::cleaning::OUTLIER_STD_DEVS;
use crate::constants::rounding::SHARE_DECIMALS;
use crate::data::{SalesField, SalesRecord};
use crate::dates::parse_sales_date;
use crate::stats::FieldStats;
use crate::utils::round_to;

/// Headline figures for a record set.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesOverview {
    pub records: usize,
    pub total_sales: f64,
    /// `total_sales / records`, or `0.0` for an empty set.
    pub average_order_value: f64,
    /// Distinct non-empty products.
    pub unique_products: usize,
    /// Distinct non-empty regions.
    pub unique_regions: usize,
}

impl SalesOverview {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let total_sales: f64 = records.iter().map(|record| record.total_sales).sum();
        let average_order_value = if records.is_empty() {
            0.0
        } else {
            total_sales / records.len() as f64
        };
        Self {
            records: records.len(),
            total_sales,
            average_order_value,
            unique_products: distinct_non_empty(records, SalesField::Product),
            unique_regions: distinct_non_empty(records, SalesField::Region),
        }
    }
}

fn distinct_non_empty(records: &[SalesRecord], field: SalesField) -> usize {
    records
        .iter()
        .filter_map(|record| record.categorical(field))
        .filter(|value| !value.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Data-quality figures reported before cleaning.
#[derive(Clone, Debug, PartialEq)]
pub struct DataQualitySummary {
    pub total_records: usize,
    /// Records with at least one empty categorical field.
    pub missing_values: usize,
    /// Records whose quantity or unit price is a 3-sigma outlier.
    pub outliers: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// `max(0, 100 - (missing + outliers) / total * 100)`, one decimal.
    pub quality_score: f64,
}

impl DataQualitySummary {
    /// Summarize `records`; returns `None` for an empty set.
    pub fn from_records(records: &[SalesRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let total_records = records.len();
        let missing_values = records
            .iter()
            .filter(|record| record.has_missing_category())
            .count();

        let factor_stats: Vec<(SalesField, FieldStats)> = SalesField::FACTORS
            .iter()
            .map(|field| (*field, FieldStats::from_records(records, *field)))
            .collect();
        let outliers = records
            .iter()
            .filter(|record| {
                factor_stats.iter().any(|(field, stats)| {
                    record
                        .numeric(*field)
                        .is_some_and(|value| stats.is_outlier(value, OUTLIER_STD_DEVS))
                })
            })
            .count();

        let dates: Vec<NaiveDate> = records
            .iter()
            .filter_map(|record| parse_sales_date(&record.date))
            .collect();

        let flagged = (missing_values + outliers) as f64;
        let quality_score = round_to(
            (100.0 - flagged / total_records as f64 * 100.0).max(0.0),
            SHARE_DECIMALS,
        );

        Some(Self {
            total_records,
            missing_values,
            outliers,
            first_date: dates.iter().min().copied(),
            last_date: dates.iter().max().copied(),
            quality_score,
        })
    }

    /// Whole calendar years between the first and last date.
    pub fn coverage_years(&self) -> Option<i32> {
        Some(self.last_date?.year() - self.first_date?.year())
    }

    /// Human label for the covered period (`< 1 year`, `1 year`, `3 years`).
    pub fn coverage_label(&self) -> String {
        match self.coverage_years() {
            None => "unknown".to_string(),
            Some(years) if years <= 0 => "< 1 year".to_string(),
            Some(1) => "1 year".to_string(),
            Some(years) => format!("{years} years"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(date: &str, region: &str, quantity: f64, total: f64) -> SalesRecord {
        SalesRecord {
            date: date.to_string(),
            product: "Laptop Pro".to_string(),
            category: "Computing".to_string(),
            region: region.to_string(),
            customer_type: "Corporate".to_string(),
            quantity: Some(quantity),
            unit_price: Some(1.0),
            total_sales: total,
            ..SalesRecord::default()
        }
    }

    #[test]
    fn overview_reports_totals_and_distinct_counts() {
        let records = vec![
            sale("2021-01-01", "Europe", 1.0, 100.0),
            sale("2021-01-02", "Europe", 1.0, 50.0),
            sale("2021-01-03", "", 1.0, 30.0),
        ];
        let overview = SalesOverview::from_records(&records);
        assert_eq!(overview.records, 3);
        assert_eq!(overview.total_sales, 180.0);
        assert_eq!(overview.average_order_value, 60.0);
        assert_eq!(overview.unique_products, 1);
        assert_eq!(overview.unique_regions, 1);

        let empty = SalesOverview::from_records(&[]);
        assert_eq!(empty.average_order_value, 0.0);
    }

    #[test]
    fn quality_summary_counts_missing_and_outliers() {
        let mut records: Vec<SalesRecord> = (1..=20)
            .map(|day| sale(&format!("2021-03-{day:02}"), "Europe", 10.0, 10.0))
            .collect();
        records.push(sale("2023-06-01", "", 10.0, 10.0));
        records.push(sale("2021-01-05", "Europe", 5000.0, 5000.0));

        let summary = DataQualitySummary::from_records(&records).unwrap();
        assert_eq!(summary.total_records, 22);
        assert_eq!(summary.missing_values, 1);
        assert_eq!(summary.outliers, 1);
        assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2021, 1, 5));
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2023, 6, 1));
        assert_eq!(summary.coverage_label(), "2 years");
        assert_eq!(summary.quality_score, 90.9);
    }

    #[test]
    fn quality_summary_is_none_for_empty_input() {
        assert!(DataQualitySummary::from_records(&[]).is_none());
    }

    #[test]
    fn coverage_label_handles_short_and_unknown_spans() {
        let records = vec![sale("2021-01-01", "Europe", 1.0, 1.0)];
        let summary = DataQualitySummary::from_records(&records).unwrap();
        assert_eq!(summary.coverage_label(), "< 1 year");

        let undated = vec![sale("??", "Europe", 1.0, 1.0)];
        let summary = DataQualitySummary::from_records(&undated).unwrap();
        assert_eq!(summary.coverage_label(), "unknown");
        assert_eq!(summary.quality_score, 100.0);
    }
}

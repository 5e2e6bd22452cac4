//! Missing-value imputation and outlier correction for sales records.
//!
//! All statistics (field means, standard deviations, categorical modes) are
//! computed once over the original input. Each record is then cleaned
//! independently into a fresh output vector; the input slice is never mutated.

use tracing::debug;

use crate::config::CleaningConfig;
use crate::data::{SalesField, SalesRecord};
use crate::stats::{FieldStats, most_common_category};

/// Why a numeric factor was replaced with the field mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplacementReason {
    Missing,
    Zero,
    Outlier,
}

/// Counts of the corrections applied by one cleaning pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleaningReport {
    pub records: usize,
    /// Empty categorical fields filled with the field's most common value.
    pub imputed_categories: usize,
    /// Categorical fields left empty because no record had a value for them.
    pub unresolved_categories: usize,
    pub missing_factors: usize,
    pub zero_factors: usize,
    pub outlier_factors: usize,
}

impl CleaningReport {
    /// Total numeric factors replaced with a mean.
    pub fn replaced_factors(&self) -> usize {
        self.missing_factors + self.zero_factors + self.outlier_factors
    }

    fn record_replacement(&mut self, reason: ReplacementReason) {
        match reason {
            ReplacementReason::Missing => self.missing_factors += 1,
            ReplacementReason::Zero => self.zero_factors += 1,
            ReplacementReason::Outlier => self.outlier_factors += 1,
        }
    }
}

/// Dataset-wide replacement values, computed once before any record is touched.
#[derive(Clone, Debug)]
pub struct CleaningPlan {
    config: CleaningConfig,
    modes: Vec<(SalesField, Option<String>)>,
    factors: Vec<(SalesField, FieldStats)>,
}

impl CleaningPlan {
    /// Derive modes and factor statistics from the original records.
    pub fn from_records(records: &[SalesRecord], config: CleaningConfig) -> Self {
        let modes = SalesField::CATEGORICAL
            .iter()
            .map(|field| (*field, most_common_category(records, *field)))
            .collect();
        let factors = SalesField::FACTORS
            .iter()
            .map(|field| (*field, FieldStats::from_records(records, *field)))
            .collect();
        Self {
            config,
            modes,
            factors,
        }
    }

    /// Most common value used to fill empty `field` entries.
    pub fn mode(&self, field: SalesField) -> Option<&str> {
        self.modes
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .and_then(|(_, mode)| mode.as_deref())
    }

    /// Statistics of a numeric factor over the original records.
    pub fn factor_stats(&self, field: SalesField) -> Option<&FieldStats> {
        self.factors
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, stats)| stats)
    }

    /// Decide whether `value` must be replaced by the field mean.
    pub fn replacement_reason(
        &self,
        stats: &FieldStats,
        value: Option<f64>,
    ) -> Option<ReplacementReason> {
        match value {
            None => Some(ReplacementReason::Missing),
            Some(value) if value.is_nan() => Some(ReplacementReason::Missing),
            Some(value) if value == 0.0 => Some(ReplacementReason::Zero),
            Some(value) if stats.is_outlier(value, self.config.outlier_std_devs) => {
                Some(ReplacementReason::Outlier)
            }
            Some(_) => None,
        }
    }

    /// Produce a cleaned copy of `record`, tallying corrections into `report`.
    pub fn clean_record(&self, record: &SalesRecord, report: &mut CleaningReport) -> SalesRecord {
        let mut cleaned = record.clone();

        for (field, mode) in &self.modes {
            let Some(value) = cleaned.categorical_mut(*field) else {
                continue;
            };
            if !value.is_empty() {
                continue;
            }
            match mode {
                Some(mode) => {
                    *value = mode.clone();
                    report.imputed_categories += 1;
                }
                None => report.unresolved_categories += 1,
            }
        }

        for (field, stats) in &self.factors {
            let current = cleaned.numeric(*field);
            let Some(reason) = self.replacement_reason(stats, current) else {
                continue;
            };
            report.record_replacement(reason);
            match field {
                SalesField::Quantity => cleaned.quantity = Some(stats.mean),
                SalesField::UnitPrice => cleaned.unit_price = Some(stats.mean),
                _ => {}
            }
        }

        cleaned.total_sales = cleaned.computed_total();
        cleaned
    }
}

/// Clean records with the default outlier threshold (3 standard deviations).
///
/// Empty input yields an empty vector.
pub fn clean_sales_data(records: &[SalesRecord]) -> Vec<SalesRecord> {
    clean_sales_data_with(records, &CleaningConfig::default())
}

/// Clean records with an explicit configuration.
pub fn clean_sales_data_with(records: &[SalesRecord], config: &CleaningConfig) -> Vec<SalesRecord> {
    clean_sales_data_with_report(records, config).0
}

/// Clean records and report what was corrected.
pub fn clean_sales_data_with_report(
    records: &[SalesRecord],
    config: &CleaningConfig,
) -> (Vec<SalesRecord>, CleaningReport) {
    let mut report = CleaningReport {
        records: records.len(),
        ..CleaningReport::default()
    };
    if records.is_empty() {
        return (Vec::new(), report);
    }

    let plan = CleaningPlan::from_records(records, *config);
    let cleaned: Vec<SalesRecord> = records
        .iter()
        .map(|record| plan.clean_record(record, &mut report))
        .collect();

    debug!(
        records = report.records,
        imputed_categories = report.imputed_categories,
        unresolved_categories = report.unresolved_categories,
        missing_factors = report.missing_factors,
        zero_factors = report.zero_factors,
        outlier_factors = report.outlier_factors,
        "cleaned sales records"
    );
    (cleaned, report)
}

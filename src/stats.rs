//! Descriptive statistics used by the cleaner and quality summaries.

use indexmap::IndexMap;

use crate::data::{SalesField, SalesRecord};

/// Arithmetic mean, or `None` for an empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by `n`), or `None` for an empty input.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

/// Mean and spread of one numeric field over the records where it is present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStats {
    /// Number of records with a present value (zeros included).
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl FieldStats {
    /// Compute stats for `field`, skipping records where the value is missing.
    ///
    /// `NaN` counts as missing. With no present values both `mean` and
    /// `std_dev` are `0.0`.
    pub fn from_records(records: &[SalesRecord], field: SalesField) -> Self {
        let values: Vec<f64> = records
            .iter()
            .filter_map(|record| record.numeric(field))
            .filter(|value| !value.is_nan())
            .collect();
        Self {
            count: values.len(),
            mean: mean(&values).unwrap_or(0.0),
            std_dev: population_std_dev(&values).unwrap_or(0.0),
        }
    }

    /// True when `value` lies more than `std_devs` standard deviations from the mean.
    pub fn is_outlier(&self, value: f64, std_devs: f64) -> bool {
        (value - self.mean).abs() > std_devs * self.std_dev
    }
}

/// Most frequent non-empty value.
///
/// Ties go to the value that was seen first in iteration order. Returns `None`
/// when every value is empty.
pub fn most_common<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut frequencies: IndexMap<&'a str, usize> = IndexMap::new();
    for value in values {
        if !value.is_empty() {
            *frequencies.entry(value).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in frequencies {
        if best.is_none_or(|(_, highest)| count > highest) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}

/// Most frequent non-empty value of a categorical field across `records`.
pub fn most_common_category(records: &[SalesRecord], field: SalesField) -> Option<String> {
    most_common(
        records
            .iter()
            .filter_map(|record| record.categorical(field)),
    )
}

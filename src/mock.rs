//! Sample dataset factory.
//!
//! Generation is driven entirely by the caller's RNG so a seeded `StdRng`
//! reproduces the same dataset; there is no shared dataset state.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::config::{AnomalyConfig, MockDataConfig};
use crate::constants::ids::{RECORD_ID_OFFSET, RECORD_ID_PREFIX, RECORD_ID_WIDTH};
use crate::constants::mock::{
    CATEGORIES, CUSTOMER_TYPES, END_DATE, OUTLIER_QUANTITY_RANGE, PRODUCTS, QUANTITY_RANGE,
    REGIONS, START_DATE, UNIT_PRICE_RANGE,
};
use crate::data::{SalesField, SalesRecord};
use crate::types::RecordId;

/// Identifier for the record at `index` (`0` -> `SALE-01000`).
pub fn record_id(index: usize) -> RecordId {
    format!(
        "{RECORD_ID_PREFIX}{:0width$}",
        index + RECORD_ID_OFFSET,
        width = RECORD_ID_WIDTH
    )
}

fn date_from_parts((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

/// Generate `count` well-formed records drawn uniformly from the fixed catalogues.
pub fn generate_mock_sales_data<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<SalesRecord> {
    let start = date_from_parts(START_DATE);
    let span_days = (date_from_parts(END_DATE) - start).num_days();

    (0..count)
        .map(|index| {
            let quantity = f64::from(rng.random_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1));
            let unit_price = f64::from(rng.random_range(UNIT_PRICE_RANGE.0..=UNIT_PRICE_RANGE.1));
            let date = start + Duration::days(rng.random_range(0..=span_days));
            SalesRecord {
                id: record_id(index),
                date: date.format("%Y-%m-%d").to_string(),
                product: pick(&PRODUCTS, rng),
                category: pick(&CATEGORIES, rng),
                region: pick(&REGIONS, rng),
                customer_type: pick(&CUSTOMER_TYPES, rng),
                quantity: Some(quantity),
                unit_price: Some(unit_price),
                total_sales: quantity * unit_price,
            }
        })
        .collect()
}

/// Return a copy of `records` with blanked categoricals and extreme quantities.
///
/// Indices are drawn with replacement, so the same record may be hit more than
/// once. Empty input is returned unchanged.
pub fn add_data_anomalies<R: Rng + ?Sized>(
    records: &[SalesRecord],
    anomalies: &AnomalyConfig,
    rng: &mut R,
) -> Vec<SalesRecord> {
    let mut modified = records.to_vec();
    if modified.is_empty() {
        return modified;
    }

    for _ in 0..anomalies.missing_values {
        let idx = rng.random_range(0..modified.len());
        let Some(field) = SalesField::CATEGORICAL.choose(rng).copied() else {
            continue;
        };
        if let Some(value) = modified[idx].categorical_mut(field) {
            value.clear();
        }
    }

    for _ in 0..anomalies.outliers {
        let idx = rng.random_range(0..modified.len());
        let record = &mut modified[idx];
        let quantity = f64::from(
            rng.random_range(OUTLIER_QUANTITY_RANGE.0..=OUTLIER_QUANTITY_RANGE.1),
        );
        record.quantity = Some(quantity);
        record.total_sales = record.computed_total();
    }

    modified
}

/// Build a dataset as described by `config` (generation plus optional anomalies).
pub fn generate_with_config(config: &MockDataConfig) -> Vec<SalesRecord> {
    let mut rng = config.rng();
    let records = generate_mock_sales_data(config.count, &mut rng);
    let records = match &config.anomalies {
        Some(anomalies) => add_data_anomalies(&records, anomalies, &mut rng),
        None => records,
    };
    debug!(
        count = config.count,
        seed = ?config.seed,
        anomalies = config.anomalies.is_some(),
        "generated mock sales data"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::dates::parse_sales_date;

    #[test]
    fn record_ids_are_offset_and_padded() {
        assert_eq!(record_id(0), "SALE-01000");
        assert_eq!(record_id(42), "SALE-01042");
        assert_eq!(record_id(99_000), "SALE-100000");
    }

    #[test]
    fn generated_records_respect_catalogues_and_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let records = generate_mock_sales_data(200, &mut rng);
        assert_eq!(records.len(), 200);
        let start = date_from_parts(START_DATE);
        let end = date_from_parts(END_DATE);
        for record in &records {
            assert!(PRODUCTS.contains(&record.product.as_str()));
            assert!(CATEGORIES.contains(&record.category.as_str()));
            assert!(REGIONS.contains(&record.region.as_str()));
            assert!(CUSTOMER_TYPES.contains(&record.customer_type.as_str()));
            let quantity = record.quantity.unwrap();
            let unit_price = record.unit_price.unwrap();
            assert!((1.0..=20.0).contains(&quantity));
            assert!((100.0..=1099.0).contains(&unit_price));
            assert_eq!(record.total_sales, quantity * unit_price);
            let date = parse_sales_date(&record.date).unwrap();
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        let config = MockDataConfig {
            count: 50,
            seed: Some(3),
            anomalies: Some(AnomalyConfig::default()),
        };
        assert_eq!(generate_with_config(&config), generate_with_config(&config));
    }

    #[test]
    fn anomalies_blank_fields_and_inflate_quantities_on_a_copy() {
        let mut rng = StdRng::seed_from_u64(5);
        let clean = generate_mock_sales_data(100, &mut rng);
        let anomalies = AnomalyConfig {
            missing_values: 20,
            outliers: 5,
        };
        let dirty = add_data_anomalies(&clean, &anomalies, &mut rng);

        assert_eq!(dirty.len(), clean.len());
        assert!(clean.iter().all(|record| !record.has_missing_category()));
        assert!(dirty.iter().any(SalesRecord::has_missing_category));
        let inflated = dirty
            .iter()
            .filter(|record| record.quantity.unwrap_or(0.0) >= 500.0)
            .count();
        assert!((1..=5).contains(&inflated));
        for record in &dirty {
            assert_eq!(record.total_sales, record.computed_total());
        }
    }

    #[test]
    fn anomalies_on_empty_input_are_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(add_data_anomalies(&[], &AnomalyConfig::default(), &mut rng).is_empty());
    }
}

use rand::SeedableRng;
use rand::rngs::StdRng;

use sales_insights::{
    AnomalyConfig, Quarter, SalesField, SalesRecord, add_data_anomalies, aggregate_by,
    calculate_yoy_growth, clean_sales_data, detect_seasonality, generate_mock_sales_data,
    seasonal_sales,
};

fn dirty_dataset(seed: u64, count: usize) -> Vec<SalesRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = generate_mock_sales_data(count, &mut rng);
    add_data_anomalies(&records, &AnomalyConfig::default(), &mut rng)
}

fn sale(date: &str, quantity: Option<f64>, unit_price: Option<f64>) -> SalesRecord {
    SalesRecord {
        id: format!("sale-{date}"),
        date: date.to_string(),
        product: "Laptop Pro".to_string(),
        category: "Computing".to_string(),
        region: "Europe".to_string(),
        customer_type: "Corporate".to_string(),
        quantity,
        unit_price,
        total_sales: quantity.unwrap_or(0.0) * unit_price.unwrap_or(0.0),
    }
}

#[test]
fn cleaned_records_have_no_empty_categories() {
    for seed in [1, 7, 42] {
        let dirty = dirty_dataset(seed, 400);
        assert!(dirty.iter().any(SalesRecord::has_missing_category));
        let cleaned = clean_sales_data(&dirty);
        assert_eq!(cleaned.len(), dirty.len());
        assert!(
            cleaned.iter().all(|record| !record.has_missing_category()),
            "seed {seed} left an empty category"
        );
    }
}

#[test]
fn cleaned_totals_match_factors_exactly() {
    let cleaned = clean_sales_data(&dirty_dataset(3, 500));
    for record in &cleaned {
        let quantity = record.quantity.expect("quantity imputed");
        let unit_price = record.unit_price.expect("unit price imputed");
        assert_eq!(record.total_sales, quantity * unit_price);
    }
}

#[test]
fn injected_quantity_outliers_are_replaced() {
    let dirty = dirty_dataset(21, 1000);
    let cleaned = clean_sales_data(&dirty);
    for (before, after) in dirty.iter().zip(&cleaned) {
        assert_eq!(before.id, after.id);
        if before.quantity.unwrap_or(0.0) >= 500.0 {
            assert!(after.quantity.unwrap() < 500.0);
        }
    }
}

#[test]
fn cleaning_preserves_ids_order_and_input() {
    let dirty = dirty_dataset(5, 200);
    let snapshot = dirty.clone();
    let cleaned = clean_sales_data(&dirty);
    assert_eq!(dirty, snapshot);
    let ids_in: Vec<&str> = dirty.iter().map(|r| r.id.as_str()).collect();
    let ids_out: Vec<&str> = cleaned.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids_in, ids_out);
}

#[test]
fn zero_quantity_example_from_mean_of_two() {
    let records = vec![
        sale("2021-01-01", Some(2.0), Some(10.0)),
        sale("2021-01-02", Some(0.0), Some(10.0)),
    ];
    let cleaned = clean_sales_data(&records);
    assert_eq!(cleaned[1].quantity, Some(1.0));
    assert_eq!(cleaned[1].total_sales, 10.0);
}

#[test]
fn aggregate_sums_match_keyed_totals_and_are_sorted() {
    let cleaned = clean_sales_data(&dirty_dataset(8, 600));
    let dirty = dirty_dataset(8, 600);
    for records in [&cleaned, &dirty] {
        for field in SalesField::CATEGORICAL {
            let segments = aggregate_by(records, field);
            assert!(
                segments
                    .windows(2)
                    .all(|pair| pair[0].value >= pair[1].value)
            );
            let grouped: f64 = segments.iter().map(|segment| segment.value).sum();
            let keyed: f64 = records
                .iter()
                .filter(|record| record.group_key(field).is_some())
                .map(|record| record.total_sales)
                .sum();
            assert!(
                (grouped - keyed).abs() <= 1e-6 * keyed.max(1.0),
                "{field}: {grouped} != {keyed}"
            );
        }
    }
}

#[test]
fn first_year_growth_is_zero_and_years_ascend() {
    let cleaned = clean_sales_data(&dirty_dataset(13, 800));
    let growth = calculate_yoy_growth(&cleaned);
    assert_eq!(growth.first().map(|entry| entry.growth), Some(Some(0.0)));
    assert!(growth.windows(2).all(|pair| pair[0].year < pair[1].year));
    let years: Vec<i32> = growth.iter().map(|entry| entry.year).collect();
    assert_eq!(years, vec![2020, 2021, 2022, 2023]);
}

#[test]
fn two_year_growth_example() {
    let records = vec![
        sale("2021-06-01", Some(1.0), Some(100.0)),
        sale("2022-06-01", Some(1.0), Some(150.0)),
    ];
    let growth = calculate_yoy_growth(&records);
    assert_eq!(growth[1].year, 2022);
    assert_eq!(growth[1].growth, Some(50.0));
}

#[test]
fn seasonality_example_with_empty_quarters() {
    let records = vec![
        sale("2021-02-10", Some(1.0), Some(100.0)),
        sale("2021-08-05", Some(1.0), Some(200.0)),
    ];
    let seasonality = detect_seasonality(&records);
    let quarters: Vec<Quarter> = seasonality.iter().map(|entry| entry.quarter).collect();
    assert_eq!(quarters, Quarter::ALL.to_vec());
    let averages: Vec<f64> = seasonality.iter().map(|entry| entry.average_sales).collect();
    assert_eq!(averages, vec![100.0, 0.0, 200.0, 0.0]);
}

#[test]
fn seasonal_series_total_matches_dataset_total() {
    let cleaned = clean_sales_data(&dirty_dataset(17, 300));
    let series = seasonal_sales(&cleaned);
    assert!(series.len() <= 16);
    assert!(
        series
            .windows(2)
            .all(|pair| (pair[0].year, pair[0].quarter) < (pair[1].year, pair[1].quarter))
    );
    let series_total: f64 = series.iter().map(|entry| entry.sales).sum();
    let total: f64 = cleaned.iter().map(|record| record.total_sales).sum();
    assert!((series_total - total).abs() <= 1e-6 * total);
}

#[test]
fn empty_input_degrades_to_empty_results() {
    assert!(clean_sales_data(&[]).is_empty());
    assert!(aggregate_by(&[], SalesField::Product).is_empty());
    assert!(calculate_yoy_growth(&[]).is_empty());
    assert!(detect_seasonality(&[]).is_empty());
    assert!(seasonal_sales(&[]).is_empty());
}

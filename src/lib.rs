#![doc = include_str!("../README.md")]

/// Missing-value imputation and outlier correction.
pub mod cleaning;
/// Cleaning and mock-data configuration types.
pub mod config;
/// Centralized constants used across cleaning, trends, and mock data.
pub mod constants;
/// Sales record and aggregate result types.
pub mod data;
/// Calendar parsing and quarter bucketing.
pub mod dates;
/// Reusable report runner shared by the demo binaries.
pub mod example_apps;
/// CSV and JSON import.
pub mod import;
/// Overview and data-quality metrics.
pub mod metrics;
/// Seeded sample dataset factory.
pub mod mock;
/// Segment aggregation and percentage shares.
pub mod segments;
/// Mean, standard deviation, and mode helpers.
pub mod stats;
/// Yearly growth, seasonality, and monthly series.
pub mod trends;
/// Shared type aliases.
pub mod types;
/// Rounding and formatting helpers.
pub mod utils;

mod errors;

pub use cleaning::{
    CleaningPlan, CleaningReport, ReplacementReason, clean_sales_data, clean_sales_data_with,
    clean_sales_data_with_report,
};
pub use config::{AnomalyConfig, CleaningConfig, MockDataConfig};
pub use data::{
    MonthlySales, QuarterAverage, QuarterlySales, SalesField, SalesRecord, SegmentShare,
    SegmentValue, YearlyGrowth,
};
pub use dates::Quarter;
pub use errors::SalesError;
pub use import::{ImportFormat, load_sales_file, parse_sales_csv, parse_sales_json};
pub use metrics::{DataQualitySummary, SalesOverview};
pub use mock::{add_data_anomalies, generate_mock_sales_data, generate_with_config};
pub use segments::{aggregate_by, segment_shares, top_segments_share, with_percentages};
pub use trends::{
    calculate_yoy_growth, detect_seasonality, monthly_sales, quarter_extremes, seasonal_sales,
};
pub use types::{CategoryValue, DateString, MonthKey, RecordId, SegmentLabel, Year};

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::cleaning::clean_sales_data_with_report;
use crate::config::{AnomalyConfig, CleaningConfig, MockDataConfig};
use crate::constants::mock::{DEFAULT_RECORD_COUNT, DEFAULT_SEED};
use crate::data::{SalesField, SalesRecord};
use crate::import::load_sales_file;
use crate::metrics::{DataQualitySummary, SalesOverview};
use crate::mock::generate_with_config;
use crate::segments::{segment_shares, top_segments_share};
use crate::trends::{calculate_yoy_growth, detect_seasonality, quarter_extremes, seasonal_sales};
use crate::utils::{format_currency, format_growth, format_with_commas};

#[derive(Debug, Parser)]
#[command(
    name = "sales_report",
    disable_help_subcommand = true,
    about = "Clean sales records and print segment and trend summaries",
    long_about = "Load sales records from a CSV/JSON file (or generate a seeded sample dataset), clean missing values and outliers, then print overview, segment, growth, and seasonality summaries.",
    after_help = "Without --input a sample dataset is generated; --records, --seed and --no-anomalies shape it."
)]
struct SalesReportCli {
    #[arg(
        long,
        value_name = "PATH",
        help = "CSV or JSON file of sales records to analyse"
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = DEFAULT_RECORD_COUNT,
        value_parser = parse_positive_usize,
        help = "Number of sample records to generate when no input file is given"
    )]
    records: usize,
    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        help = "Deterministic seed for sample generation"
    )]
    seed: u64,
    #[arg(
        long = "no-anomalies",
        help = "Generate sample data without injected blanks and outliers"
    )]
    no_anomalies: bool,
    #[arg(
        long,
        value_name = "FIELD",
        default_value = "region",
        value_parser = parse_sales_field,
        help = "Field to segment by (product, category, region, customerType, ...)"
    )]
    segment: SalesField,
    #[arg(
        long = "outlier-std-devs",
        default_value_t = 3.0,
        help = "Standard deviations beyond which quantities and prices are replaced"
    )]
    outlier_std_devs: f64,
    #[arg(
        long,
        default_value_t = 3,
        help = "Number of leading segments summarised as a combined share"
    )]
    top: usize,
}

/// Run the `sales_report` CLI against the given arguments (program name excluded).
pub fn run_sales_report<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) =
        parse_cli::<SalesReportCli, _>(std::iter::once("sales_report".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let cleaning = CleaningConfig {
        outlier_std_devs: cli.outlier_std_devs,
    }
    .validated()?;

    let raw = match &cli.input {
        Some(path) => {
            println!("Loading sales records from {}", path.display());
            load_sales_file(path)?
        }
        None => {
            let config = MockDataConfig {
                count: cli.records,
                seed: Some(cli.seed),
                anomalies: if cli.no_anomalies {
                    None
                } else {
                    Some(AnomalyConfig::default())
                },
            };
            println!(
                "Generating {} sample records (seed {})",
                format_with_commas(config.count as u64),
                cli.seed
            );
            generate_with_config(&config)
        }
    };

    if raw.is_empty() {
        println!("No sales records to analyse.");
        return Ok(());
    }

    print_quality(&raw);
    let (cleaned, report) = clean_sales_data_with_report(&raw, &cleaning);
    println!("[CLEANING]");
    println!("  categories imputed:   {}", report.imputed_categories);
    println!("  categories unresolved: {}", report.unresolved_categories);
    println!("  missing factors:      {}", report.missing_factors);
    println!("  zero factors:         {}", report.zero_factors);
    println!("  outlier factors:      {}", report.outlier_factors);
    println!();

    print_overview(&cleaned);
    print_segments(&cleaned, cli.segment, cli.top);
    print_trends(&cleaned);
    Ok(())
}

fn print_quality(records: &[SalesRecord]) {
    let Some(summary) = DataQualitySummary::from_records(records) else {
        return;
    };
    println!("=== sales report ===");
    println!("[DATA QUALITY]");
    println!(
        "  records:        {}",
        format_with_commas(summary.total_records as u64)
    );
    println!("  missing values: {}", summary.missing_values);
    println!("  outliers:       {}", summary.outliers);
    println!("  coverage:       {}", summary.coverage_label());
    println!("  quality score:  {:.1}%", summary.quality_score);
    println!();
}

fn print_overview(records: &[SalesRecord]) {
    let overview = SalesOverview::from_records(records);
    println!("[OVERVIEW]");
    println!("  total sales:         {}", format_currency(overview.total_sales));
    println!("  average order value: ${:.2}", overview.average_order_value);
    println!("  products:            {}", overview.unique_products);
    println!("  regions:             {}", overview.unique_regions);
    println!();
}

fn print_segments(records: &[SalesRecord], field: SalesField, top: usize) {
    let shares = segment_shares(records, field);
    println!("[SEGMENTS BY {}]", field);
    for share in &shares {
        println!(
            "  {:<24} {:>14} {:>6.1}%",
            share.label,
            format_currency(share.value),
            share.percentage
        );
    }
    if !shares.is_empty() {
        println!(
            "  top {} segments account for {:.1}% of total sales",
            top.min(shares.len()),
            top_segments_share(&shares, top)
        );
    }
    println!();
}

fn print_trends(records: &[SalesRecord]) {
    println!("[YEAR OVER YEAR]");
    for entry in calculate_yoy_growth(records) {
        println!(
            "  {} {:>14} {:>10}",
            entry.year,
            format_currency(entry.sales),
            format_growth(entry.growth)
        );
    }
    println!();

    let seasonality = detect_seasonality(records);
    println!("[SEASONALITY]");
    for entry in &seasonality {
        println!(
            "  {} average {}",
            entry.quarter,
            format_currency(entry.average_sales)
        );
    }
    if let Some((highest, lowest)) = quarter_extremes(&seasonality) {
        println!("  strongest quarter: {}", highest.quarter);
        println!("  weakest quarter:   {}", lowest.quarter);
    }
    println!();

    println!("[QUARTERLY SERIES]");
    for entry in seasonal_sales(records) {
        println!(
            "  {} {} {:>14}",
            entry.quarter,
            entry.year,
            format_currency(entry.sales)
        );
    }
}

fn parse_positive_usize(raw: &str) -> Result<usize, String> {
    let parsed = raw.parse::<usize>().map_err(|_| {
        format!(
            "Could not parse --records value '{}' as a positive integer",
            raw
        )
    })?;
    if parsed == 0 {
        return Err("--records must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_sales_field(raw: &str) -> Result<SalesField, String> {
    raw.parse::<SalesField>().map_err(|err| err.to_string())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

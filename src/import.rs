//! Loading sales records from CSV and JSON files.
//!
//! CSV rows follow the dashboard importer's conventions: numeric cells that are
//! empty or unparseable become `0`, missing `id` columns get generated ids, and
//! `totalSales` is derived when the file does not provide a usable value.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::data::{SalesField, SalesRecord};
use crate::errors::SalesError;
use crate::mock::record_id;

/// Supported import file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, SalesError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(ImportFormat::Csv),
            "json" => Ok(ImportFormat::Json),
            _ => Err(SalesError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load records from a `.csv` or `.json` file.
pub fn load_sales_file<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>, SalesError> {
    let path = path.as_ref();
    let records = match ImportFormat::from_path(path)? {
        ImportFormat::Csv => parse_sales_csv(File::open(path)?)?,
        ImportFormat::Json => parse_sales_json(&fs::read_to_string(path)?)?,
    };
    info!(
        path = %path.display(),
        records = records.len(),
        "imported sales records"
    );
    Ok(records)
}

/// Parse a JSON array of records (camelCase field names).
pub fn parse_sales_json(content: &str) -> Result<Vec<SalesRecord>, SalesError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse CSV with a header row. Unknown columns are ignored.
///
/// Rows the CSV reader cannot decode are skipped with a warning.
pub fn parse_sales_csv<R: Read>(reader: R) -> Result<Vec<SalesRecord>, SalesError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Option<SalesField>> = reader
        .headers()?
        .iter()
        .map(|header| header.parse::<SalesField>().ok())
        .collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                // +2: one for the header row, one for 1-based line numbers.
                warn!(line = index + 2, error = %err, "skipping unreadable csv row");
                continue;
            }
        };

        let mut record = SalesRecord {
            id: record_id(index),
            ..SalesRecord::default()
        };
        // Short rows read their trailing columns as empty cells.
        for (position, column) in columns.iter().enumerate() {
            let Some(field) = column else {
                continue;
            };
            apply_cell(&mut record, *field, row.get(position).unwrap_or(""));
        }
        if record.total_sales == 0.0 {
            let quantity = record.quantity.unwrap_or(0.0);
            let unit_price = record.unit_price.unwrap_or(0.0);
            if quantity != 0.0 && unit_price != 0.0 {
                record.total_sales = quantity * unit_price;
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Parse the leading decimal number of `cell` (`"12abc"` reads as `12`).
///
/// Cells without a leading number read as `0`.
fn parse_number(cell: &str) -> f64 {
    cell[..numeric_prefix_len(cell)]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(cell: &str) -> usize {
    let bytes = cell.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

fn apply_cell(record: &mut SalesRecord, field: SalesField, cell: &str) {
    match field {
        SalesField::Id => record.id = cell.to_string(),
        SalesField::Date => record.date = cell.to_string(),
        SalesField::Quantity => record.quantity = Some(parse_number(cell)),
        SalesField::UnitPrice => record.unit_price = Some(parse_number(cell)),
        SalesField::TotalSales => record.total_sales = parse_number(cell),
        SalesField::Product
        | SalesField::Category
        | SalesField::Region
        | SalesField::CustomerType => {
            if let Some(value) = record.categorical_mut(field) {
                *value = cell.to_string();
            }
        }
    }
}

//! Calendar helpers for sales record dates.
//!
//! Dates are treated as local calendar dates: a time component, when present,
//! is dropped rather than converted between timezones.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::quarters::QUARTER_LABELS;
use crate::types::{MonthKey, Year};

/// Fixed calendar quarter. Orders as `Q1 < Q2 < Q3 < Q4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Quarter containing a 1-based calendar month. Months above 12 clamp to `Q4`.
    pub fn from_month(month: u32) -> Self {
        match month {
            0..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Quarter containing `date`.
    pub fn of(date: &NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Zero-based position in `Quarter::ALL`.
    pub const fn index(&self) -> usize {
        match self {
            Quarter::Q1 => 0,
            Quarter::Q2 => 1,
            Quarter::Q3 => 2,
            Quarter::Q4 => 3,
        }
    }

    /// Display label (`Q1`..`Q4`).
    pub const fn label(&self) -> &'static str {
        QUARTER_LABELS[self.index()]
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a record date as a local calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and `MM/DD/YYYY`, optionally followed by
/// a `T` or space separated time part which is ignored. Returns `None` when
/// parsing fails.
pub fn parse_sales_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Calendar year of `date`.
pub fn year_of(date: &NaiveDate) -> Year {
    date.year()
}

/// `YYYY-MM` key for monthly series.
pub fn month_key(date: &NaiveDate) -> MonthKey {
    date.format("%Y-%m").to_string()
}

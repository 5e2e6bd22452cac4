use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates::Quarter;
use crate::errors::SalesError;
pub use crate::types::{CategoryValue, DateString, MonthKey, RecordId, SegmentLabel, Year};

/// One sales transaction observation.
///
/// Categorical fields use an empty string for "missing"; numeric factors use
/// `None`. `total_sales` is derived from `quantity * unit_price` and is
/// recomputed by the cleaner rather than trusted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub date: DateString,
    #[serde(default)]
    pub product: CategoryValue,
    #[serde(default)]
    pub category: CategoryValue,
    #[serde(default)]
    pub region: CategoryValue,
    #[serde(default)]
    pub customer_type: CategoryValue,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub total_sales: f64,
}

impl SalesRecord {
    /// Borrow a categorical field by selector. Returns `None` for non-categorical fields.
    pub fn categorical(&self, field: SalesField) -> Option<&str> {
        match field {
            SalesField::Product => Some(self.product.as_str()),
            SalesField::Category => Some(self.category.as_str()),
            SalesField::Region => Some(self.region.as_str()),
            SalesField::CustomerType => Some(self.customer_type.as_str()),
            _ => None,
        }
    }

    pub(crate) fn categorical_mut(&mut self, field: SalesField) -> Option<&mut String> {
        match field {
            SalesField::Product => Some(&mut self.product),
            SalesField::Category => Some(&mut self.category),
            SalesField::Region => Some(&mut self.region),
            SalesField::CustomerType => Some(&mut self.customer_type),
            _ => None,
        }
    }

    /// Read a numeric factor by selector (`quantity` or `unitPrice`).
    pub fn numeric(&self, field: SalesField) -> Option<f64> {
        match field {
            SalesField::Quantity => self.quantity,
            SalesField::UnitPrice => self.unit_price,
            SalesField::TotalSales => Some(self.total_sales),
            _ => None,
        }
    }

    /// True when any categorical attribute is empty.
    pub fn has_missing_category(&self) -> bool {
        SalesField::CATEGORICAL
            .iter()
            .any(|field| self.categorical(*field).is_some_and(str::is_empty))
    }

    /// `quantity * unit_price`, treating a missing factor as zero.
    pub fn computed_total(&self) -> f64 {
        self.quantity.unwrap_or(0.0) * self.unit_price.unwrap_or(0.0)
    }

    /// Grouping key for `field`, or `None` when the value is empty or missing.
    ///
    /// Numbers are rendered with `f64`'s `Display`, so `2.0` groups as `"2"`.
    pub fn group_key(&self, field: SalesField) -> Option<SegmentLabel> {
        let key = match field {
            SalesField::Id => self.id.clone(),
            SalesField::Date => self.date.clone(),
            SalesField::Product
            | SalesField::Category
            | SalesField::Region
            | SalesField::CustomerType => self.categorical(field)?.to_string(),
            SalesField::Quantity | SalesField::UnitPrice | SalesField::TotalSales => {
                self.numeric(field)?.to_string()
            }
        };
        if key.is_empty() { None } else { Some(key) }
    }
}

/// Selector for a `SalesRecord` field, named as on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SalesField {
    Id,
    Date,
    Product,
    Category,
    Region,
    CustomerType,
    Quantity,
    UnitPrice,
    TotalSales,
}

impl SalesField {
    /// Categorical attributes imputed by the cleaner, in cleaning order.
    pub const CATEGORICAL: [SalesField; 4] = [
        SalesField::Product,
        SalesField::Category,
        SalesField::Region,
        SalesField::CustomerType,
    ];

    /// Numeric factors checked for missing, zero, and outlier values.
    pub const FACTORS: [SalesField; 2] = [SalesField::Quantity, SalesField::UnitPrice];

    /// Wire name of the field (`customerType`, `unitPrice`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SalesField::Id => "id",
            SalesField::Date => "date",
            SalesField::Product => "product",
            SalesField::Category => "category",
            SalesField::Region => "region",
            SalesField::CustomerType => "customerType",
            SalesField::Quantity => "quantity",
            SalesField::UnitPrice => "unitPrice",
            SalesField::TotalSales => "totalSales",
        }
    }
}

impl fmt::Display for SalesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalesField {
    type Err = SalesError;

    /// Accepts wire names and their snake_case spellings.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let field = match raw.trim() {
            "id" => SalesField::Id,
            "date" => SalesField::Date,
            "product" => SalesField::Product,
            "category" => SalesField::Category,
            "region" => SalesField::Region,
            "customerType" | "customer_type" => SalesField::CustomerType,
            "quantity" => SalesField::Quantity,
            "unitPrice" | "unit_price" => SalesField::UnitPrice,
            "totalSales" | "total_sales" => SalesField::TotalSales,
            other => return Err(SalesError::UnknownField(other.to_string())),
        };
        Ok(field)
    }
}

/// Summed `total_sales` for one group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentValue {
    pub label: SegmentLabel,
    pub value: f64,
}

/// Segment value with its share of the overall total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub label: SegmentLabel,
    pub value: f64,
    /// Percentage of the total across all groups, rounded to one decimal.
    pub percentage: f64,
}

/// Yearly sales total with growth against the previous year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearlyGrowth {
    pub year: Year,
    pub sales: f64,
    /// Percentage change versus the prior year, rounded to two decimals.
    ///
    /// `Some(0.0)` for the first year; `None` when the prior year's total is zero.
    pub growth: Option<f64>,
}

/// Average sales per record for one quarter, pooled across years.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterAverage {
    pub quarter: Quarter,
    pub average_sales: f64,
}

/// Total sales for one quarter of one year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuarterlySales {
    pub quarter: Quarter,
    pub year: Year,
    pub sales: f64,
}

/// Total sales for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: MonthKey,
    pub sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SalesRecord {
        SalesRecord {
            id: "SALE-01000".to_string(),
            date: "2021-02-10".to_string(),
            product: "Laptop Pro".to_string(),
            category: String::new(),
            region: "Europe".to_string(),
            customer_type: "Corporate".to_string(),
            quantity: Some(2.0),
            unit_price: None,
            total_sales: 0.0,
        }
    }

    #[test]
    fn group_key_skips_empty_and_missing_values() {
        let record = record();
        assert_eq!(
            record.group_key(SalesField::Product).as_deref(),
            Some("Laptop Pro")
        );
        assert_eq!(record.group_key(SalesField::Category), None);
        assert_eq!(record.group_key(SalesField::UnitPrice), None);
        assert_eq!(record.group_key(SalesField::Quantity).as_deref(), Some("2"));
        assert_eq!(record.group_key(SalesField::TotalSales).as_deref(), Some("0"));
    }

    #[test]
    fn field_names_parse_in_both_spellings() {
        assert_eq!(
            "customerType".parse::<SalesField>().unwrap(),
            SalesField::CustomerType
        );
        assert_eq!(
            "unit_price".parse::<SalesField>().unwrap(),
            SalesField::UnitPrice
        );
        assert!(matches!(
            "colour".parse::<SalesField>(),
            Err(SalesError::UnknownField(name)) if name == "colour"
        ));
        for field in SalesField::CATEGORICAL {
            assert_eq!(field.as_str().parse::<SalesField>().unwrap(), field);
        }
    }

    #[test]
    fn record_deserializes_with_missing_fields() {
        let json = r#"{"id":"A","date":"2022-01-05","region":"Europe","quantity":3}"#;
        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.product, "");
        assert_eq!(record.quantity, Some(3.0));
        assert_eq!(record.unit_price, None);
        assert!(record.has_missing_category());
        assert_eq!(record.computed_total(), 0.0);
    }
}

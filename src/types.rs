/// Unique sales record identifier.
/// Example: `SALE-01042`
pub type RecordId = String;
/// Calendar date string as stored on a record.
/// Examples: `2021-02-10`, `2021-02-10T09:30:00`
pub type DateString = String;
/// Categorical attribute value (product, category, region, customer type).
/// Examples: `Laptop Pro`, `Electronics`, `Asia Pacific`, `Corporate`
pub type CategoryValue = String;
/// Group label produced by segment aggregation.
/// Examples: `Europe`, `Small Business`, `12`
pub type SegmentLabel = String;
/// Year-month key used by monthly series.
/// Example: `2022-07`
pub type MonthKey = String;
/// Calendar year extracted from a record date.
/// Example: `2022`
pub type Year = i32;

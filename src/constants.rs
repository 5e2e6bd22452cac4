/// Constants used by the record cleaner and outlier detection.
pub mod cleaning {
    /// Number of population standard deviations beyond which a value is an outlier.
    pub const OUTLIER_STD_DEVS: f64 = 3.0;
}

/// Constants used when rounding derived figures.
pub mod rounding {
    /// Decimal places kept for growth percentages and seasonal averages.
    pub const TREND_DECIMALS: u32 = 2;
    /// Decimal places kept for segment share percentages and quality scores.
    pub const SHARE_DECIMALS: u32 = 1;
}

/// Constants used for generated record identifiers.
pub mod ids {
    /// Prefix for generated record ids (`SALE-01000`).
    pub const RECORD_ID_PREFIX: &str = "SALE-";
    /// Offset added to the row index when generating ids.
    pub const RECORD_ID_OFFSET: usize = 1000;
    /// Zero-padded width of the numeric part of generated ids.
    pub const RECORD_ID_WIDTH: usize = 5;
}

/// Quarter labels in calendar order.
pub mod quarters {
    /// Labels for Jan–Mar, Apr–Jun, Jul–Sep, Oct–Dec.
    pub const QUARTER_LABELS: [&str; 4] = ["Q1", "Q2", "Q3", "Q4"];
}

/// Constants used by the mock dataset factory.
pub mod mock {
    /// Product catalogue sampled by the mock generator.
    pub const PRODUCTS: [&str; 10] = [
        "Laptop Pro",
        "Smartphone X",
        "Tablet Ultra",
        "Desktop Workstation",
        "Gaming Console",
        "Wireless Earbuds",
        "Smart Watch",
        "Camera 4K",
        "Portable Speaker",
        "Monitor 27\"",
    ];
    /// Product categories sampled by the mock generator.
    pub const CATEGORIES: [&str; 5] = [
        "Electronics",
        "Computing",
        "Mobile",
        "Gaming",
        "Accessories",
    ];
    /// Sales regions sampled by the mock generator.
    pub const REGIONS: [&str; 5] = [
        "North America",
        "Europe",
        "Asia Pacific",
        "Latin America",
        "Middle East",
    ];
    /// Customer types sampled by the mock generator.
    pub const CUSTOMER_TYPES: [&str; 5] = [
        "Individual",
        "Small Business",
        "Corporate",
        "Education",
        "Government",
    ];
    /// Default number of generated records.
    pub const DEFAULT_RECORD_COUNT: usize = 1000;
    /// Inclusive quantity range for generated records.
    pub const QUANTITY_RANGE: (u32, u32) = (1, 20);
    /// Inclusive unit price range for generated records.
    pub const UNIT_PRICE_RANGE: (u32, u32) = (100, 1099);
    /// First calendar date (year, month, day) of generated records.
    pub const START_DATE: (i32, u32, u32) = (2020, 1, 1);
    /// Last calendar date (year, month, day) of generated records.
    pub const END_DATE: (i32, u32, u32) = (2023, 12, 31);
    /// Number of categorical blanks injected by `add_data_anomalies`.
    pub const MISSING_VALUE_INJECTIONS: usize = 50;
    /// Number of quantity outliers injected by `add_data_anomalies`.
    pub const OUTLIER_INJECTIONS: usize = 10;
    /// Inclusive quantity range used for injected outliers.
    pub const OUTLIER_QUANTITY_RANGE: (u32, u32) = (500, 1499);
    /// Seed used by the report runner when none is supplied.
    pub const DEFAULT_SEED: u64 = 42;
}

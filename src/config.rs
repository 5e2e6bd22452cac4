use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::cleaning::OUTLIER_STD_DEVS;
use crate::constants::mock::{DEFAULT_RECORD_COUNT, MISSING_VALUE_INJECTIONS, OUTLIER_INJECTIONS};
use crate::errors::SalesError;

/// Controls how the cleaner detects anomalous numeric values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CleaningConfig {
    /// Values further than this many population standard deviations from the
    /// field mean are treated as outliers and replaced with the mean.
    pub outlier_std_devs: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            outlier_std_devs: OUTLIER_STD_DEVS,
        }
    }
}

impl CleaningConfig {
    /// Validate that the outlier threshold is a positive finite number.
    pub fn validated(self) -> Result<Self, SalesError> {
        if !self.outlier_std_devs.is_finite() || self.outlier_std_devs <= 0.0 {
            return Err(SalesError::Configuration(format!(
                "outlier threshold must be a positive number of standard deviations, got {}",
                self.outlier_std_devs
            )));
        }
        Ok(self)
    }
}

/// Anomaly injection applied on top of generated records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnomalyConfig {
    /// Number of random categorical fields blanked out.
    pub missing_values: usize,
    /// Number of random records given an extreme quantity.
    pub outliers: usize,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            missing_values: MISSING_VALUE_INJECTIONS,
            outliers: OUTLIER_INJECTIONS,
        }
    }
}

/// Configuration for the mock dataset factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockDataConfig {
    /// Number of records to generate.
    pub count: usize,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Anomalies to inject after generation; `None` keeps the data pristine.
    pub anomalies: Option<AnomalyConfig>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECORD_COUNT,
            seed: None,
            anomalies: Some(AnomalyConfig::default()),
        }
    }
}

impl MockDataConfig {
    /// Build the RNG described by `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

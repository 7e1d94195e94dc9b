use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

use crate::validation::{int_in_range, ValidationResult};

pub const MIN_MINUTES: i64 = 5;
pub const MAX_MINUTES: i64 = 10_080;
pub const DEFAULT_SEED: i64 = 42;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scenario {
    Urban,
    Highway,
    Mixed,
}

/// One simulated minute of driving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TelemetrySample {
    pub t: u32,
    pub speed_kmh: f64,
    pub temperature_c: f64,
    /// Headwind (+) or tailwind (-)
    pub wind_kmh: f64,
    pub soc_percent: f64,
}

fn default_minutes() -> i64 {
    60
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TelemetryRequest {
    pub scenario: Scenario,
    /// Duration in minutes (5..=10080)
    #[serde(default = "default_minutes")]
    pub minutes: i64,
    /// Deterministic seed; 42 when absent
    #[serde(default)]
    pub seed: Option<i64>,
    /// Export the series as CSV under the data directory
    #[serde(default)]
    pub export_csv: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub scenario: Scenario,
    pub minutes: u32,
    pub seed: i64,
}

impl GenerationParams {
    pub fn new(scenario: Scenario, minutes: i64, seed: Option<i64>) -> ValidationResult<Self> {
        let minutes = int_in_range("minutes", minutes, MIN_MINUTES, MAX_MINUTES)? as u32;
        Ok(Self {
            scenario,
            minutes,
            seed: seed.unwrap_or(DEFAULT_SEED),
        })
    }
}

impl TelemetryRequest {
    pub fn validate(&self) -> ValidationResult<GenerationParams> {
        GenerationParams::new(self.scenario, self.minutes, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_request_defaults() {
        let req: TelemetryRequest = serde_json::from_str(r#"{"scenario": "mixed"}"#).unwrap();
        assert_eq!(req.minutes, 60);
        assert!(!req.export_csv);
        let params = req.validate().unwrap();
        assert_eq!(params.seed, DEFAULT_SEED);
        assert_eq!(params.scenario, Scenario::Mixed);
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let res: Result<TelemetryRequest, _> = serde_json::from_str(r#"{"scenario": "offroad"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_minutes_bounds() {
        assert!(GenerationParams::new(Scenario::Urban, 4, None).is_err());
        assert!(GenerationParams::new(Scenario::Urban, 10_081, None).is_err());
        assert!(GenerationParams::new(Scenario::Urban, 5, None).is_ok());
        assert!(GenerationParams::new(Scenario::Urban, 10_080, None).is_ok());
        assert_eq!(
            GenerationParams::new(Scenario::Urban, 0, None)
                .unwrap_err()
                .field,
            "minutes"
        );
    }

    #[test]
    fn test_scenario_names() {
        assert_eq!(Scenario::Highway.to_string(), "highway");
        assert_eq!(Scenario::from_str("urban", false).unwrap(), Scenario::Urban);
    }
}

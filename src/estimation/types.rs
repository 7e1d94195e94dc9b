use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{in_range, int_in_range, positive, ValidationResult};

fn default_reserve_percent() -> f64 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleSpec {
    pub make: String,
    pub model: String,
    /// Model year (1980..=2100)
    pub year: i64,
    /// Battery capacity in kWh
    pub battery_kwh: f64,
    /// Reserve buffer percent (0..=50)
    #[serde(default = "default_reserve_percent")]
    pub reserve_percent: f64,
}

impl VehicleSpec {
    pub fn validate(&self) -> ValidationResult<()> {
        int_in_range("vehicle.year", self.year, 1980, 2100)?;
        positive("vehicle.battery_kwh", self.battery_kwh)?;
        in_range("vehicle.reserve_percent", self.reserve_percent, 0.0, 50.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TelemetryReading {
    pub speed_kmh: f64,
    pub temperature_c: f64,
    /// Headwind (+) or tailwind (-) in km/h
    #[serde(default)]
    pub wind_kmh: f64,
    pub soc_percent: f64,
}

impl TelemetryReading {
    pub fn validate(&self) -> ValidationResult<()> {
        in_range("telemetry.speed_kmh", self.speed_kmh, 0.0, 300.0)?;
        in_range("telemetry.temperature_c", self.temperature_c, -60.0, 60.0)?;
        in_range("telemetry.wind_kmh", self.wind_kmh, -150.0, 150.0)?;
        in_range("telemetry.soc_percent", self.soc_percent, 0.0, 100.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RangeEstimateRequest {
    pub vehicle: VehicleSpec,
    pub telemetry: TelemetryReading,
}

impl RangeEstimateRequest {
    pub fn validate(&self) -> ValidationResult<()> {
        self.vehicle.validate()?;
        self.telemetry.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Assumptions {
    pub usable_kwh: f64,
    pub efficiency_km_per_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RangeEstimate {
    pub estimated_km: f64,
    pub assumptions: Assumptions,
}

mod model;
mod types;

pub use model::estimate_range;
pub use types::{Assumptions, RangeEstimate, RangeEstimateRequest, TelemetryReading, VehicleSpec};

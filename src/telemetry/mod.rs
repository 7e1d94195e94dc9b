mod export;
mod generator;
mod types;

pub use export::{write_csv, ExportDir, ExportError};
pub use generator::generate;
pub use types::{GenerationParams, Scenario, TelemetryRequest, TelemetrySample};

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use thiserror::Error;

use crate::telemetry::types::TelemetrySample;

pub const CSV_COLUMNS: [&str; 5] = ["t", "speed_kmh", "temperature_c", "wind_kmh", "soc_percent"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes telemetry series into a managed export directory, one file per call.
pub struct ExportDir {
    base_dir: PathBuf,
}

impl ExportDir {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Write `samples` to a new uniquely named CSV file and return its absolute path.
    pub fn write_csv(&self, samples: &[TelemetrySample]) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.base_dir)?;

        let path = self.base_dir.join(format!("{}.csv", uuid::Uuid::new_v4()));
        write_csv(fs::File::create(&path)?, samples)?;

        let path = fs::canonicalize(&path)?;
        log::info!("Exported {} samples to {}", samples.len(), path.display());

        Ok(path)
    }
}

/// Serialize samples as CSV with a fixed header and 3-decimal floats.
pub fn write_csv<W: Write>(out: W, samples: &[TelemetrySample]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_COLUMNS)?;
    for s in samples {
        writer.write_record([
            s.t.to_string(),
            format!("{:.3}", s.speed_kmh),
            format!("{:.3}", s.temperature_c),
            format!("{:.3}", s.wind_kmh),
            format!("{:.3}", s.soc_percent),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

//! Efficiency history analytics: summary statistics, linear trend and anomalies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::numeric::{clamp, round6};
use crate::validation::{count, in_open_range, ValidationResult};

pub const MIN_HISTORY: usize = 5;
pub const MAX_HISTORY: usize = 10_000;
const ANOMALY_Z_THRESHOLD: f64 = 2.5;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyticsRequest {
    /// Efficiency history in km/kWh, oldest first
    pub efficiency_history_km_per_kwh: Vec<f64>,
}

impl AnalyticsRequest {
    pub fn validate(&self) -> ValidationResult<&[f64]> {
        let field = "efficiency_history_km_per_kwh";
        let xs = &self.efficiency_history_km_per_kwh;
        count(field, xs.len(), MIN_HISTORY, MAX_HISTORY)?;
        for (i, &x) in xs.iter().enumerate() {
            in_open_range(&format!("{}[{}]", field, i), x, 0.0, 20.0)?;
        }
        Ok(xs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalyticsReport {
    pub count: usize,
    pub mean_efficiency: f64,
    pub std_efficiency: f64,
    pub degradation_index: f64,
    pub trend_slope: f64,
    pub trend_intercept: f64,
    pub anomalies_idx: Vec<usize>,
}

pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(xs: &[f64], mean: f64) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
    var.sqrt()
}

/// Least-squares fit `y = slope * i + intercept` over `i = 0..n`.
pub fn linear_trend(xs: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    if xs.is_empty() {
        return (0.0, 0.0);
    }

    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in xs.iter().enumerate() {
        let x = i as f64;
        sx += x;
        sy += y;
        sxx += x * x;
        sxy += x * y;
    }

    let denom = n * sxx - sx * sx;
    if denom == 0.0 {
        return (0.0, xs[0]);
    }
    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;
    (slope, intercept)
}

/// Indices whose absolute z-score exceeds the threshold.
pub fn z_score_anomalies(xs: &[f64], mean: f64, std: f64) -> Vec<usize> {
    if std <= 0.0 {
        return Vec::new();
    }
    xs.iter()
        .enumerate()
        .filter(|&(_, &x)| ((x - mean) / std).abs() > ANOMALY_Z_THRESHOLD)
        .map(|(i, _)| i)
        .collect()
}

pub fn run(xs: &[f64]) -> AnalyticsReport {
    let mean = mean(xs);
    let std = sample_std(xs, mean);
    let (slope, intercept) = linear_trend(xs);
    // Negative slope normalised by the mean reads as degradation.
    let scale = if mean != 0.0 { mean } else { 1.0 };
    let degradation = clamp(-slope / scale, -1.0, 1.0);

    AnalyticsReport {
        count: xs.len(),
        mean_efficiency: round6(mean),
        std_efficiency: round6(std),
        degradation_index: round6(degradation),
        trend_slope: round6(slope),
        trend_intercept: round6(intercept),
        anomalies_idx: z_score_anomalies(xs, mean, std),
    }
}

use std::f64::consts::PI;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::geometry::types::{Point2D, Ring};
use crate::validation::{in_range, int_in_range, positive, ValidationResult};

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const MIN_POINTS: i64 = 12;
pub const MAX_POINTS: i64 = 512;

fn default_points() -> i64 {
    64
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CircleRequest {
    /// Center latitude in degrees
    pub center_lat: f64,
    /// Center longitude in degrees
    pub center_lon: f64,
    /// Radius in meters
    pub radius_m: f64,
    /// Number of vertices before closure (12..=512)
    #[serde(default = "default_points")]
    pub points: i64,
}

/// Circle parameters that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct CircleParams {
    pub center_lat: f64,
    pub center_lon: f64,
    pub radius_m: f64,
    pub points: usize,
}

impl CircleRequest {
    pub fn validate(&self) -> ValidationResult<CircleParams> {
        let center_lat = in_range("center_lat", self.center_lat, -90.0, 90.0)?;
        let center_lon = in_range("center_lon", self.center_lon, -180.0, 180.0)?;
        let radius_m = positive("radius_m", self.radius_m)?;
        let points = int_in_range("points", self.points, MIN_POINTS, MAX_POINTS)? as usize;
        Ok(CircleParams {
            center_lat,
            center_lon,
            radius_m,
            points,
        })
    }
}

/// Sample a circle of `radius_m` around the center using a local equirectangular
/// approximation.
///
/// Accuracy degrades towards the poles and for large radii; no correction is applied.
/// The returned ring holds `points + 1` vertices as `(lon, lat)`.
pub fn circle_ring(params: &CircleParams) -> Ring {
    let n = params.points;
    let cos_lat = params.center_lat.to_radians().cos();

    let open = (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            let dx = params.radius_m * theta.cos();
            let dy = params.radius_m * theta.sin();
            let d_lat = (dy / EARTH_RADIUS_M).to_degrees();
            let d_lon = (dx / (EARTH_RADIUS_M * cos_lat)).to_degrees();
            Point2D::new(params.center_lon + d_lon, params.center_lat + d_lat)
        })
        .collect();

    Ring::close(open)
}

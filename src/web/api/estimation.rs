use axum::Json;

use crate::estimation::{estimate_range, RangeEstimate, RangeEstimateRequest};
use crate::web::api::error::{ApiResult, ErrorResponse};

#[utoipa::path(
    post,
    path = "/estimation/estimate",
    tag = "estimation",
    request_body = RangeEstimateRequest,
    responses(
        (status = 200, description = "Estimated remaining range", body = RangeEstimate),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn estimate(
    Json(request): Json<RangeEstimateRequest>,
) -> ApiResult<Json<RangeEstimate>> {
    request.validate()?;
    Ok(Json(estimate_range(&request)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(soc: f64) -> RangeEstimateRequest {
        serde_json::from_value(serde_json::json!({
            "vehicle": {"make": "Make", "model": "Model", "year": 2022, "battery_kwh": 75},
            "telemetry": {"speed_kmh": 80, "temperature_c": 20, "soc_percent": soc}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_estimate_basic() {
        let Json(est) = estimate(Json(payload(50.0))).await.unwrap();
        assert!(est.estimated_km > 0.0);
        assert_eq!(est.assumptions.efficiency_km_per_kwh, 6.0);
    }

    #[tokio::test]
    async fn test_estimate_zero_soc() {
        let Json(est) = estimate(Json(payload(0.0))).await.unwrap();
        assert_eq!(est.estimated_km, 0.0);
    }

    #[tokio::test]
    async fn test_estimate_rejects_soc_over_100() {
        assert!(estimate(Json(payload(120.0))).await.is_err());
    }
}

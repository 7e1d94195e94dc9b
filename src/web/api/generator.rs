use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::telemetry::{generate, TelemetryRequest, TelemetrySample};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TelemetryResponse {
    pub points: Vec<TelemetrySample>,
    pub count: usize,
    pub export_path: Option<String>,
}

#[utoipa::path(
    post,
    path = "/generator/telemetry",
    tag = "generator",
    request_body = TelemetryRequest,
    responses(
        (status = 200, description = "Deterministic synthetic telemetry series", body = TelemetryResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "CSV export failed", body = ErrorResponse)
    )
)]
pub async fn telemetry(
    State(state): State<AppState>,
    Json(request): Json<TelemetryRequest>,
) -> ApiResult<Json<TelemetryResponse>> {
    let params = request.validate()?;
    let points = generate(&params);

    let export_path = if request.export_csv {
        let path = state.exports.write_csv(&points)?;
        Some(path.display().to_string())
    } else {
        None
    };

    Ok(Json(TelemetryResponse {
        count: points.len(),
        points,
        export_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::Scenario;
    use crate::web::config::Config;

    fn state(dir: &std::path::Path) -> AppState {
        let mut config = Config::default();
        config.data.dir = dir.to_path_buf();
        AppState::new(config)
    }

    fn request(scenario: Scenario, minutes: i64, seed: i64, export_csv: bool) -> TelemetryRequest {
        TelemetryRequest {
            scenario,
            minutes,
            seed: Some(seed),
            export_csv,
        }
    }

    #[tokio::test]
    async fn test_deterministic_seed_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let Json(a) = telemetry(
            State(state(dir.path())),
            Json(request(Scenario::Urban, 30, 123, false)),
        )
        .await
        .unwrap();
        let Json(b) = telemetry(
            State(state(dir.path())),
            Json(request(Scenario::Urban, 30, 123, false)),
        )
        .await
        .unwrap();
        assert_eq!(a.count, 30);
        assert_eq!(a.points, b.points);
        assert!(a.export_path.is_none());
    }

    #[tokio::test]
    async fn test_export_csv() {
        let dir = tempfile::tempdir().unwrap();
        let Json(response) = telemetry(
            State(state(dir.path())),
            Json(request(Scenario::Highway, 10, 42, true)),
        )
        .await
        .unwrap();
        assert_eq!(response.count, 10);
        let path = response.export_path.expect("export path");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 11);
    }

    #[tokio::test]
    async fn test_rejects_short_duration() {
        let dir = tempfile::tempdir().unwrap();
        let result = telemetry(
            State(state(dir.path())),
            Json(request(Scenario::Mixed, 4, 1, false)),
        )
        .await;
        assert!(result.is_err());
    }
}

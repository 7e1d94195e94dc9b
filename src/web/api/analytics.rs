use axum::Json;

use crate::analytics::{self, AnalyticsReport, AnalyticsRequest};
use crate::web::api::error::{ApiResult, ErrorResponse};

#[utoipa::path(
    post,
    path = "/analytics/run",
    tag = "analytics",
    request_body = AnalyticsRequest,
    responses(
        (status = 200, description = "Degradation, trend and anomaly analysis", body = AnalyticsReport),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn run(Json(request): Json<AnalyticsRequest>) -> ApiResult<Json<AnalyticsReport>> {
    let history = request.validate()?;
    Ok(Json(analytics::run(history)))
}

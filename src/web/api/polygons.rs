use axum::Json;

use crate::geometry::{circle_ring, convex_hull, CircleRequest, HullRequest, Polygon};
use crate::web::api::error::{ApiResult, ErrorResponse};

#[utoipa::path(
    post,
    path = "/polygons/range-circle",
    tag = "polygons",
    request_body = CircleRequest,
    responses(
        (status = 200, description = "Approximate geodesic circle polygon", body = Polygon),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn range_circle(Json(request): Json<CircleRequest>) -> ApiResult<Json<Polygon>> {
    let params = request.validate()?;
    Ok(Json(circle_ring(&params).into()))
}

#[utoipa::path(
    post,
    path = "/polygons/convex-hull",
    tag = "polygons",
    request_body = HullRequest,
    responses(
        (status = 200, description = "Convex hull polygon (counter-clockwise)", body = Polygon),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn hull(Json(request): Json<HullRequest>) -> ApiResult<Json<Polygon>> {
    let points = request.validate()?;
    let ring = convex_hull(&points);
    log::debug!(
        "Convex hull of {} points has {} vertices",
        points.len(),
        ring.len()
    );
    Ok(Json(ring.into()))
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::twins::{DigitalTwin, TwinCreate, TwinPage, TwinUpdate};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

fn default_limit() -> usize {
    50
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTwinsQuery {
    /// Number of twins to skip (default 0)
    #[serde(default)]
    pub offset: usize,
    /// Maximum number of twins to return (default 50)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTwinResponse {
    pub deleted: bool,
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/twins",
    tag = "twins",
    request_body = TwinCreate,
    responses(
        (status = 200, description = "Twin created", body = DigitalTwin),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_twin(
    State(state): State<AppState>,
    Json(payload): Json<TwinCreate>,
) -> ApiResult<Json<DigitalTwin>> {
    payload.validate()?;
    let twin = state.storage.create(payload)?;
    log::info!("Created twin {}", twin.id);
    Ok(Json(twin))
}

#[utoipa::path(
    get,
    path = "/twins",
    tag = "twins",
    params(ListTwinsQuery),
    responses(
        (status = 200, description = "Page of twins", body = TwinPage)
    )
)]
pub async fn list_twins(
    State(state): State<AppState>,
    Query(query): Query<ListTwinsQuery>,
) -> ApiResult<Json<TwinPage>> {
    Ok(Json(state.storage.list(query.offset, query.limit)?))
}

#[utoipa::path(
    get,
    path = "/twins/{id}",
    tag = "twins",
    params(
        ("id" = String, Path, description = "Twin ID")
    ),
    responses(
        (status = 200, description = "Twin details", body = DigitalTwin),
        (status = 404, description = "Twin not found", body = ErrorResponse)
    )
)]
pub async fn get_twin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DigitalTwin>> {
    Ok(Json(state.storage.get(&id)?))
}

#[utoipa::path(
    put,
    path = "/twins/{id}",
    tag = "twins",
    params(
        ("id" = String, Path, description = "Twin ID")
    ),
    request_body = TwinUpdate,
    responses(
        (status = 200, description = "Twin updated", body = DigitalTwin),
        (status = 404, description = "Twin not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn update_twin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<TwinUpdate>,
) -> ApiResult<Json<DigitalTwin>> {
    update.validate()?;
    Ok(Json(state.storage.update(&id, update)?))
}

#[utoipa::path(
    delete,
    path = "/twins/{id}",
    tag = "twins",
    params(
        ("id" = String, Path, description = "Twin ID")
    ),
    responses(
        (status = 200, description = "Twin deleted", body = DeleteTwinResponse),
        (status = 404, description = "Twin not found", body = ErrorResponse)
    )
)]
pub async fn delete_twin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTwinResponse>> {
    state.storage.delete(&id)?;
    log::info!("Deleted twin {}", id);
    Ok(Json(DeleteTwinResponse { deleted: true, id }))
}

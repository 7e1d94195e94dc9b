use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::api::{analytics, estimation, generator, health, polygons, twins};
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::health_check))
        .route("/estimation/estimate", post(estimation::estimate))
        .route("/polygons/range-circle", post(polygons::range_circle))
        .route("/polygons/convex-hull", post(polygons::hull))
        .route(
            "/twins",
            post(twins::create_twin).get(twins::list_twins),
        )
        .route(
            "/twins/{id}",
            get(twins::get_twin)
                .put(twins::update_twin)
                .delete(twins::delete_twin),
        )
        .route("/analytics/run", post(analytics::run))
        .route("/generator/telemetry", post(generator::telemetry))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    config.ensure_data_dirs()?;

    let bind_addr = config.web.bind.clone();
    log::info!("Data directory: {}", config.data.dir.display());

    let app = router(AppState::new(config));

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}

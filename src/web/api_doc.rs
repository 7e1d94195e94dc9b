use utoipa::OpenApi;

use super::api::{
    error::ErrorResponse, generator::TelemetryResponse, health::HealthResponse,
    twins::DeleteTwinResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::health::health_check,
        super::api::estimation::estimate,
        super::api::polygons::range_circle,
        super::api::polygons::hull,
        super::api::twins::create_twin,
        super::api::twins::list_twins,
        super::api::twins::get_twin,
        super::api::twins::update_twin,
        super::api::twins::delete_twin,
        super::api::analytics::run,
        super::api::generator::telemetry,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            TelemetryResponse,
            DeleteTwinResponse,
            crate::geometry::CircleRequest,
            crate::geometry::HullRequest,
            crate::geometry::Polygon,
            crate::estimation::RangeEstimateRequest,
            crate::estimation::RangeEstimate,
            crate::estimation::Assumptions,
            crate::estimation::VehicleSpec,
            crate::estimation::TelemetryReading,
            crate::twins::DigitalTwin,
            crate::twins::TwinCreate,
            crate::twins::TwinUpdate,
            crate::twins::TwinPage,
            crate::analytics::AnalyticsRequest,
            crate::analytics::AnalyticsReport,
            crate::telemetry::TelemetryRequest,
            crate::telemetry::TelemetrySample,
            crate::telemetry::Scenario,
        )
    ),
    info(
        title = "Vehicle Range API",
        description = "APIs for vehicle range estimation, geospatial polygons, digital twins, analytics, and synthetic data generation.",
        version = "0.1.0"
    ),
    tags(
        (name = "health", description = "Service health and metadata"),
        (name = "estimation", description = "Vehicle range estimation"),
        (name = "polygons", description = "Geospatial polygon utilities"),
        (name = "twins", description = "Digital twin CRUD"),
        (name = "analytics", description = "Analytics and insights"),
        (name = "generator", description = "Synthetic telemetry generator")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/estimation/estimate",
            "/polygons/range-circle",
            "/polygons/convex-hull",
            "/twins",
            "/twins/{id}",
            "/analytics/run",
            "/generator/telemetry",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_list_twins_query_params() {
        let doc = ApiDoc::openapi();
        let list = doc.paths.paths["/twins"].get.as_ref().unwrap();
        let names: Vec<&str> = list
            .parameters
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["offset", "limit"]);
    }
}

//! API Router with Swagger UI

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{StationLocator, StationView};
use crate::config::AppConfig;

use super::modules::{health, stations};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stations::find_nearby,
        stations::find_free,
        stations::find_free_nearby,
    ),
    components(schemas(StationView, health::HealthResponse, health::ComponentHealth)),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Stations", description = "Nearby and free charging station lookup"),
    ),
    info(
        title = "Borne Locator API",
        version = "1.0.0",
        description = "Read-only REST API for locating nearby and free EV charging stations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    locator: StationLocator,
    db: DatabaseConnection,
    config: &AppConfig,
) -> Router {
    let station_state = stations::StationAppState {
        locator,
        default_radius_km: config.locator.default_radius_km,
    };

    let station_routes = Router::new()
        .route("/nearby", get(stations::find_nearby))
        .route("/free", get(stations::find_free))
        .route("/free-nearby", get(stations::find_free_nearby))
        .with_state(station_state);

    let health_routes = Router::new()
        .route("/api/v1/health", get(health::health_check))
        .with_state(health::HealthState::new(db));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .nest("/api/v1/stations", station_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{GeoPoint, Reservation, ReservationStatus, Station};
    use crate::infrastructure::database::{init_database, DatabaseConfig};
    use crate::infrastructure::storage::InMemoryStorage;

    fn paris() -> GeoPoint {
        GeoPoint::new(Decimal::new(488566, 4), Decimal::new(23522, 4))
    }

    async fn app() -> (Router, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        storage.add_station(Station::new(1, "Hôtel de Ville", paris()));
        storage.add_station(Station::new(
            2,
            "Louvre",
            GeoPoint::new(Decimal::new(488606, 4), Decimal::new(23376, 4)),
        ));
        storage.add_station(Station::new(
            3,
            "Bellecour",
            GeoPoint::new(Decimal::new(457578, 4), Decimal::new(48320, 4)),
        ));
        storage.add_reservation(
            Reservation::new(
                1,
                2,
                Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 1, 11, 0, 0).unwrap(),
            )
            .with_status(ReservationStatus::Accepted),
        );

        let locator = StationLocator::new(storage.clone(), storage.clone());
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        (create_api_router(locator, db, &AppConfig::default()), storage)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ids(body: &Value) -> Vec<i64> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn nearby_returns_stations_in_radius() {
        let (app, _) = app().await;
        let (status, body) = get_json(
            app,
            "/api/v1/stations/nearby?latitude=48.8566&longitude=2.3522&radius_km=10",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(ids(&body), vec![1, 2]);
        assert_eq!(body["data"][0]["name"], "Hôtel de Ville");
    }

    #[tokio::test]
    async fn nearby_uses_configured_default_radius() {
        let (app, _) = app().await;
        let (status, body) =
            get_json(app, "/api/v1/stations/nearby?latitude=45.7578&longitude=4.8320").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![3]);
    }

    #[tokio::test]
    async fn nearby_without_latitude_is_bad_request() {
        let (app, storage) = app().await;
        let (status, body) = get_json(app, "/api/v1/stations/nearby?longitude=2.3522").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert_eq!(storage.station_reads(), 0);
    }

    #[tokio::test]
    async fn nearby_out_of_range_is_bad_request() {
        let (app, storage) = app().await;
        let (status, _) =
            get_json(app, "/api/v1/stations/nearby?latitude=91&longitude=0&radius_km=1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(storage.station_reads(), 0);
    }

    #[tokio::test]
    async fn free_excludes_occupied_station() {
        let (app, _) = app().await;
        let (status, body) = get_json(app, "/api/v1/stations/free?at=2025-06-01T10:00:00Z").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 3]);
    }

    #[tokio::test]
    async fn free_at_reservation_end_includes_station() {
        let (app, _) = app().await;
        let (_, body) = get_json(app, "/api/v1/stations/free?at=2025-06-01T11:00:00Z").await;

        assert_eq!(ids(&body), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn free_without_instant_is_bad_request() {
        let (app, storage) = app().await;
        let (status, body) = get_json(app, "/api/v1/stations/free").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(storage.station_reads(), 0);
        assert_eq!(storage.reservation_reads(), 0);
    }

    #[tokio::test]
    async fn free_nearby_combines_both_filters() {
        let (app, _) = app().await;
        let (status, body) = get_json(
            app,
            "/api/v1/stations/free-nearby?latitude=48.8566&longitude=2.3522&radius_km=10&at=2025-06-01T10:00:00Z",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1]);
    }

    #[tokio::test]
    async fn malformed_instant_is_enveloped_bad_request() {
        let (app, storage) = app().await;
        let (status, body) = get_json(app, "/api/v1/stations/free?at=yesterday").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query:"));
        assert_eq!(storage.station_reads(), 0);
    }

    #[tokio::test]
    async fn malformed_latitude_is_enveloped_bad_request() {
        let (app, storage) = app().await;
        let (status, body) =
            get_json(app, "/api/v1/stations/nearby?latitude=abc&longitude=2.3522").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query:"));
        assert_eq!(storage.station_reads(), 0);
    }

    #[tokio::test]
    async fn malformed_radius_is_enveloped_bad_request() {
        let (app, _) = app().await;
        let (status, body) = get_json(
            app,
            "/api/v1/stations/free-nearby?latitude=48.8566&longitude=2.3522&radius_km=wide&at=2025-06-01T10:00:00Z",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn free_nearby_reports_missing_instant_before_coordinates() {
        let (app, storage) = app().await;
        let (status, body) = get_json(app, "/api/v1/stations/free-nearby").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid argument: Time must not be null");
        assert_eq!(storage.station_reads(), 0);
        assert_eq!(storage.reservation_reads(), 0);
    }

    #[tokio::test]
    async fn free_view_has_no_stored_occupancy_flag() {
        let (app, _) = app().await;
        let (_, body) = get_json(app, "/api/v1/stations/free?at=2025-06-01T10:00:00Z").await;

        for station in body["data"].as_array().unwrap() {
            assert!(station.get("occupied").is_none());
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = app().await;
        let (status, body) = get_json(app, "/api/v1/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn openapi_document_lists_station_paths() {
        let (app, _) = app().await;
        let (status, body) = get_json(app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/stations/nearby"].is_object());
        assert!(body["paths"]["/api/v1/stations/free-nearby"].is_object());
    }
}

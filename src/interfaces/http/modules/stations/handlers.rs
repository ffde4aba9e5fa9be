//! Station locator HTTP handlers

use axum::extract::State;
use axum::Json;

use crate::application::locator::require_instant;
use crate::application::{StationLocator, StationView};
use crate::domain::GeoPoint;
use crate::interfaces::http::common::{error_response, ApiQuery, ApiResponse, ApiResult};

use super::dto::*;

/// Application state for station handlers.
#[derive(Clone)]
pub struct StationAppState {
    pub locator: StationLocator,
    /// Radius applied when a query omits `radius_km`
    pub default_radius_km: f64,
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/nearby",
    tag = "Stations",
    params(NearbyQuery),
    responses(
        (status = 200, description = "Stations within the radius", body = ApiResponse<Vec<StationView>>),
        (status = 400, description = "Missing or out-of-range coordinate")
    )
)]
pub async fn find_nearby(
    State(state): State<StationAppState>,
    ApiQuery(query): ApiQuery<NearbyQuery>,
) -> ApiResult<Vec<StationView>> {
    let center = GeoPoint::from_parts(query.latitude, query.longitude).map_err(error_response)?;
    let radius_km = query.radius_km.unwrap_or(state.default_radius_km);

    let stations = state
        .locator
        .find_nearby(center, radius_km)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(stations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/free",
    tag = "Stations",
    params(FreeQuery),
    responses(
        (status = 200, description = "Stations not occupied at the instant", body = ApiResponse<Vec<StationView>>),
        (status = 400, description = "Missing instant")
    )
)]
pub async fn find_free(
    State(state): State<StationAppState>,
    ApiQuery(query): ApiQuery<FreeQuery>,
) -> ApiResult<Vec<StationView>> {
    let stations = state
        .locator
        .find_free(query.at)
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(stations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/free-nearby",
    tag = "Stations",
    params(FreeNearbyQuery),
    responses(
        (status = 200, description = "Free stations within the radius", body = ApiResponse<Vec<StationView>>),
        (status = 400, description = "Missing instant or invalid coordinate")
    )
)]
pub async fn find_free_nearby(
    State(state): State<StationAppState>,
    ApiQuery(query): ApiQuery<FreeNearbyQuery>,
) -> ApiResult<Vec<StationView>> {
    let at = require_instant(query.at).map_err(error_response)?;
    let center = GeoPoint::from_parts(query.latitude, query.longitude).map_err(error_response)?;
    let radius_km = query.radius_km.unwrap_or(state.default_radius_km);

    let stations = state
        .locator
        .find_free_nearby(center, radius_km, Some(at))
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(stations)))
}

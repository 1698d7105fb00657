//! Read-only transit data endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use transit::{BusArrival, FareInfo, RouteInfo};

use crate::error::{ApiError, Result};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StopSearch {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct FareQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct StopsResponse {
    pub stops: Vec<String>,
}

#[derive(Serialize)]
pub struct ArrivalsResponse {
    pub stop: String,
    pub arrivals: Vec<BusArrival>,
}

/// Search stops by name fragment.
pub async fn search_stops(
    State(state): State<AppState>,
    query: std::result::Result<Query<StopSearch>, QueryRejection>,
) -> Result<Json<StopsResponse>> {
    let Query(query) = query?;
    let stops = state.transit.search_stops(&query.q).await?;
    Ok(Json(StopsResponse { stops }))
}

/// Upcoming arrivals at a stop.
pub async fn arrivals(
    State(state): State<AppState>,
    Path(stop): Path<String>,
) -> Result<Json<ArrivalsResponse>> {
    let arrivals = state.transit.get_arrivals(&stop).await?;
    Ok(Json(ArrivalsResponse {
        stop: transit::normalize_stop_name(&stop),
        arrivals,
    }))
}

/// Route details.
pub async fn route_info(
    State(state): State<AppState>,
    Path(route): Path<String>,
) -> Result<Json<RouteInfo>> {
    state
        .transit
        .get_route_info(&route)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Route {} not found", route)))
}

/// Fare estimate between two stops.
pub async fn fare(
    State(state): State<AppState>,
    query: std::result::Result<Query<FareQuery>, QueryRejection>,
) -> Result<Json<FareInfo>> {
    let Query(query) = query?;
    let fare = state.transit.get_fare(&query.from, &query.to).await?;
    Ok(Json(fare))
}

//! City Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::parse_id;
use crate::application::dto::{CityQuery, CityResponse};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all cities
pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<CityResponse>>, AppError> {
    let cities = state.service.list_cities().await?;

    Ok(Json(cities.into_iter().map(CityResponse::from).collect()))
}

/// Get city by ID, optionally with its points of interest
pub async fn get_city(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    Query(query): Query<CityQuery>,
) -> Result<Json<CityResponse>, AppError> {
    let city_id = parse_id(&city_id, "city")?;

    let city = state
        .service
        .get_city(city_id, query.include_points_of_interest)
        .await?;

    Ok(Json(CityResponse::from(city)))
}

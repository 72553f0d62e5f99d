//! Point of Interest Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::{optional_body, parse_id};
use crate::application::dto::{PatchDocument, PointOfInterestRequest, PointOfInterestResponse};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn parse_ids(city_id: &str, poi_id: &str) -> Result<(i64, i64), AppError> {
    Ok((parse_id(city_id, "city")?, parse_id(poi_id, "point of interest")?))
}

/// List the points of interest of a city
pub async fn list_points_of_interest(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<PointOfInterestResponse>>, AppError> {
    let city_id = parse_id(&city_id, "city")?;

    let points = state.service.list_points_of_interest(city_id).await?;

    Ok(Json(points.into_iter().map(PointOfInterestResponse::from).collect()))
}

/// Get a point of interest
pub async fn get_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, poi_id)): Path<(String, String)>,
) -> Result<Json<PointOfInterestResponse>, AppError> {
    let (city_id, poi_id) = parse_ids(&city_id, &poi_id)?;

    let poi = state.service.get_point_of_interest(city_id, poi_id).await?;

    Ok(Json(PointOfInterestResponse::from(poi)))
}

/// Create a point of interest
///
/// Responds 201 with a `Location` header pointing at the new resource.
pub async fn create_point_of_interest(
    State(state): State<AppState>,
    Path(city_id): Path<String>,
    body: Result<Json<PointOfInterestRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let city_id = parse_id(&city_id, "city")?;
    let body = optional_body(body)?.map(Into::into);

    let created = state.service.create_point_of_interest(city_id, body).await?;

    let location = format!("/api/cities/{}/pointsofinterest/{}", city_id, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PointOfInterestResponse::from(created)),
    ))
}

/// Replace name and description of a point of interest
pub async fn replace_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, poi_id)): Path<(String, String)>,
    body: Result<Json<PointOfInterestRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let (city_id, poi_id) = parse_ids(&city_id, &poi_id)?;
    let body = optional_body(body)?.map(Into::into);

    state
        .service
        .replace_point_of_interest(city_id, poi_id, body)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Apply a JSON Patch document to a point of interest
pub async fn patch_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, poi_id)): Path<(String, String)>,
    body: Result<Json<PatchDocument>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let (city_id, poi_id) = parse_ids(&city_id, &poi_id)?;
    let patch = optional_body(body)?;

    state
        .service
        .patch_point_of_interest(city_id, poi_id, patch)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a point of interest
pub async fn delete_point_of_interest(
    State(state): State<AppState>,
    Path((city_id, poi_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (city_id, poi_id) = parse_ids(&city_id, &poi_id)?;

    state.service.delete_point_of_interest(city_id, poi_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

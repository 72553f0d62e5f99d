//! Response DTOs
//!
//! Data structures for API response bodies. Field names are camelCase.

use serde::Serialize;

use crate::application::services::{CityDto, PointOfInterestDto};

/// City response
///
/// The count and the collection are present only when points of interest
/// were requested.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_points_of_interest: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_of_interest: Option<Vec<PointOfInterestResponse>>,
}

impl From<CityDto> for CityResponse {
    fn from(city: CityDto) -> Self {
        let points_of_interest: Option<Vec<PointOfInterestResponse>> = city
            .points_of_interest
            .map(|points| points.into_iter().map(PointOfInterestResponse::from).collect());

        Self {
            id: city.id,
            name: city.name,
            description: city.description,
            number_of_points_of_interest: points_of_interest.as_ref().map(Vec::len),
            points_of_interest,
        }
    }
}

/// Point of interest response
#[derive(Debug, Serialize)]
pub struct PointOfInterestResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<PointOfInterestDto> for PointOfInterestResponse {
    fn from(poi: PointOfInterestDto) -> Self {
        Self {
            id: poi.id,
            name: poi.name,
            description: poi.description,
        }
    }
}

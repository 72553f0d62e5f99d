//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

use crate::domain::services::PatchOperation;
use crate::domain::PointOfInterestFields;

/// Create or replace point of interest request
///
/// Both fields are optional on the wire; a missing name is reported as a
/// validation error rather than a decoding error.
#[derive(Debug, Default, Deserialize)]
pub struct PointOfInterestRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<PointOfInterestRequest> for PointOfInterestFields {
    fn from(request: PointOfInterestRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}

/// JSON Patch document
pub type PatchDocument = Vec<PatchOperation>;

/// Query parameters for `GET /api/cities/{cityId}`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityQuery {
    #[serde(default)]
    pub include_points_of_interest: bool,
}

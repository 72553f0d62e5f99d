//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CityQuery, PatchDocument, PointOfInterestRequest};
pub use response::{CityResponse, PointOfInterestResponse};

//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CityInfoService**: city reads and point-of-interest create, replace, patch and delete

pub mod city_info_service;

pub use city_info_service::{
    CityDto, CityInfoError, CityInfoService, CityInfoServiceImpl, PointOfInterestDto,
    DELETED_SUBJECT,
};

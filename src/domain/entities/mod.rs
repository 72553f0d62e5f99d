//! # Domain Entities
//!
//! Core domain entities of the city catalog.
//!
//! - **City**: a seeded, read-only city that owns an ordered set of points of interest
//! - **PointOfInterest**: a child resource created, replaced, patched and deleted through the service
//! - **PointOfInterestFields**: the editable field set, used for bodies and patch working copies
//!
//! ## Store Traits
//!
//! The [`ResourceStore`] and [`StoreTransaction`] traits define data access.
//! They are implemented in the infrastructure layer (in-memory and PostgreSQL).

mod city;
mod point_of_interest;
mod resource_store;

pub use city::City;
pub use point_of_interest::{NewPointOfInterest, PointOfInterest, PointOfInterestFields, ValidFields};
pub use resource_store::{ResourceStore, StoreError, StoreTransaction};

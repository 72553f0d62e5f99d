//! Resource store contracts.
//!
//! The store owns durable state for cities and their points of interest.
//! Reads go straight to [`ResourceStore`]; every mutating sequence runs in a
//! [`StoreTransaction`] scoped to one city, which serializes writers on that
//! city and buffers changes until [`StoreTransaction::commit`].

use async_trait::async_trait;

use super::{City, NewPointOfInterest, PointOfInterest};

/// Storage failure.
///
/// The cause is opaque to callers: any failure surfaces as a single
/// "storage unavailable" condition. The message is kept for logging only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Read access and transaction factory for the city catalog.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// All cities ordered by name, without their points of interest.
    async fn list_cities(&self) -> Result<Vec<City>, StoreError>;

    /// Find a city. Points of interest are loaded only when requested.
    async fn get_city(
        &self,
        city_id: i64,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError>;

    /// Check whether a city exists.
    async fn city_exists(&self, city_id: i64) -> Result<bool, StoreError>;

    /// Points of interest of a city in insertion order.
    /// Empty when the city has none (or does not exist).
    async fn list_points_of_interest(&self, city_id: i64) -> Result<Vec<PointOfInterest>, StoreError>;

    /// Find a point of interest matching both the city and the id.
    async fn get_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
    ) -> Result<Option<PointOfInterest>, StoreError>;

    /// Start a unit of work on one city's points of interest.
    ///
    /// Holds the city's write lock until the transaction is committed or dropped.
    async fn begin(&self, city_id: i64) -> Result<Box<dyn StoreTransaction>, StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// A unit of work over the points of interest of a single city.
///
/// Mutations are buffered and become visible to readers only once `commit`
/// succeeds. Dropping the transaction discards pending changes.
#[async_trait]
pub trait StoreTransaction: Send {
    /// The city this transaction is scoped to.
    fn city_id(&self) -> i64;

    /// Read a point of interest of this city under the write lock.
    async fn get_point_of_interest(&mut self, poi_id: i64) -> Result<Option<PointOfInterest>, StoreError>;

    /// Assign a fresh id and stage the insert at the end of the city's collection.
    async fn add_point_of_interest(
        &mut self,
        point_of_interest: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError>;

    /// Stage an in-place overwrite of name and description.
    fn update_point_of_interest(&mut self, point_of_interest: &PointOfInterest);

    /// Stage removal from the parent's collection.
    fn delete_point_of_interest(&mut self, point_of_interest: &PointOfInterest);

    /// Persist all staged changes and release the city lock.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

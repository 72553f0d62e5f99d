//! City Info Service
//!
//! Orchestrates reads and point-of-interest mutations over the resource store.
//!
//! Every mutation runs in a store transaction scoped to one city. The order of
//! checks is fixed: body presence, city existence, point-of-interest existence
//! (under the city lock), patch, field validation, store mutation, commit.
//! The deletion notice is sent only after the transaction has been committed
//! and the city lock released.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::services::{apply_patch, into_valid, Notifier, PatchError, PatchOperation};
use crate::domain::{
    City, NewPointOfInterest, PointOfInterest, PointOfInterestFields, ResourceStore, StoreError,
    StoreTransaction,
};
use crate::infrastructure::metrics;
use crate::shared::error::FieldError;

/// Subject of the notice sent after a point of interest is deleted.
pub const DELETED_SUBJECT: &str = "Point of interest deleted.";

/// City info service trait
#[async_trait]
pub trait CityInfoService: Send + Sync {
    /// All cities ordered by name, without their points of interest
    async fn list_cities(&self) -> Result<Vec<CityDto>, CityInfoError>;

    /// Get a city, optionally with its points of interest
    async fn get_city(&self, city_id: i64, include_points_of_interest: bool) -> Result<CityDto, CityInfoError>;

    /// Points of interest of a city in insertion order
    async fn list_points_of_interest(&self, city_id: i64) -> Result<Vec<PointOfInterestDto>, CityInfoError>;

    /// Get a single point of interest
    async fn get_point_of_interest(&self, city_id: i64, poi_id: i64) -> Result<PointOfInterestDto, CityInfoError>;

    /// Create a point of interest and return it with its assigned id
    async fn create_point_of_interest(
        &self,
        city_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<PointOfInterestDto, CityInfoError>;

    /// Overwrite name and description of a point of interest
    async fn replace_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<(), CityInfoError>;

    /// Apply a patch document to a point of interest
    async fn patch_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
        patch: Option<Vec<PatchOperation>>,
    ) -> Result<(), CityInfoError>;

    /// Delete a point of interest and send the deletion notice
    async fn delete_point_of_interest(&self, city_id: i64, poi_id: i64) -> Result<(), CityInfoError>;
}

/// City data transfer object
///
/// `points_of_interest` is `None` when they were not requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub points_of_interest: Option<Vec<PointOfInterestDto>>,
}

impl CityDto {
    /// A city without its points of interest.
    pub fn summary(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            description: city.description,
            points_of_interest: None,
        }
    }

    /// A city with its points of interest.
    pub fn detailed(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            description: city.description,
            points_of_interest: Some(
                city.points_of_interest
                    .into_iter()
                    .map(PointOfInterestDto::from)
                    .collect(),
            ),
        }
    }
}

/// Point of interest data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointOfInterestDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<PointOfInterest> for PointOfInterestDto {
    fn from(poi: PointOfInterest) -> Self {
        Self {
            id: poi.id,
            name: poi.name,
            description: poi.description,
        }
    }
}

/// City info service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CityInfoError {
    #[error("City {0} not found")]
    CityNotFound(i64),

    #[error("Point of interest {poi_id} not found in city {city_id}")]
    PointOfInterestNotFound { city_id: i64, poi_id: i64 },

    #[error("{0}")]
    InvalidRequest(String),

    #[error("One or more validation errors occurred")]
    ValidationFailed(Vec<FieldError>),

    #[error("Storage unavailable")]
    StorageUnavailable,
}

impl From<StoreError> for CityInfoError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Resource store failure");
        CityInfoError::StorageUnavailable
    }
}

impl From<PatchError> for CityInfoError {
    fn from(err: PatchError) -> Self {
        CityInfoError::InvalidRequest(err.to_string())
    }
}

impl CityInfoError {
    /// Metric label for the outcome of a mutation that failed with this error.
    fn outcome(&self) -> &'static str {
        match self {
            CityInfoError::StorageUnavailable => "storage_unavailable",
            _ => "rejected",
        }
    }
}

/// Record a mutation outcome and pass the result through.
fn observe<T>(operation: &str, result: Result<T, CityInfoError>) -> Result<T, CityInfoError> {
    let outcome = match &result {
        Ok(_) => "committed",
        Err(e) => e.outcome(),
    };
    metrics::record_mutation(operation, outcome);
    result
}

/// CityInfoService implementation
pub struct CityInfoServiceImpl<S>
where
    S: ResourceStore + ?Sized,
{
    store: Arc<S>,
    notifier: Arc<dyn Notifier>,
}

impl<S> CityInfoServiceImpl<S>
where
    S: ResourceStore + ?Sized,
{
    pub fn new(store: Arc<S>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    async fn ensure_city(&self, city_id: i64) -> Result<(), CityInfoError> {
        if self.store.city_exists(city_id).await? {
            Ok(())
        } else {
            info!(city_id, "City not found");
            Err(CityInfoError::CityNotFound(city_id))
        }
    }

    /// Lock the city and load the point of interest inside the transaction.
    async fn begin_with_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
    ) -> Result<(Box<dyn StoreTransaction>, PointOfInterest), CityInfoError> {
        self.ensure_city(city_id).await?;

        let mut tx = self.store.begin(city_id).await?;
        match tx.get_point_of_interest(poi_id).await? {
            Some(poi) => Ok((tx, poi)),
            None => {
                info!(city_id, poi_id, "Point of interest not found");
                Err(CityInfoError::PointOfInterestNotFound { city_id, poi_id })
            }
        }
    }

    async fn create(
        &self,
        city_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<PointOfInterestDto, CityInfoError> {
        let fields = body.ok_or_else(|| {
            CityInfoError::InvalidRequest("A point of interest body is required".into())
        })?;
        self.ensure_city(city_id).await?;
        let fields = into_valid(fields).map_err(CityInfoError::ValidationFailed)?;

        let mut tx = self.store.begin(city_id).await?;
        let created = tx
            .add_point_of_interest(NewPointOfInterest::new(city_id, fields))
            .await?;
        tx.commit().await?;

        debug!(city_id, poi_id = created.id, "Point of interest created");
        Ok(PointOfInterestDto::from(created))
    }

    async fn replace(
        &self,
        city_id: i64,
        poi_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<(), CityInfoError> {
        let fields = body.ok_or_else(|| {
            CityInfoError::InvalidRequest("A point of interest body is required".into())
        })?;
        let (mut tx, mut poi) = self.begin_with_point_of_interest(city_id, poi_id).await?;
        let fields = into_valid(fields).map_err(CityInfoError::ValidationFailed)?;

        poi.apply(fields);
        tx.update_point_of_interest(&poi);
        tx.commit().await?;

        debug!(city_id, poi_id, "Point of interest replaced");
        Ok(())
    }

    async fn patch(
        &self,
        city_id: i64,
        poi_id: i64,
        patch: Option<Vec<PatchOperation>>,
    ) -> Result<(), CityInfoError> {
        let operations = patch.ok_or_else(|| {
            CityInfoError::InvalidRequest("A patch document is required".into())
        })?;
        let (mut tx, mut poi) = self.begin_with_point_of_interest(city_id, poi_id).await?;

        let patched = apply_patch(&poi.fields(), &operations)?;
        let fields = into_valid(patched).map_err(CityInfoError::ValidationFailed)?;

        poi.apply(fields);
        tx.update_point_of_interest(&poi);
        tx.commit().await?;

        debug!(city_id, poi_id, "Point of interest patched");
        Ok(())
    }

    async fn delete(&self, city_id: i64, poi_id: i64) -> Result<(), CityInfoError> {
        let (mut tx, poi) = self.begin_with_point_of_interest(city_id, poi_id).await?;
        tx.delete_point_of_interest(&poi);
        tx.commit().await?;

        debug!(city_id, poi_id, "Point of interest deleted");

        let body = format!(
            "Point of interest {} with id {} was deleted.",
            poi.name, poi.id
        );
        if let Err(e) = self.notifier.notify(DELETED_SUBJECT, &body) {
            warn!(city_id, poi_id, error = %e, "Deletion notice could not be sent");
        }
        Ok(())
    }
}

#[async_trait]
impl<S> CityInfoService for CityInfoServiceImpl<S>
where
    S: ResourceStore + ?Sized + 'static,
{
    async fn list_cities(&self) -> Result<Vec<CityDto>, CityInfoError> {
        let cities = self.store.list_cities().await?;
        Ok(cities.into_iter().map(CityDto::summary).collect())
    }

    async fn get_city(&self, city_id: i64, include_points_of_interest: bool) -> Result<CityDto, CityInfoError> {
        let city = self
            .store
            .get_city(city_id, include_points_of_interest)
            .await?
            .ok_or_else(|| {
                info!(city_id, "City not found");
                CityInfoError::CityNotFound(city_id)
            })?;

        Ok(if include_points_of_interest {
            CityDto::detailed(city)
        } else {
            CityDto::summary(city)
        })
    }

    async fn list_points_of_interest(&self, city_id: i64) -> Result<Vec<PointOfInterestDto>, CityInfoError> {
        self.ensure_city(city_id).await?;

        let points = self.store.list_points_of_interest(city_id).await?;
        Ok(points.into_iter().map(PointOfInterestDto::from).collect())
    }

    async fn get_point_of_interest(&self, city_id: i64, poi_id: i64) -> Result<PointOfInterestDto, CityInfoError> {
        self.ensure_city(city_id).await?;

        let poi = self
            .store
            .get_point_of_interest(city_id, poi_id)
            .await?
            .ok_or_else(|| {
                info!(city_id, poi_id, "Point of interest not found");
                CityInfoError::PointOfInterestNotFound { city_id, poi_id }
            })?;

        Ok(PointOfInterestDto::from(poi))
    }

    async fn create_point_of_interest(
        &self,
        city_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<PointOfInterestDto, CityInfoError> {
        observe("create", self.create(city_id, body).await)
    }

    async fn replace_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
        body: Option<PointOfInterestFields>,
    ) -> Result<(), CityInfoError> {
        observe("replace", self.replace(city_id, poi_id, body).await)
    }

    async fn patch_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
        patch: Option<Vec<PatchOperation>>,
    ) -> Result<(), CityInfoError> {
        observe("patch", self.patch(city_id, poi_id, patch).await)
    }

    async fn delete_point_of_interest(&self, city_id: i64, poi_id: i64) -> Result<(), CityInfoError> {
        observe("delete", self.delete(city_id, poi_id).await)
    }
}

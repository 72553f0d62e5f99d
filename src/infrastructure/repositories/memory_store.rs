//! In-Memory Resource Store
//!
//! Process-local implementation of the resource store contracts, seeded at
//! startup. Readers share a `RwLock` over the city list; writers on a city
//! are serialized by an async mutex per city, held for the lifetime of a
//! transaction.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::change_set::ChangeSet;
use super::seed::seed_cities;
use crate::domain::{
    City, NewPointOfInterest, PointOfInterest, ResourceStore, StoreError, StoreTransaction,
};

struct Inner {
    cities: RwLock<Vec<City>>,
    city_locks: DashMap<i64, Arc<Mutex<()>>>,
    next_id: AtomicI64,
    available: AtomicBool,
}

impl Inner {
    fn committed_point_of_interest(&self, city_id: i64, poi_id: i64) -> Option<PointOfInterest> {
        self.cities
            .read()
            .iter()
            .find(|c| c.id == city_id)
            .and_then(|c| c.point_of_interest(poi_id).cloned())
    }
}

/// In-memory resource store.
///
/// Point-of-interest ids come from a single counter shared by all cities,
/// starting after the highest seeded id. Ids are never handed out twice.
#[derive(Clone)]
pub struct InMemoryResourceStore {
    inner: Arc<Inner>,
}

impl InMemoryResourceStore {
    /// Create a store holding the given cities.
    pub fn new(cities: Vec<City>) -> Self {
        let max_id = cities
            .iter()
            .flat_map(|c| c.points_of_interest.iter().map(|p| p.id))
            .max()
            .unwrap_or(0);

        Self {
            inner: Arc::new(Inner {
                cities: RwLock::new(cities),
                city_locks: DashMap::new(),
                next_id: AtomicI64::new(max_id + 1),
                available: AtomicBool::new(true),
            }),
        }
    }

    /// Create a store holding the built-in catalog.
    pub fn seeded() -> Self {
        Self::new(seed_cities())
    }

    /// Simulate a storage outage: while unavailable, commits and pings fail.
    /// Reads keep serving the last committed state.
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::SeqCst);
    }

    fn city_lock(&self, city_id: i64) -> Arc<Mutex<()>> {
        self.inner.city_locks.entry(city_id).or_default().clone()
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn list_cities(&self) -> Result<Vec<City>, StoreError> {
        let mut cities: Vec<City> = self
            .inner
            .cities
            .read()
            .iter()
            .map(City::without_points_of_interest)
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn get_city(
        &self,
        city_id: i64,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError> {
        let cities = self.inner.cities.read();
        Ok(cities.iter().find(|c| c.id == city_id).map(|c| {
            if include_points_of_interest {
                c.clone()
            } else {
                c.without_points_of_interest()
            }
        }))
    }

    async fn city_exists(&self, city_id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.cities.read().iter().any(|c| c.id == city_id))
    }

    async fn list_points_of_interest(&self, city_id: i64) -> Result<Vec<PointOfInterest>, StoreError> {
        Ok(self
            .inner
            .cities
            .read()
            .iter()
            .find(|c| c.id == city_id)
            .map(|c| c.points_of_interest.clone())
            .unwrap_or_default())
    }

    async fn get_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
    ) -> Result<Option<PointOfInterest>, StoreError> {
        Ok(self.inner.committed_point_of_interest(city_id, poi_id))
    }

    async fn begin(&self, city_id: i64) -> Result<Box<dyn StoreTransaction>, StoreError> {
        let guard = self.city_lock(city_id).lock_owned().await;
        Ok(Box::new(InMemoryTransaction {
            inner: self.inner.clone(),
            city_id,
            changes: ChangeSet::new(),
            _guard: guard,
        }))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.inner.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is offline".into()))
        }
    }
}

/// Unit of work over one city of an [`InMemoryResourceStore`].
pub struct InMemoryTransaction {
    inner: Arc<Inner>,
    city_id: i64,
    changes: ChangeSet,
    _guard: OwnedMutexGuard<()>,
}

#[async_trait]
impl StoreTransaction for InMemoryTransaction {
    fn city_id(&self) -> i64 {
        self.city_id
    }

    async fn get_point_of_interest(&mut self, poi_id: i64) -> Result<Option<PointOfInterest>, StoreError> {
        let committed = self.inner.committed_point_of_interest(self.city_id, poi_id);
        Ok(self.changes.overlay(committed, poi_id))
    }

    async fn add_point_of_interest(
        &mut self,
        point_of_interest: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError> {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let created = NewPointOfInterest {
            city_id: self.city_id,
            ..point_of_interest
        }
        .with_id(id);
        self.changes.insert(created.clone());
        Ok(created)
    }

    fn update_point_of_interest(&mut self, point_of_interest: &PointOfInterest) {
        self.changes.update(point_of_interest.clone());
    }

    fn delete_point_of_interest(&mut self, point_of_interest: &PointOfInterest) {
        self.changes.delete(point_of_interest.id);
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        if !self.inner.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store is offline".into()));
        }
        if self.changes.is_empty() {
            return Ok(());
        }

        let mut cities = self.inner.cities.write();
        let city = cities
            .iter_mut()
            .find(|c| c.id == self.city_id)
            .ok_or_else(|| StoreError::Unavailable(format!("city {} vanished", self.city_id)))?;
        self.changes.apply_to(&mut city.points_of_interest);
        Ok(())
    }
}

//! PostgreSQL Resource Store
//!
//! Relational implementation of the resource store contracts.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE cities (
//!     id          BIGSERIAL PRIMARY KEY,
//!     name        VARCHAR(50) NOT NULL,
//!     description VARCHAR(200)
//! );
//!
//! CREATE TABLE points_of_interest (
//!     id          BIGSERIAL PRIMARY KEY,
//!     city_id     BIGINT NOT NULL REFERENCES cities(id) ON DELETE CASCADE,
//!     name        VARCHAR(50) NOT NULL,
//!     description VARCHAR(200)
//! );
//! ```
//!
//! A transaction locks its city row with `SELECT ... FOR UPDATE`, so writers
//! on the same city queue behind each other while readers are unaffected.
//! Staged changes are flushed in order inside the transaction at commit.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::change_set::{ChangeSet, PendingChange};
use crate::domain::{
    City, NewPointOfInterest, PointOfInterest, ResourceStore, StoreError, StoreTransaction,
};

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

/// Database row representation matching the cities table schema.
#[derive(Debug, sqlx::FromRow)]
struct CityRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl CityRow {
    fn into_city(self) -> City {
        City {
            id: self.id,
            name: self.name,
            description: self.description,
            points_of_interest: Vec::new(),
        }
    }
}

/// Database row representation matching the points_of_interest table schema.
#[derive(Debug, sqlx::FromRow)]
struct PointOfInterestRow {
    id: i64,
    city_id: i64,
    name: String,
    description: Option<String>,
}

impl PointOfInterestRow {
    fn into_point_of_interest(self) -> PointOfInterest {
        PointOfInterest {
            id: self.id,
            city_id: self.city_id,
            name: self.name,
            description: self.description,
        }
    }
}

/// PostgreSQL resource store implementation.
#[derive(Clone)]
pub struct PgResourceStore {
    pool: PgPool,
}

impl PgResourceStore {
    /// Create a new PgResourceStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    async fn list_cities(&self) -> Result<Vec<City>, StoreError> {
        let rows = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, name, description
            FROM cities
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CityRow::into_city).collect())
    }

    async fn get_city(
        &self,
        city_id: i64,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, StoreError> {
        let row = sqlx::query_as::<_, CityRow>(
            r#"
            SELECT id, name, description
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(city_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut city = row.into_city();
        if include_points_of_interest {
            city.points_of_interest = self.list_points_of_interest(city_id).await?;
        }

        Ok(Some(city))
    }

    async fn city_exists(&self, city_id: i64) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cities WHERE id = $1)")
            .bind(city_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn list_points_of_interest(&self, city_id: i64) -> Result<Vec<PointOfInterest>, StoreError> {
        let rows = sqlx::query_as::<_, PointOfInterestRow>(
            r#"
            SELECT id, city_id, name, description
            FROM points_of_interest
            WHERE city_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(city_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PointOfInterestRow::into_point_of_interest).collect())
    }

    async fn get_point_of_interest(
        &self,
        city_id: i64,
        poi_id: i64,
    ) -> Result<Option<PointOfInterest>, StoreError> {
        let row = sqlx::query_as::<_, PointOfInterestRow>(
            r#"
            SELECT id, city_id, name, description
            FROM points_of_interest
            WHERE city_id = $1 AND id = $2
            "#,
        )
        .bind(city_id)
        .bind(poi_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PointOfInterestRow::into_point_of_interest))
    }

    async fn begin(&self, city_id: i64) -> Result<Box<dyn StoreTransaction>, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT id FROM cities WHERE id = $1 FOR UPDATE")
            .bind(city_id)
            .fetch_optional(&mut *tx)
            .await?;

        Ok(Box::new(PgTransaction {
            tx,
            city_id,
            changes: ChangeSet::new(),
        }))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Unit of work over one city, backed by a database transaction.
pub struct PgTransaction {
    tx: Transaction<'static, Postgres>,
    city_id: i64,
    changes: ChangeSet,
}

#[async_trait]
impl StoreTransaction for PgTransaction {
    fn city_id(&self) -> i64 {
        self.city_id
    }

    async fn get_point_of_interest(&mut self, poi_id: i64) -> Result<Option<PointOfInterest>, StoreError> {
        let row = sqlx::query_as::<_, PointOfInterestRow>(
            r#"
            SELECT id, city_id, name, description
            FROM points_of_interest
            WHERE city_id = $1 AND id = $2
            "#,
        )
        .bind(self.city_id)
        .bind(poi_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        let committed = row.map(PointOfInterestRow::into_point_of_interest);
        Ok(self.changes.overlay(committed, poi_id))
    }

    async fn add_point_of_interest(
        &mut self,
        point_of_interest: NewPointOfInterest,
    ) -> Result<PointOfInterest, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "SELECT nextval(pg_get_serial_sequence('points_of_interest', 'id'))",
        )
        .fetch_one(&mut *self.tx)
        .await?;

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
        let PgTransaction {
            mut tx,
            city_id,
            changes,
        } = *self;

        for change in changes.into_changes() {
            match change {
                PendingChange::Insert(poi) => {
                    sqlx::query(
                        r#"
                        INSERT INTO points_of_interest (id, city_id, name, description)
                        VALUES ($1, $2, $3, $4)
                        "#,
                    )
                    .bind(poi.id)
                    .bind(city_id)
                    .bind(&poi.name)
                    .bind(&poi.description)
                    .execute(&mut *tx)
                    .await?;
                }
                PendingChange::Update(poi) => {
                    sqlx::query(
                        r#"
                        UPDATE points_of_interest
                        SET name = $3, description = $4
                        WHERE id = $1 AND city_id = $2
                        "#,
                    )
                    .bind(poi.id)
                    .bind(city_id)
                    .bind(&poi.name)
                    .bind(&poi.description)
                    .execute(&mut *tx)
                    .await?;
                }
                PendingChange::Delete(poi_id) => {
                    sqlx::query("DELETE FROM points_of_interest WHERE id = $1 AND city_id = $2")
                        .bind(poi_id)
                        .bind(city_id)
                        .execute(&mut *tx)
                        .await?;
                }
            }
        }

        tx.commit().await?;
        Ok(())
    }
}

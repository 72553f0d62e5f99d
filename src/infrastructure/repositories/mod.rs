//! Resource Store Implementations
//!
//! Concrete implementations of the store traits defined in the domain layer.
//! Both backends honour the same contract; which one runs is chosen at
//! startup from configuration.
//!
//! ## Available Stores
//!
//! - **InMemoryResourceStore** - process-local catalog seeded with built-in cities
//! - **PgResourceStore** - PostgreSQL catalog (`cities`, `points_of_interest` tables)
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::domain::ResourceStore;
//! use crate::infrastructure::repositories::{InMemoryResourceStore, PgResourceStore};
//!
//! let memory: Arc<dyn ResourceStore> = Arc::new(InMemoryResourceStore::seeded());
//! let postgres: Arc<dyn ResourceStore> = Arc::new(PgResourceStore::new(pool));
//! ```

pub mod change_set;
pub mod memory_store;
pub mod pg_store;
pub mod seed;

pub use memory_store::{InMemoryResourceStore, InMemoryTransaction};
pub use pg_store::{PgResourceStore, PgTransaction};
pub use seed::seed_cities;

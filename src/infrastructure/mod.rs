//! Infrastructure Layer
//!
//! Contains implementations for external collaborators:
//! - Resource stores (in-memory and PostgreSQL)
//! - Database connection pool
//! - Mail notifier
//! - Prometheus metrics

pub mod database;
pub mod mail;
pub mod metrics;
pub mod repositories;

//! # City Info Library
//!
//! This crate provides a catalog of cities and their points of interest:
//! - RESTful HTTP API endpoints
//! - Per-city transactional mutations with field validation and JSON Patch
//! - An in-memory store seeded at startup, or PostgreSQL
//! - A notifier told about every deleted point of interest
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities, store traits, validation rules and the patch engine
//! - **Application Layer**: The city info service and DTOs
//! - **Infrastructure Layer**: Store, database, mail and metrics implementations
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! city_info/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, store traits and domain services
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Store backends, mail and metrics
//! +-- presentation/   HTTP routes and handlers
//! +-- shared/         Common utilities (errors, validation helpers)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;

//! # Domain Layer
//!
//! The domain layer contains the core rules of the city catalog.
//! It is independent of any transport framework or storage technology.
//!
//! ## Structure
//!
//! - **entities**: City, PointOfInterest and the store contracts
//! - **services**: validation rules, the patch engine and the notifier contract
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Store traits define data access contracts
//! - Validation always runs on the final proposed values, after any patch

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;

//! # Domain Services
//!
//! Pure business rules that operate on domain entities without touching
//! storage or transport.
//!
//! ## Services
//!
//! - **Validation rules**: field and cross-field checks on proposed point-of-interest values
//! - **Patch engine**: applies a JSON Patch style document to a copy of the editable fields
//! - **Notification**: the contract for the outbound "point of interest deleted" notice

pub mod notification;
pub mod patch_service;
pub mod validation_service;

pub use notification::{Notifier, NotifyError};
pub use patch_service::{apply_patch, FieldPath, PatchError, PatchOperation};
pub use validation_service::{into_valid, validate, validate_fields};

#[cfg(test)]
pub use notification::MockNotifier;

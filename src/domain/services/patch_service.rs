//! Patch engine for partial point-of-interest updates.
//!
//! A patch document is an ordered list of field-level operations in JSON
//! Patch form:
//!
//! ```json
//! [
//!   { "op": "test",    "path": "/name",        "value": "Central Park" },
//!   { "op": "replace", "path": "/description", "value": "The biggest park" }
//! ]
//! ```
//!
//! Operations are applied in order to a copy of the target. The first
//! failing operation aborts the whole patch and the copy is discarded, so
//! the caller's record is never partially modified.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::PointOfInterestFields;

/// Patchable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Name,
    Description,
}

impl FromStr for FieldPath {
    type Err = PatchError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let field = path.strip_prefix('/').unwrap_or(path);
        if field.eq_ignore_ascii_case("name") {
            Ok(FieldPath::Name)
        } else if field.eq_ignore_ascii_case("description") {
            Ok(FieldPath::Description)
        } else {
            Err(PatchError::UnknownPath(path.to_string()))
        }
    }
}

/// A single field-level patch instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    /// Set a field to a string value, or clear it with `null`.
    #[serde(rename = "replace", alias = "add")]
    Set { path: String, value: Value },

    /// Clear a field.
    Remove { path: String },

    /// Require the field's current value to equal `value`.
    Test { path: String, value: Value },
}

impl PatchOperation {
    pub fn set(path: impl Into<String>, value: impl Into<Value>) -> Self {
        PatchOperation::Set {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        PatchOperation::Remove { path: path.into() }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        PatchOperation::Test {
            path: path.into(),
            value: value.into(),
        }
    }

    /// The raw path this operation addresses.
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Set { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Test { path, .. } => path,
        }
    }
}

/// Reasons a patch document could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("The target location specified by path '{0}' was not found")]
    UnknownPath(String),

    #[error("The value for path '{0}' must be a string or null")]
    InvalidValue(String),

    #[error("The current value at path '{0}' is not equal to the test value")]
    TestFailed(String),
}

/// Apply `operations` to a copy of `target`.
///
/// Returns the patched copy, or the first failure. `target` is never modified.
pub fn apply_patch(
    target: &PointOfInterestFields,
    operations: &[PatchOperation],
) -> Result<PointOfInterestFields, PatchError> {
    let mut working = target.clone();
    for operation in operations {
        apply_operation(&mut working, operation)?;
    }
    Ok(working)
}

fn apply_operation(
    fields: &mut PointOfInterestFields,
    operation: &PatchOperation,
) -> Result<(), PatchError> {
    let path = operation.path();
    let slot = match path.parse::<FieldPath>()? {
        FieldPath::Name => &mut fields.name,
        FieldPath::Description => &mut fields.description,
    };

    match operation {
        PatchOperation::Set { value, .. } => {
            *slot = string_value(path, value)?;
        }
        PatchOperation::Remove { .. } => {
            *slot = None;
        }
        PatchOperation::Test { value, .. } => {
            if *slot != string_value(path, value)? {
                return Err(PatchError::TestFailed(path.to_string()));
            }
        }
    }

    Ok(())
}

fn string_value(path: &str, value: &Value) -> Result<Option<String>, PatchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(PatchError::InvalidValue(path.to_string())),
    }
}

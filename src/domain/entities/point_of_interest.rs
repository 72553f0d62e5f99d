//! Point of interest entity and its editable field set.
//!
//! Maps to the `points_of_interest` table in the database schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A point of interest owned by exactly one city.
///
/// Maps to the `points_of_interest` table:
/// - id: INTEGER PRIMARY KEY (global sequence)
/// - city_id: INTEGER NOT NULL REFERENCES cities(id) ON DELETE CASCADE
/// - name: VARCHAR(50) NOT NULL
/// - description: VARCHAR(200) NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Identifier, unique across all cities
    pub id: i64,

    /// Owning city (lookup relation only)
    pub city_id: i64,

    /// Point of interest name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,
}

impl PointOfInterest {
    pub fn new(id: i64, city_id: i64, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id,
            city_id,
            name: name.into(),
            description: description.map(str::to_string),
        }
    }

    /// The editable fields of this point of interest, as a detached copy.
    pub fn fields(&self) -> PointOfInterestFields {
        PointOfInterestFields {
            name: Some(self.name.clone()),
            description: self.description.clone(),
        }
    }

    /// Overwrite name and description with validated values.
    pub fn apply(&mut self, fields: ValidFields) {
        self.name = fields.name;
        self.description = fields.description;
    }
}

/// Proposed values for the editable fields of a point of interest.
///
/// Used for create and replace bodies and as the working copy a patch
/// document is applied to. Fields are optional so that a missing name is
/// reported as a violation instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PointOfInterestFields {
    #[validate(
        required(message = "You should provide a name value."),
        length(min = 1, max = 50, message = "Name must be 1-50 characters")
    )]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}

impl PointOfInterestFields {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            description: description.map(str::to_string),
        }
    }
}

/// Field values that passed every validation rule.
///
/// Only produced by `validation_service::into_valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFields {
    pub name: String,
    pub description: Option<String>,
}

/// A point of interest that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPointOfInterest {
    pub city_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl NewPointOfInterest {
    pub fn new(city_id: i64, fields: ValidFields) -> Self {
        Self {
            city_id,
            name: fields.name,
            description: fields.description,
        }
    }

    /// Attach the store-assigned id.
    pub fn with_id(self, id: i64) -> PointOfInterest {
        PointOfInterest {
            id,
            city_id: self.city_id,
            name: self.name,
            description: self.description,
        }
    }
}

//! City entity.
//!
//! Maps to the `cities` table in the database schema.

use serde::{Deserialize, Serialize};

use super::PointOfInterest;

/// Represents a city in the catalog.
///
/// A city owns its points of interest: none exists without a parent city.
///
/// Maps to the `cities` table:
/// - id: INTEGER PRIMARY KEY
/// - name: VARCHAR(50) NOT NULL
/// - description: VARCHAR(200) NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Store-assigned identifier, immutable once set
    pub id: i64,

    /// City name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Owned points of interest, in insertion order.
    /// Empty when the city was loaded without its children.
    pub points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Create a city with no points of interest.
    pub fn new(id: i64, name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.map(str::to_string),
            points_of_interest: Vec::new(),
        }
    }

    /// Attach points of interest, rewriting their parent reference to this city.
    pub fn with_points_of_interest(mut self, points: Vec<PointOfInterest>) -> Self {
        let city_id = self.id;
        self.points_of_interest = points
            .into_iter()
            .map(|mut poi| {
                poi.city_id = city_id;
                poi
            })
            .collect();
        self
    }

    /// Copy of this city without its children.
    pub fn without_points_of_interest(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            points_of_interest: Vec::new(),
        }
    }

    /// Find a point of interest owned by this city.
    pub fn point_of_interest(&self, poi_id: i64) -> Option<&PointOfInterest> {
        self.points_of_interest.iter().find(|p| p.id == poi_id)
    }
}

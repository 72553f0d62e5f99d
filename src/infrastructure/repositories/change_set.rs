//! Staged point-of-interest changes.
//!
//! Both store backends buffer mutations here until commit, so a discarded
//! transaction never leaks partial state.

use crate::domain::PointOfInterest;

/// A single staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingChange {
    Insert(PointOfInterest),
    Update(PointOfInterest),
    Delete(i64),
}

/// Ordered list of staged mutations for one city.
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Vec<PendingChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, point_of_interest: PointOfInterest) {
        self.changes.push(PendingChange::Insert(point_of_interest));
    }

    pub fn update(&mut self, point_of_interest: PointOfInterest) {
        self.changes.push(PendingChange::Update(point_of_interest));
    }

    pub fn delete(&mut self, poi_id: i64) {
        self.changes.push(PendingChange::Delete(poi_id));
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// View of one point of interest with the staged changes layered on top
    /// of its committed state.
    pub fn overlay(&self, committed: Option<PointOfInterest>, poi_id: i64) -> Option<PointOfInterest> {
        self.changes.iter().fold(committed, |current, change| match change {
            PendingChange::Insert(poi) | PendingChange::Update(poi) if poi.id == poi_id => {
                Some(poi.clone())
            }
            PendingChange::Delete(id) if *id == poi_id => None,
            _ => current,
        })
    }

    /// Apply the staged changes, in order, to a city's collection.
    pub fn apply_to(&self, points: &mut Vec<PointOfInterest>) {
        for change in &self.changes {
            match change {
                PendingChange::Insert(poi) => points.push(poi.clone()),
                PendingChange::Update(poi) => {
                    if let Some(existing) = points.iter_mut().find(|p| p.id == poi.id) {
                        existing.name = poi.name.clone();
                        existing.description = poi.description.clone();
                    }
                }
                PendingChange::Delete(poi_id) => points.retain(|p| p.id != *poi_id),
            }
        }
    }

    pub fn into_changes(self) -> Vec<PendingChange> {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn poi(id: i64, name: &str) -> PointOfInterest {
        PointOfInterest::new(id, 1, name, None)
    }

    #[test]
    fn test_overlay_without_changes_returns_committed() {
        let changes = ChangeSet::new();
        assert_eq!(changes.overlay(Some(poi(1, "A")), 1), Some(poi(1, "A")));
    }

    #[test]
    fn test_overlay_sees_staged_update_and_delete() {
        let mut changes = ChangeSet::new();
        changes.update(poi(1, "B"));
        assert_eq!(changes.overlay(Some(poi(1, "A")), 1), Some(poi(1, "B")));

        changes.delete(1);
        assert_eq!(changes.overlay(Some(poi(1, "A")), 1), None);
    }

    #[test]
    fn test_overlay_ignores_other_ids() {
        let mut changes = ChangeSet::new();
        changes.delete(2);
        assert_eq!(changes.overlay(Some(poi(1, "A")), 1), Some(poi(1, "A")));
    }

    #[test]
    fn test_apply_to_preserves_insertion_order() {
        let mut points = vec![poi(1, "A"), poi(2, "B")];
        let mut changes = ChangeSet::new();
        changes.insert(poi(5, "E"));
        changes.update(poi(1, "A2"));
        changes.delete(2);

        changes.apply_to(&mut points);

        assert_eq!(points, vec![poi(1, "A2"), poi(5, "E")]);
    }
}

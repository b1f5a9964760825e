//! Pre-mount registry for itinerary activities.
//!
//! The map and detail screens render faster when their activity views
//! are mounted ahead of navigation. This service tracks which activity
//! ids have been pre-mounted so the UI layer can skip re-mounting. The
//! registry is in-memory only and shared across call sites via `Clone`.

use shared::{GeneratedItinerary, ItineraryActivity};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct PreMountService {
    pre_mounted: Arc<Mutex<HashSet<String>>>,
}

impl PreMountService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single activity as pre-mounted.
    pub fn pre_mount_activity(&self, activity: &ItineraryActivity) {
        self.pre_mounted.lock().unwrap().insert(activity.id.clone());
    }

    /// Replace the registry with every activity of an itinerary.
    pub fn pre_mount_all(&self, itinerary: &GeneratedItinerary) {
        let ids: HashSet<String> = itinerary
            .days
            .iter()
            .flat_map(|day| day.activities.iter())
            .map(|activity| activity.id.clone())
            .collect();
        *self.pre_mounted.lock().unwrap() = ids;
    }

    pub fn is_pre_mounted(&self, activity_id: &str) -> bool {
        self.pre_mounted.lock().unwrap().contains(activity_id)
    }

    pub fn clear(&self) {
        self.pre_mounted.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::itinerary_service::ItineraryService;

    #[test]
    fn test_pre_mount_single_activity() {
        let service = PreMountService::new();
        let itinerary = ItineraryService::new(Catalog::bundled())
            .generate_itinerary("accra", "History", "2")
            .unwrap();
        let activity = &itinerary.days[0].activities[0];

        assert!(!service.is_pre_mounted(&activity.id));
        service.pre_mount_activity(activity);
        assert!(service.is_pre_mounted(&activity.id));
    }

    #[test]
    fn test_pre_mount_all_replaces_registry() {
        let service = PreMountService::new();
        let generator = ItineraryService::new(Catalog::bundled());
        let itinerary = generator.generate_itinerary("accra", "History", "2").unwrap();

        service.pre_mount_all(&itinerary);
        for day in &itinerary.days {
            for activity in &day.activities {
                assert!(service.is_pre_mounted(&activity.id));
            }
        }

        // A fresh itinerary replaces the set rather than extending it
        let other = generator.generate_itinerary("kumasi", "Culture", "1").unwrap();
        service.pre_mount_all(&other);
        assert!(!service.is_pre_mounted(&itinerary.days[0].activities[0].id));
    }

    #[test]
    fn test_clear_empties_registry() {
        let service = PreMountService::new();
        let itinerary = ItineraryService::new(Catalog::bundled())
            .generate_itinerary("cape-coast", "Nature", "1")
            .unwrap();

        service.pre_mount_all(&itinerary);
        service.clear();
        assert!(!service.is_pre_mounted(&itinerary.days[0].activities[0].id));
    }

    #[test]
    fn test_clones_share_state() {
        let service = PreMountService::new();
        let clone = service.clone();
        let itinerary = ItineraryService::new(Catalog::bundled())
            .generate_itinerary("kumasi", "History", "1")
            .unwrap();

        service.pre_mount_all(&itinerary);
        assert!(clone.is_pre_mounted(&itinerary.days[0].activities[0].id));
    }
}

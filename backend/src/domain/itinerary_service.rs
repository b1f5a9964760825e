//! Itinerary generation facade.
//!
//! Single entry point the UI layer calls: resolve the destination,
//! parse the requested duration, select and rank locations, schedule
//! them across days, and hand back the assembled itinerary. Expected
//! failures (unknown destination, bad duration text) come back as
//! `None`; generation itself never writes anywhere, so persisting a
//! result is a separate, explicit caller action.

use crate::domain::catalog::Catalog;
use crate::domain::models::PreferencesError;
use crate::domain::scheduler::Scheduler;
use crate::domain::selector;
use log::{info, warn};
use shared::{Destination, GeneratedItinerary, LocationType, TravelPreferences};

/// Orchestrates catalog lookup, selection and scheduling.
pub struct ItineraryService {
    catalog: Catalog,
    scheduler: Scheduler,
}

impl ItineraryService {
    /// Create a service over a catalog with the default scheduler.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_scheduler(catalog, Scheduler::new())
    }

    /// Create a service with an explicit scheduler (pinned clock or
    /// restaurant picker).
    pub fn with_scheduler(catalog: Catalog, scheduler: Scheduler) -> Self {
        Self { catalog, scheduler }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check a request without generating, for UI-side form validation.
    pub fn validate_preferences(
        &self,
        destination_id: &str,
        duration: &str,
    ) -> Result<(), PreferencesError> {
        self.resolve_request(destination_id, duration).map(|_| ())
    }

    fn resolve_request(
        &self,
        destination_id: &str,
        duration: &str,
    ) -> Result<(&Destination, u32), PreferencesError> {
        let destination = self
            .catalog
            .resolve(destination_id)
            .ok_or_else(|| PreferencesError::UnknownDestination(destination_id.to_string()))?;

        let total_days = duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|days| *days > 0)
            .ok_or_else(|| PreferencesError::InvalidDuration(duration.to_string()))?;

        Ok((destination, total_days))
    }

    /// Generate a day-by-day itinerary for a destination.
    ///
    /// Locations are filtered by interest (falling back to all
    /// attractions when nothing matches), ranked by rating, capped at
    /// three per trip day, distributed across days, and topped up with
    /// a restaurant stop per day with room. Returns `None` for an
    /// unknown destination id or a duration that is not a positive
    /// whole number of days.
    pub fn generate_itinerary(
        &self,
        destination_id: &str,
        interests: &str,
        duration: &str,
    ) -> Option<GeneratedItinerary> {
        let (destination, total_days) = match self.resolve_request(destination_id, duration) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!("Rejecting itinerary request: {}", err);
                return None;
            }
        };

        info!(
            "🗺️ Generating {}-day itinerary for {} with interest '{}'",
            total_days, destination.name, interests
        );

        let mut selected = selector::filter_by_interest(&destination.locations, interests);
        if selected.is_empty() {
            info!(
                "No locations matched interest '{}' in {}, falling back to attractions",
                interests, destination.name
            );
            selected = destination
                .locations
                .iter()
                .filter(|l| l.location_type == LocationType::Attraction)
                .cloned()
                .collect();
        }

        let mut ranked = selector::rank_by_rating(selected);
        ranked.truncate(3 * total_days as usize);

        let days = self.scheduler.distribute_across_days(&ranked, total_days);
        let days = self.scheduler.add_meal_stops(days, &destination.locations);

        Some(GeneratedItinerary {
            destination: destination.clone(),
            days,
            total_days,
            preferences: TravelPreferences {
                interests: interests.to_string(),
                duration: duration.to_string(),
            },
        })
    }
}

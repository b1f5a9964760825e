use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Kind of place a catalog entry represents.
///
/// Serialized lowercase so catalog files read naturally
/// (`type: attraction`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Attraction,
    Restaurant,
    Hotel,
    Activity,
}

/// A single visitable place within a destination's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable id, unique within its destination
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Free-text interest tags, e.g. "History", "Culture"
    pub category: Vec<String>,
    pub description: String,
    /// Conventionally in [0, 5]
    pub rating: f64,
    /// Estimated visit length in hours
    pub duration: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A destination and its authored catalog of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Authored order; only a stable iteration order before ranking
    pub locations: Vec<Location>,
}

/// The preferences an itinerary was generated from, echoed back in
/// results and carried on persisted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub interests: String,
    pub duration: String,
}

/// A scheduled stop on a specific day of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryActivity {
    /// Location id, or "{location_id}-day-{n}" for day-specific meal stops
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: LocationType,
    pub category: Vec<String>,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub duration: f64,
    pub rating: f64,
    /// Label like "Morning (9:00-12:00)"
    pub time_slot: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ItineraryActivity {
    /// Build an activity from a catalog location and a time slot label.
    pub fn from_location(location: &Location, time_slot: impl Into<String>) -> Self {
        Self {
            id: location.id.clone(),
            name: location.name.clone(),
            activity_type: location.location_type,
            category: location.category.clone(),
            description: location.description.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            duration: location.duration,
            rating: location.rating,
            time_slot: time_slot.into(),
            image_url: location.image_url.clone(),
        }
    }
}

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    /// Human-readable calendar date, e.g. "Monday, August 10, 2026"
    pub date: String,
    pub activities: Vec<ItineraryActivity>,
    /// Always the sum of the activities' durations, in hours
    pub total_duration: f64,
}

impl ItineraryDay {
    /// Append an activity, keeping `total_duration` in sync.
    pub fn push_activity(&mut self, activity: ItineraryActivity) {
        self.total_duration += activity.duration;
        self.activities.push(activity);
    }
}

/// The result of one itinerary generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItinerary {
    pub destination: Destination,
    pub days: Vec<ItineraryDay>,
    pub total_days: u32,
    pub preferences: TravelPreferences,
}

/// A persisted itinerary record owned by a user.
///
/// This is the flattened document the storage layer works with; the
/// generation core has no knowledge of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedItinerary {
    /// Record id in format "itinerary::{user_id}_{epoch_millis}"
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Destination display name
    pub destination: String,
    /// Trip start (RFC 3339)
    pub start_date: String,
    /// Trip end (RFC 3339)
    pub end_date: String,
    pub total_days: u32,
    pub preferences: TravelPreferences,
    pub days: Vec<ItineraryDay>,
    pub created_at: String,
    pub updated_at: String,
    pub is_public: bool,
    pub likes: u32,
    pub tags: Vec<String>,
}

impl SavedItinerary {
    pub fn generate_id(user_id: &str, now_millis: i64) -> String {
        format!("itinerary::{}_{}", user_id, now_millis)
    }

    /// Convert a generation result into a persistable record for a user.
    ///
    /// The trip is dated from now: start = today, end = today plus
    /// (total_days - 1). New records are private with zero likes and a
    /// single tag derived from the interest text.
    pub fn from_generated(user_id: &str, itinerary: &GeneratedItinerary) -> Self {
        let now = Utc::now();
        let end_date = now + Duration::days(itinerary.total_days as i64 - 1);

        Self {
            id: Self::generate_id(user_id, now.timestamp_millis()),
            user_id: user_id.to_string(),
            title: format!("{} Trip", itinerary.destination.name),
            destination: itinerary.destination.name.clone(),
            start_date: now.to_rfc3339(),
            end_date: end_date.to_rfc3339(),
            total_days: itinerary.total_days,
            preferences: TravelPreferences {
                interests: itinerary.preferences.interests.clone(),
                duration: format!("{} days", itinerary.total_days),
            },
            days: itinerary.days.clone(),
            created_at: now.to_rfc3339(),
            updated_at: now.to_rfc3339(),
            is_public: false,
            likes: 0,
            tags: vec![itinerary.preferences.interests.to_lowercase()],
        }
    }
}

/// A label/value pair for picker-style option lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_itinerary() -> GeneratedItinerary {
        let location = Location {
            id: "castle".to_string(),
            name: "Old Castle".to_string(),
            latitude: 5.1,
            longitude: -1.2,
            location_type: LocationType::Attraction,
            category: vec!["History".to_string()],
            description: "A castle".to_string(),
            rating: 4.5,
            duration: 2.0,
            image_url: None,
        };
        let mut day = ItineraryDay {
            day: 1,
            date: "Monday, August 10, 2026".to_string(),
            activities: Vec::new(),
            total_duration: 0.0,
        };
        day.push_activity(ItineraryActivity::from_location(&location, "Morning (9:00-12:00)"));
        GeneratedItinerary {
            destination: Destination {
                id: "cape-coast".to_string(),
                name: "Cape Coast".to_string(),
                country: "Ghana".to_string(),
                latitude: 5.1053,
                longitude: -1.2466,
                locations: vec![location],
            },
            days: vec![day],
            total_days: 3,
            preferences: TravelPreferences {
                interests: "History".to_string(),
                duration: "3".to_string(),
            },
        }
    }

    #[test]
    fn test_push_activity_keeps_total_duration_in_sync() {
        let itinerary = sample_itinerary();
        let day = &itinerary.days[0];
        assert_eq!(day.activities.len(), 1);
        assert_eq!(day.total_duration, 2.0);
    }

    #[test]
    fn test_from_generated_maps_fields() {
        let itinerary = sample_itinerary();
        let saved = SavedItinerary::from_generated("user-1", &itinerary);

        assert!(saved.id.starts_with("itinerary::user-1_"));
        assert_eq!(saved.title, "Cape Coast Trip");
        assert_eq!(saved.destination, "Cape Coast");
        assert_eq!(saved.total_days, 3);
        assert_eq!(saved.preferences.duration, "3 days");
        assert_eq!(saved.tags, vec!["history".to_string()]);
        assert!(!saved.is_public);
        assert_eq!(saved.likes, 0);
        assert_eq!(saved.days.len(), 1);

        // Trip spans total_days calendar days
        let start = DateTime::parse_from_rfc3339(&saved.start_date).unwrap();
        let end = DateTime::parse_from_rfc3339(&saved.end_date).unwrap();
        assert_eq!((end - start).num_days(), 2);
    }

    #[test]
    fn test_location_type_serializes_lowercase() {
        let json = serde_json::to_string(&LocationType::Attraction).unwrap();
        assert_eq!(json, "\"attraction\"");
        let parsed: LocationType = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(parsed, LocationType::Restaurant);
    }
}

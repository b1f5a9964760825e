//! Location selection for itinerary generation: narrowing a
//! destination's catalog against an interest tag and ordering the
//! result for scheduling.

use shared::Location;
use std::cmp::Ordering;

/// Keep the locations whose category list matches the interest text.
///
/// A location matches when any of its tags contains the interest as a
/// case-insensitive substring. Note the empty string is a substring of
/// every tag, so an empty interest matches every location that carries
/// at least one tag.
pub fn filter_by_interest(locations: &[Location], interest: &str) -> Vec<Location> {
    let needle = interest.to_lowercase();
    locations
        .iter()
        .filter(|location| {
            location
                .category
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Order locations by rating, best first. The sort is stable: equally
/// rated locations keep their prior relative order, so ranking the same
/// input always yields the same output.
pub fn rank_by_rating(mut locations: Vec<Location>) -> Vec<Location> {
    locations.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LocationType;

    fn test_location(id: &str, category: &[&str], rating: f64) -> Location {
        Location {
            id: id.to_string(),
            name: id.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            location_type: LocationType::Attraction,
            category: category.iter().map(|c| c.to_string()).collect(),
            description: String::new(),
            rating,
            duration: 1.0,
            image_url: None,
        }
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let locations = vec![
            test_location("museum", &["History", "Culture"], 4.3),
            test_location("beach", &["Nature", "Beach"], 4.1),
        ];

        let matched = filter_by_interest(&locations, "history");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "museum");

        let matched = filter_by_interest(&locations, "BEACH");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "beach");
    }

    #[test]
    fn test_filter_matches_substrings() {
        let locations = vec![test_location("market", &["Local Cuisine"], 4.0)];
        assert_eq!(filter_by_interest(&locations, "cuisine").len(), 1);
        assert_eq!(filter_by_interest(&locations, "cuisines").len(), 0);
    }

    #[test]
    fn test_filter_with_no_match_is_empty() {
        let locations = vec![test_location("museum", &["History"], 4.3)];
        assert!(filter_by_interest(&locations, "Wildlife").is_empty());
    }

    #[test]
    fn test_empty_interest_matches_any_tagged_location() {
        let locations = vec![
            test_location("museum", &["History"], 4.3),
            test_location("untagged", &[], 4.0),
        ];
        let matched = filter_by_interest(&locations, "");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "museum");
    }

    #[test]
    fn test_rank_orders_by_rating_descending() {
        let ranked = rank_by_rating(vec![
            test_location("low", &[], 3.8),
            test_location("high", &[], 4.7),
            test_location("mid", &[], 4.3),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_by_rating(vec![
            test_location("first", &[], 4.2),
            test_location("second", &[], 4.2),
            test_location("third", &[], 4.2),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}

//! Destination catalog for the travel planner.
//!
//! The catalog is read-only data the rest of the domain layer consumes:
//! destinations, their locations, and the option lists the UI pickers
//! are built from. It is constructed explicitly and passed into the
//! services that need it, so tests can substitute fixture catalogs.

use anyhow::{Context, Result};
use shared::{CatalogOption, Destination, Location, LocationType};
use std::path::Path;

/// Read-only lookup of destinations by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Create a catalog from an explicit destination list.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// The destination data shipped with the app (Ghana).
    pub fn bundled() -> Self {
        Self::new(ghana_destinations())
    }

    /// Load a catalog from a YAML file containing a destination list.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let destinations: Vec<Destination> = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        Ok(Self::new(destinations))
    }

    /// Look up a destination by its exact id. Unknown ids are a normal
    /// outcome, not an error.
    pub fn resolve(&self, destination_id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == destination_id)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Picker options in "Name, Country" form, valued by destination id.
    pub fn destination_options(&self) -> Vec<CatalogOption> {
        self.destinations
            .iter()
            .map(|d| CatalogOption {
                label: format!("{}, {}", d.name, d.country),
                value: d.id.clone(),
            })
            .collect()
    }
}

/// Interest tags offered by the preferences screen.
pub fn interest_categories() -> Vec<CatalogOption> {
    [
        "History",
        "Culture",
        "Nature",
        "Art",
        "Food",
        "Adventure",
        "Beach",
        "Shopping",
        "Recreation",
        "Wildlife",
    ]
    .iter()
    .map(|name| CatalogOption {
        label: name.to_string(),
        value: name.to_string(),
    })
    .collect()
}

/// Trip length choices offered by the preferences screen.
pub fn duration_options() -> Vec<CatalogOption> {
    [("3 days", "3"), ("5 days", "5"), ("7 days", "7"), ("10 days", "10"), ("14 days", "14")]
        .iter()
        .map(|(label, value)| CatalogOption {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn location(
    id: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
    location_type: LocationType,
    category: &[&str],
    description: &str,
    rating: f64,
    duration: f64,
) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        location_type,
        category: category.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
        rating,
        duration,
        image_url: None,
    }
}

fn ghana_destinations() -> Vec<Destination> {
    use LocationType::{Attraction, Restaurant};

    vec![
        Destination {
            id: "accra".to_string(),
            name: "Accra".to_string(),
            country: "Ghana".to_string(),
            latitude: 5.6037,
            longitude: -0.1870,
            locations: vec![
                Location {
                    image_url: Some("https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80".to_string()),
                    ..location(
                        "kwame-nkrumah-mausoleum",
                        "Kwame Nkrumah Mausoleum",
                        5.5600,
                        -0.2050,
                        Attraction,
                        &["History", "Culture"],
                        "Memorial park and mausoleum of Ghana's first president",
                        4.5,
                        2.0,
                    )
                },
                Location {
                    image_url: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80".to_string()),
                    ..location(
                        "independence-square",
                        "Independence Square",
                        5.5465,
                        -0.2080,
                        Attraction,
                        &["History", "Culture"],
                        "Historic square commemorating Ghana's independence",
                        4.2,
                        1.0,
                    )
                },
                location(
                    "national-museum",
                    "National Museum of Ghana",
                    5.5564,
                    -0.2063,
                    Attraction,
                    &["History", "Culture", "Art"],
                    "Ghana's premier museum showcasing artifacts and cultural heritage",
                    4.3,
                    3.0,
                ),
                location(
                    "makola-market",
                    "Makola Market",
                    5.5564,
                    -0.2063,
                    Attraction,
                    &["Culture", "Shopping"],
                    "Vibrant traditional market in the heart of Accra",
                    4.0,
                    2.0,
                ),
                location(
                    "labadi-beach",
                    "Labadi Beach",
                    5.5465,
                    -0.1681,
                    Attraction,
                    &["Nature", "Recreation", "Beach"],
                    "Popular beach destination with golden sand and local culture",
                    4.1,
                    4.0,
                ),
                location(
                    "elmina-castle",
                    "Elmina Castle",
                    5.0831,
                    -1.3424,
                    Attraction,
                    &["History", "Culture"],
                    "Historic castle and UNESCO World Heritage site",
                    4.7,
                    3.0,
                ),
                location(
                    "arts-centre",
                    "Centre for National Culture",
                    5.5564,
                    -0.2031,
                    Attraction,
                    &["Art", "Culture", "Shopping"],
                    "Hub for traditional Ghanaian arts and crafts",
                    4.2,
                    2.0,
                ),
                location(
                    "cocoa-house",
                    "Cocoa House",
                    5.5564,
                    -0.2010,
                    Attraction,
                    &["History", "Architecture"],
                    "Historic building showcasing Ghana's cocoa heritage",
                    3.8,
                    1.0,
                ),
                location(
                    "osu-castle",
                    "Osu Castle (Christiansborg)",
                    5.5465,
                    -0.1915,
                    Attraction,
                    &["History", "Architecture"],
                    "Historic Danish-built castle, former seat of government",
                    4.4,
                    2.0,
                ),
                location(
                    "aburi-gardens",
                    "Aburi Botanical Gardens",
                    5.8500,
                    -0.1700,
                    Attraction,
                    &["Nature", "Recreation"],
                    "Beautiful botanical gardens in the Eastern Region hills",
                    4.6,
                    3.0,
                ),
                location(
                    "buka-restaurant",
                    "Buka Restaurant",
                    5.5600,
                    -0.1900,
                    Restaurant,
                    &["Food", "Local Cuisine"],
                    "Authentic Ghanaian cuisine in a traditional setting",
                    4.3,
                    2.0,
                ),
                location(
                    "republic-bar",
                    "Republic Bar & Grill",
                    5.5550,
                    -0.1850,
                    Restaurant,
                    &["Food", "Modern"],
                    "Contemporary dining with international and local fusion",
                    4.5,
                    2.0,
                ),
            ],
        },
        Destination {
            id: "cape-coast".to_string(),
            name: "Cape Coast".to_string(),
            country: "Ghana".to_string(),
            latitude: 5.1053,
            longitude: -1.2466,
            locations: vec![
                location(
                    "cape-coast-castle",
                    "Cape Coast Castle",
                    5.1053,
                    -1.2466,
                    Attraction,
                    &["History", "Culture"],
                    "Historic slave trading post and UNESCO World Heritage site",
                    4.8,
                    3.0,
                ),
                location(
                    "kakum-national-park",
                    "Kakum National Park",
                    5.3500,
                    -1.3833,
                    Attraction,
                    &["Nature", "Adventure", "Wildlife"],
                    "Tropical rainforest with canopy walkway",
                    4.7,
                    4.0,
                ),
            ],
        },
        Destination {
            id: "kumasi".to_string(),
            name: "Kumasi".to_string(),
            country: "Ghana".to_string(),
            latitude: 6.6885,
            longitude: -1.6244,
            locations: vec![
                location(
                    "manhyia-palace",
                    "Manhyia Palace Museum",
                    6.6885,
                    -1.6244,
                    Attraction,
                    &["History", "Culture", "Royalty"],
                    "Former palace of the Asantehene, now a museum",
                    4.6,
                    2.0,
                ),
                location(
                    "kejetia-market",
                    "Kejetia Market",
                    6.6980,
                    -1.6280,
                    Attraction,
                    &["Culture", "Shopping"],
                    "One of the largest open-air markets in West Africa",
                    4.2,
                    3.0,
                ),
            ],
        },
    ]
}

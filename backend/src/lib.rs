//! # Travel Planner Backend
//!
//! Contains all non-UI logic for the travel planner application.
//!
//! This crate brings together:
//! - **Domain**: Itinerary generation (catalog, selection, scheduling)
//! - **Storage**: Persistence for itineraries a user chooses to save
//!
//! The backend is UI-agnostic: screens call `ItineraryService` for
//! generation, hand results to `PreMountService` for preloading, and
//! persist them through `ItineraryStorage` as a separate, explicit
//! step. Generation itself never touches storage.

pub mod domain;
pub mod storage;

use crate::domain::{Catalog, ItineraryService, PreMountService};
use crate::storage::{ItineraryRepository, ItineraryStorage, YamlConnection};
use anyhow::Result;
use log::info;
use std::path::Path;
use std::sync::Arc;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub itinerary_service: Arc<ItineraryService>,
    pub premount_service: PreMountService,
    pub itinerary_storage: Arc<dyn ItineraryStorage>,
}

/// Initialize the backend with the bundled catalog and the default
/// YAML storage rooted at `data_dir`.
pub fn initialize_backend<P: AsRef<Path>>(data_dir: P) -> Result<AppState> {
    info!("Setting up itinerary storage");
    let connection = YamlConnection::new(data_dir)?;
    let itinerary_storage = Arc::new(ItineraryRepository::new(connection));

    info!("Setting up domain model");
    let itinerary_service = Arc::new(ItineraryService::new(Catalog::bundled()));
    let premount_service = PreMountService::new();

    Ok(AppState {
        itinerary_service,
        premount_service,
        itinerary_storage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SavedItinerary;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate_premount_and_save_flow() {
        let temp_dir = TempDir::new().unwrap();
        let state = initialize_backend(temp_dir.path()).unwrap();

        let itinerary = state
            .itinerary_service
            .generate_itinerary("accra", "History", "3")
            .expect("bundled catalog should generate");
        state.premount_service.pre_mount_all(&itinerary);
        assert!(state.premount_service.is_pre_mounted(&itinerary.days[0].activities[0].id));

        let record = SavedItinerary::from_generated("user-1", &itinerary);
        state.itinerary_storage.store_itinerary(&record).await.unwrap();

        let listed = state.itinerary_storage.list_user_itineraries("user-1").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Accra Trip");
        assert_eq!(listed[0].total_days, 3);
    }
}

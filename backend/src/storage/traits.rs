//! # Storage Traits
//!
//! Abstraction over itinerary persistence so the domain and UI layers
//! can work against any document store implementation.

use anyhow::Result;
use async_trait::async_trait;
use shared::SavedItinerary;

/// Interface for saved-itinerary storage operations.
#[async_trait]
pub trait ItineraryStorage: Send + Sync {
    /// Store a new itinerary record
    async fn store_itinerary(&self, itinerary: &SavedItinerary) -> Result<()>;

    /// Retrieve a specific itinerary by id
    async fn get_itinerary(&self, itinerary_id: &str) -> Result<Option<SavedItinerary>>;

    /// List a user's itineraries, newest first
    async fn list_user_itineraries(&self, user_id: &str) -> Result<Vec<SavedItinerary>>;

    /// List public itineraries, most liked first then newest, optionally
    /// limited
    async fn list_public_itineraries(&self, limit: Option<u32>) -> Result<Vec<SavedItinerary>>;

    /// Update an existing itinerary; refreshes its `updated_at`
    async fn update_itinerary(&self, itinerary: &SavedItinerary) -> Result<()>;

    /// Delete an itinerary
    /// Returns true if the record was found and deleted, false otherwise
    async fn delete_itinerary(&self, itinerary_id: &str) -> Result<bool>;

    /// Adjust an itinerary's like count up or down (never below zero).
    /// A missing record is a silent no-op.
    async fn toggle_itinerary_like(&self, itinerary_id: &str, increment: bool) -> Result<()>;
}

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use shared::SavedItinerary;
use std::fs;

use super::connection::YamlConnection;
use crate::storage::traits::ItineraryStorage;

/// YAML-document itinerary repository: one file per record.
#[derive(Clone)]
pub struct ItineraryRepository {
    connection: YamlConnection,
}

impl ItineraryRepository {
    pub fn new(connection: YamlConnection) -> Self {
        Self { connection }
    }

    /// Read every itinerary document in the store. Unreadable files are
    /// skipped with a warning rather than failing the whole listing.
    fn read_all(&self) -> Result<Vec<SavedItinerary>> {
        let dir = self.connection.itineraries_directory();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut itineraries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("⚠️ Skipping unreadable itinerary document {}: {}", path.display(), e);
                    continue;
                }
            };
            match serde_yaml::from_str::<SavedItinerary>(&content) {
                Ok(itinerary) => itineraries.push(itinerary),
                Err(e) => {
                    warn!("⚠️ Skipping malformed itinerary document {}: {}", path.display(), e);
                }
            }
        }
        Ok(itineraries)
    }

    /// Write a record to its document path via temp file + rename so
    /// readers never observe a half-written document.
    fn write_document(&self, itinerary: &SavedItinerary) -> Result<()> {
        self.connection.ensure_itineraries_directory()?;
        let path = self.connection.itinerary_path(&itinerary.id);
        let temp_path = path.with_extension("tmp");

        fs::write(&temp_path, serde_yaml::to_string(itinerary)?)?;
        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

#[async_trait]
impl ItineraryStorage for ItineraryRepository {
    async fn store_itinerary(&self, itinerary: &SavedItinerary) -> Result<()> {
        self.write_document(itinerary)
    }

    async fn get_itinerary(&self, itinerary_id: &str) -> Result<Option<SavedItinerary>> {
        Ok(self.read_all()?.into_iter().find(|i| i.id == itinerary_id))
    }

    async fn list_user_itineraries(&self, user_id: &str) -> Result<Vec<SavedItinerary>> {
        let mut itineraries: Vec<SavedItinerary> = self
            .read_all()?
            .into_iter()
            .filter(|i| i.user_id == user_id)
            .collect();
        itineraries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(itineraries)
    }

    async fn list_public_itineraries(&self, limit: Option<u32>) -> Result<Vec<SavedItinerary>> {
        let mut itineraries: Vec<SavedItinerary> =
            self.read_all()?.into_iter().filter(|i| i.is_public).collect();
        itineraries
            .sort_by(|a, b| b.likes.cmp(&a.likes).then(b.created_at.cmp(&a.created_at)));
        if let Some(limit) = limit {
            itineraries.truncate(limit as usize);
        }
        Ok(itineraries)
    }

    async fn update_itinerary(&self, itinerary: &SavedItinerary) -> Result<()> {
        if !self.connection.itinerary_path(&itinerary.id).exists() {
            return Err(anyhow::anyhow!("Itinerary not found: {}", itinerary.id));
        }
        let mut updated = itinerary.clone();
        updated.updated_at = Utc::now().to_rfc3339();
        self.write_document(&updated)
    }

    async fn delete_itinerary(&self, itinerary_id: &str) -> Result<bool> {
        let path = self.connection.itinerary_path(itinerary_id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    async fn toggle_itinerary_like(&self, itinerary_id: &str, increment: bool) -> Result<()> {
        let Some(mut itinerary) = self.get_itinerary(itinerary_id).await? else {
            return Ok(());
        };
        itinerary.likes =
            if increment { itinerary.likes + 1 } else { itinerary.likes.saturating_sub(1) };
        itinerary.updated_at = Utc::now().to_rfc3339();
        self.write_document(&itinerary)
    }
}

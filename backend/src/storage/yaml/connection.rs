use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// YamlConnection manages the data directory layout for document
/// storage: one YAML file per saved itinerary under `itineraries/`.
#[derive(Clone)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a connection rooted at a base directory, creating it if
    /// needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }
        Ok(Self { base_directory: base_path })
    }

    /// Create a connection in the default data directory
    /// (~/Documents/Travel Planner).
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        let data_dir = PathBuf::from(home_dir).join("Documents").join("Travel Planner");
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn itineraries_directory(&self) -> PathBuf {
        self.base_directory.join("itineraries")
    }

    /// Make sure the itineraries directory exists before a write.
    pub fn ensure_itineraries_directory(&self) -> Result<PathBuf> {
        let dir = self.itineraries_directory();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Document path for a record id.
    pub fn itinerary_path(&self, itinerary_id: &str) -> PathBuf {
        self.itineraries_directory()
            .join(format!("{}.yaml", Self::safe_file_name(itinerary_id)))
    }

    /// Turn a record id into a filesystem-safe file stem: lowercase,
    /// keeping alphanumerics and dashes, mapping everything else to
    /// underscores.
    pub fn safe_file_name(id: &str) -> String {
        id.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("data");
        let connection = YamlConnection::new(&base).unwrap();
        assert!(base.exists());
        assert_eq!(connection.base_directory(), base);
    }

    #[test]
    fn test_safe_file_name() {
        assert_eq!(
            YamlConnection::safe_file_name("itinerary::user-1_1722950000000"),
            "itinerary__user-1_1722950000000"
        );
        assert_eq!(YamlConnection::safe_file_name("Itinerary::Kofi Mensah"), "itinerary__kofi_mensah");
    }

    #[test]
    fn test_itinerary_path_layout() {
        let temp_dir = TempDir::new().unwrap();
        let connection = YamlConnection::new(temp_dir.path()).unwrap();
        let path = connection.itinerary_path("itinerary::u_1");
        assert_eq!(path, temp_dir.path().join("itineraries").join("itinerary__u_1.yaml"));
    }
}

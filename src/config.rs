//! Configuration for booktrack
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BookError, Result};

/// Main configuration for a booktrack instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the file-backed slot
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {storage_key}.json   (the whole collection as one JSON array)
    pub data_dir: PathBuf,

    /// Name of the single slot holding the collection
    pub storage_key: String,

    /// Write the sample books when the slot does not exist yet
    pub seed_on_first_load: bool,

    // -------------------------------------------------------------------------
    // Controller Configuration
    // -------------------------------------------------------------------------
    /// Text the user must type before a delete goes through
    pub delete_confirmation: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./booktrack_data"),
            storage_key: "books".to_string(),
            seed_on_first_load: true,
            delete_confirmation: "delete".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check values that would make the slot or the prompt unusable
    pub fn validate(&self) -> Result<()> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(BookError::Config("storage key must not be empty".to_string()));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(BookError::Config(format!(
                "storage key {:?} must not contain path separators",
                self.storage_key
            )));
        }
        if self.delete_confirmation.is_empty() {
            return Err(BookError::Config(
                "delete confirmation text must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for the file-backed slot)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// Enable or disable first-load seeding
    pub fn seed_on_first_load(mut self, enabled: bool) -> Self {
        self.config.seed_on_first_load = enabled;
        self
    }

    /// Set the delete confirmation text
    pub fn delete_confirmation(mut self, text: impl Into<String>) -> Self {
        self.config.delete_confirmation = text.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

use crate::core::store::SettingsStore;
use crate::domain::model::MapGenSettings;
use crate::domain::ports::SettingsStorage;
use crate::utils::error::{Result, SettingsError};
use crate::utils::validation::validate_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub version: u32,
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settings: MapGenSettings,
}

/// Saves and restores store contents as JSON through a [`SettingsStorage`].
pub struct SettingsPersistence<S: SettingsStorage> {
    storage: S,
}

impl<S: SettingsStorage> SettingsPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes the store as a versioned JSON document.
    ///
    /// Fails without writing when a value is outside the range [`load`](Self::load) accepts.
    pub fn save(&self, store: &SettingsStore, path: &str) -> Result<()> {
        validate_path("state", path)?;

        let settings = store.snapshot();
        settings.validate_in("settings")?;

        let document = SettingsDocument {
            version: STATE_FORMAT_VERSION,
            saved_at: Some(Utc::now()),
            settings,
        };
        let data = serde_json::to_vec_pretty(&document)?;

        tracing::debug!("Writing settings state ({} bytes) to {}", data.len(), path);
        self.storage.write_file(path, &data)
    }

    /// Reads and validates a state document written by [`save`](Self::save).
    pub fn load(&self, path: &str) -> Result<MapGenSettings> {
        validate_path("state", path)?;

        let data = self.storage.read_file(path)?;
        let document: SettingsDocument = serde_json::from_slice(&data)?;

        // Only the current format is understood; older or newer files are not migrated.
        if document.version != STATE_FORMAT_VERSION {
            return Err(SettingsError::InvalidConfigValueError {
                field: "version".to_string(),
                value: document.version.to_string(),
                reason: format!("Only state format version {} is supported", STATE_FORMAT_VERSION),
            });
        }
        document.settings.validate_in("settings")?;

        if let Some(saved_at) = document.saved_at {
            tracing::debug!("Loaded settings state from {} (saved {})", path, saved_at);
        }
        Ok(document.settings)
    }

    pub fn load_into(&self, store: &mut SettingsStore, path: &str) -> Result<()> {
        let settings = self.load(path)?;
        store.apply(&settings);
        Ok(())
    }

    /// Like [`load`](Self::load), but a missing file yields all-zero settings.
    pub fn load_or_default(&self, path: &str) -> Result<MapGenSettings> {
        if !self.storage.exists(path) {
            tracing::info!("No settings state at {}, using defaults", path);
            return Ok(MapGenSettings::default());
        }
        self.load(path)
    }
}

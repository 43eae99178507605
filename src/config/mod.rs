pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::persistence::SettingsPersistence;
use crate::core::store::SettingsStore;
use crate::domain::model::SettingKey;
use crate::domain::ports::SettingsStorage;
use crate::utils::error::{Result, SettingsError};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use std::str::FromStr;

/// A `key=value` assignment given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingOverride {
    pub key: SettingKey,
    pub value: f64,
}

impl SettingOverride {
    pub fn apply_to(&self, store: &mut SettingsStore) {
        store.set(self.key, self.value);
    }
}

impl FromStr for SettingOverride {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, raw_value) = s.split_once('=').ok_or_else(|| {
            SettingsError::InvalidConfigValueError {
                field: "set".to_string(),
                value: s.to_string(),
                reason: "Expected key=value".to_string(),
            }
        })?;

        let key = name.parse::<SettingKey>()?;
        let value = raw_value
            .trim()
            .parse::<f64>()
            .map_err(|e| SettingsError::InvalidConfigValueError {
                field: key.to_string(),
                value: raw_value.to_string(),
                reason: format!("Not a number: {}", e),
            })?;

        Ok(Self { key, value })
    }
}

/// Builds the store in layers: defaults, then the TOML file, then an existing
/// state file, then the command line assignments. Each layer overrides the one before.
pub fn build_store<S: SettingsStorage>(
    file_config: Option<&TomlConfig>,
    persistence: &SettingsPersistence<S>,
    state: Option<&str>,
    overrides: &[SettingOverride],
    debug: bool,
) -> Result<SettingsStore> {
    let mut store = SettingsStore::new(debug);

    if let Some(config) = file_config {
        store.apply(&config.map_gen);
    }

    match state {
        Some(path) if persistence.storage().exists(path) => {
            persistence.load_into(&mut store, path)?;
            tracing::info!("Loaded settings state from {}", path);
        }
        Some(path) => tracing::info!("No settings state at {}, keeping current values", path),
        None => {}
    }

    for assignment in overrides {
        assignment.apply_to(&mut store);
    }

    Ok(store)
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mapgen-settings")]
#[command(about = "Inspect and edit map generation settings")]
pub struct CliConfig {
    /// TOML file with initial map generation values
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON state file, loaded if it exists
    #[arg(long)]
    pub state: Option<String>,

    /// Set a value, e.g. --set num_cities=4 (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<SettingOverride>,

    /// Write the resulting settings back to --state
    #[arg(long)]
    pub save: bool,

    /// Trace every settings update
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn build_store<S: SettingsStorage>(
        &self,
        file_config: Option<&TomlConfig>,
        persistence: &SettingsPersistence<S>,
        debug: bool,
    ) -> Result<SettingsStore> {
        build_store(
            file_config,
            persistence,
            self.state.as_deref(),
            &self.overrides,
            debug,
        )
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(state) = &self.state {
            validate_path("state", state)?;
        }
        if self.save {
            validate_required_field("state", &self.state)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        let parsed: SettingOverride = "num_cities=4.8".parse().unwrap();
        assert_eq!(parsed.key, SettingKey::NumCities);
        assert_eq!(parsed.value, 4.8);

        let mut store = SettingsStore::default();
        parsed.apply_to(&mut store);
        assert_eq!(store.get(SettingKey::NumCities), 4);
    }

    #[test]
    fn test_parse_override_errors() {
        assert!(matches!(
            "num_cities".parse::<SettingOverride>(),
            Err(SettingsError::InvalidConfigValueError { .. })
        ));
        assert!(matches!(
            "num_castles=3".parse::<SettingOverride>(),
            Err(SettingsError::UnknownSettingError { .. })
        ));
        assert!(matches!(
            "num_towns=lots".parse::<SettingOverride>(),
            Err(SettingsError::InvalidConfigValueError { .. })
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let config = CliConfig::try_parse_from([
            "mapgen-settings",
            "--state",
            "state.json",
            "--set",
            "num_towns=5",
            "--set",
            "num_rurals=11.2",
            "--save",
            "--debug",
        ])
        .unwrap();

        assert_eq!(config.state.as_deref(), Some("state.json"));
        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[1].key, SettingKey::NumRurals);
        assert!(config.save);
        assert!(config.debug);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_save_requires_state() {
        let config = CliConfig::try_parse_from(["mapgen-settings", "--save"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SettingsError::MissingConfigError { field }) if field == "state"
        ));
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{build_store, cli::LocalStorage, toml_config::TomlConfig, SettingOverride};
pub use core::{persistence::SettingsPersistence, store::SettingsStore};
pub use domain::model::{MapGenSettings, SettingKey};
pub use domain::ports::{SettingsReader, SettingsStorage};
pub use utils::error::{Result, SettingsError};

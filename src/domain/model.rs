use crate::utils::error::{Result, SettingsError};
use crate::utils::validation::{validate_count, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of map generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    NumCities,
    NumTowns,
    NumRurals,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::NumCities,
        SettingKey::NumTowns,
        SettingKey::NumRurals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::NumCities => "num_cities",
            SettingKey::NumTowns => "num_towns",
            SettingKey::NumRurals => "num_rurals",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| SettingsError::UnknownSettingError {
                name: name.to_string(),
            })
    }
}

/// Serializable copy of every map generation value. Absent fields read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapGenSettings {
    pub num_cities: i32,
    pub num_towns: i32,
    pub num_rurals: i32,
}

impl MapGenSettings {
    pub fn value(&self, key: SettingKey) -> i32 {
        match key {
            SettingKey::NumCities => self.num_cities,
            SettingKey::NumTowns => self.num_towns,
            SettingKey::NumRurals => self.num_rurals,
        }
    }

    pub fn set_value(&mut self, key: SettingKey, value: i32) {
        match key {
            SettingKey::NumCities => self.num_cities = value,
            SettingKey::NumTowns => self.num_towns = value,
            SettingKey::NumRurals => self.num_rurals = value,
        }
    }

    /// Validates every count, prefixing field names with `section`.
    pub fn validate_in(&self, section: &str) -> Result<()> {
        for key in SettingKey::ALL {
            validate_count(&format!("{}.{}", section, key), self.value(key))?;
        }
        Ok(())
    }
}

impl Validate for MapGenSettings {
    fn validate(&self) -> Result<()> {
        self.validate_in("settings")
    }
}

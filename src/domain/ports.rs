use crate::domain::model::{MapGenSettings, SettingKey};
use crate::utils::error::Result;

/// Read-only view handed to map generation code.
pub trait SettingsReader {
    fn map_gen_value(&self, key: SettingKey) -> i32;

    fn num_cities(&self) -> i32 {
        self.map_gen_value(SettingKey::NumCities)
    }

    fn num_towns(&self) -> i32 {
        self.map_gen_value(SettingKey::NumTowns)
    }

    fn num_rurals(&self) -> i32 {
        self.map_gen_value(SettingKey::NumRurals)
    }
}

impl SettingsReader for MapGenSettings {
    fn map_gen_value(&self, key: SettingKey) -> i32 {
        self.value(key)
    }
}

pub trait SettingsStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}

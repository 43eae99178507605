pub mod persistence;
pub mod store;

pub use crate::domain::model::{MapGenSettings, SettingKey};
pub use crate::domain::ports::{SettingsReader, SettingsStorage};
pub use crate::utils::error::Result;

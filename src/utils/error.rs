use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown setting: {name}")]
    UnknownSettingError { name: String },
}

impl SettingsError {
    /// Short message meant for a terminal user rather than a log file.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SettingsError::IoError(e) => format!("Could not access a settings file: {}", e),
            SettingsError::SerializationError(_) => {
                "The settings state file is not valid JSON".to_string()
            }
            SettingsError::ConfigParseError { .. } => {
                "The configuration file could not be parsed".to_string()
            }
            SettingsError::MissingConfigError { field } => {
                format!("Required option '{}' was not provided", field)
            }
            SettingsError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an accepted value for {}", value, field)
            }
            SettingsError::UnknownSettingError { name } => {
                format!("'{}' is not a map generation setting", name)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SettingsError::IoError(_) => "Check that the path exists and is readable/writable",
            SettingsError::SerializationError(_) => {
                "Delete the state file or fix it by hand; it is recreated on --save"
            }
            SettingsError::ConfigParseError { .. } => "Check the TOML syntax of the config file",
            SettingsError::MissingConfigError { .. } => "Pass the missing option on the command line",
            SettingsError::InvalidConfigValueError { .. } => {
                "Counts must be whole numbers between 0 and 10000"
            }
            SettingsError::UnknownSettingError { .. } => {
                "Valid settings are num_cities, num_towns and num_rurals"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SettingsError>;

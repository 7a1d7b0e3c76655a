use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ReadFile,
    BadToml,
    EmptyField,
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadFile => write!(f, "Failed to read agent config file"),
            ConfigError::BadToml => write!(f, "Agent config TOML data was bad"),
            ConfigError::EmptyField => write!(f, "Agent config has an empty required field"),
        }
    }
}

use super::error::ConfigError;
use log::error;
use serde::Deserialize;
use std::{collections::HashMap, fs::read, str::from_utf8};

#[derive(Deserialize, Debug)]
pub struct AgentToml {
    pub agent: Agent,
}

/// Identity and collector settings for one agent run
#[derive(Deserialize, Debug)]
pub struct Agent {
    /// Base URL of the collector. Ex: <http://collector.lab:8000>
    pub server_url: String,
    /// Bearer credential presented on every heartbeat
    pub api_key: String,
    /// Identifier the collector tracks this rig under
    pub rig_id: String,
    /// Extra string fields merged into every report
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// Process names that mark the rig as running a test
    #[serde(default)]
    pub test_process_names: Vec<String>,
}

/// Parse the provided `Agent` TOML config file
pub fn load_config(path: &str) -> Result<AgentToml, ConfigError> {
    let bytes = match read(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[agent] Failed to read config file {path}: {err:?}");
            return Err(ConfigError::ReadFile);
        }
    };

    let config: AgentToml = match toml::from_str(from_utf8(&bytes).unwrap_or_default()) {
        Ok(result) => result,
        Err(err) => {
            error!("[agent] Failed to parse agent config {path}: {err:?}");
            return Err(ConfigError::BadToml);
        }
    };

    if config.agent.server_url.is_empty()
        || config.agent.api_key.is_empty()
        || config.agent.rig_id.is_empty()
    {
        error!("[agent] Config {path} has an empty server_url, api_key, or rig_id");
        return Err(ConfigError::EmptyField);
    }

    Ok(config)
}

use crate::{
    configuration::{config::load_config, error::ConfigError},
    cycle::run_once,
    utils::logging::setup_logging,
};
use log::error;

/// By default we assume agent.toml is in same directory as binary
const DEFAULT_CONFIG: &str = "agent.toml";

/// Set up logging, load the agent config, and run exactly one heartbeat
/// cycle. A bad config is the only fatal error. Returns whether the
/// heartbeat was delivered
pub fn start(path: Option<&str>, log_level: &str) -> Result<bool, ConfigError> {
    setup_logging(log_level);

    let config_path = path.unwrap_or(DEFAULT_CONFIG);
    let config = match load_config(config_path) {
        Ok(result) => result,
        Err(err) => {
            error!("[agent] Cannot start without a valid config at {config_path}: {err:?}");
            return Err(err);
        }
    };

    Ok(run_once(&config.agent))
}

#[cfg(test)]
mod tests {
    use crate::start::start;
    use std::path::PathBuf;

    #[test]
    fn test_start_unreachable_collector() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/configs/agent.toml");

        let delivered = start(test_location.to_str(), "info").unwrap();
        assert!(!delivered)
    }

    #[test]
    #[should_panic(expected = "ReadFile")]
    fn test_start_missing_config() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/configs/agent123.toml");

        let _ = start(test_location.to_str(), "info").unwrap();
    }
}

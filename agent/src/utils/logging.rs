use crate::error::AgentError;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::fs::File;

/// Log file created in the working directory of the agent. One file per run
const LOG_PATH: &str = "rigwatch.log";

/// Initialize the process-wide logger. Called exactly once per run before any
/// other agent work. Falls back to stderr if the log file cannot be created
pub(crate) fn setup_logging(level: &str) {
    let filter = log_level(level);

    match create_log_file(LOG_PATH) {
        Ok(log_file) => {
            let _ = WriteLogger::init(filter, Config::default(), log_file);
        }
        Err(_err) => {
            let _ = SimpleLogger::init(filter, Config::default());
        }
    }
}

/// Map the configured level string to a `LevelFilter`. Unknown values get Info
pub(crate) fn log_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

pub(crate) fn create_log_file(path: &str) -> Result<File, AgentError> {
    match File::create(path) {
        Ok(result) => Ok(result),
        Err(_err) => Err(AgentError::LogFile),
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::logging::{create_log_file, log_level};
    use log::LevelFilter;
    use std::fs::create_dir_all;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level("error"), LevelFilter::Error);
        assert_eq!(log_level("warn"), LevelFilter::Warn);
        assert_eq!(log_level("debug"), LevelFilter::Debug);
        assert_eq!(log_level("info"), LevelFilter::Info);
        assert_eq!(log_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_create_log_file() {
        create_dir_all("./tmp").unwrap();
        let log_file = create_log_file("./tmp/rigwatch_test.log").unwrap();
        assert!(log_file.metadata().unwrap().is_file())
    }

    #[test]
    #[should_panic(expected = "LogFile")]
    fn test_create_log_file_bad_path() {
        create_log_file("./tmp_missing_dir/nested/rigwatch.log").unwrap();
    }
}

use std::fmt;

#[derive(Debug)]
pub enum AgentError {
    LogFile,
}

impl std::error::Error for AgentError {}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::LogFile => write!(f, "Failed to create agent log file"),
        }
    }
}

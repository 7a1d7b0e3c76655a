use std::fmt;

#[derive(Debug, PartialEq)]
pub enum HeartbeatError {
    BuildClient,
    Connection,
    Timeout,
    HeartbeatNotOk,
    FailedSend,
}

impl std::error::Error for HeartbeatError {}

impl fmt::Display for HeartbeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeartbeatError::BuildClient => write!(f, "Failed to build heartbeat client"),
            HeartbeatError::Connection => write!(f, "Could not connect to collector"),
            HeartbeatError::Timeout => write!(f, "Heartbeat request timed out"),
            HeartbeatError::HeartbeatNotOk => write!(f, "Collector returned non-Ok response"),
            HeartbeatError::FailedSend => write!(f, "Failed to send heartbeat"),
        }
    }
}

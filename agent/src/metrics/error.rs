use std::fmt;

#[derive(Debug, PartialEq)]
pub enum MetricsError {
    Memory,
    RootVolume,
}

impl std::error::Error for MetricsError {}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::Memory => write!(f, "Failed to read memory totals from system"),
            MetricsError::RootVolume => write!(f, "Failed to find root volume usage"),
        }
    }
}

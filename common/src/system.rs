use serde::{Deserialize, Serialize};

/// One sample of rig resource usage. Percentages are 0-100, sizes are
/// gigabytes rounded to two decimal places, uptime is hours rounded to one
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SystemSnapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_used_gb: f64,
    pub memory_total_gb: f64,
    pub disk_percent: f64,
    pub disk_free_gb: f64,
    pub uptime_hours: f64,
}

/// Result of scanning the process table for configured workload processes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TestActivity {
    pub is_testing: bool,
    /// Name of the first matching process. None when the rig is idle
    pub test_name: Option<String>,
}

/// Local hostname and address of the rig. Either value may be the literal
/// "unknown" when resolution fails
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NetworkInfo {
    pub hostname: String,
    pub ip_address: String,
}

use common::system::TestActivity;
use sysinfo::{ProcessesToUpdate, System};

/// Scan the live process table for any of the configured workload names.
/// Names match exactly and the first match wins. An empty list never matches
pub(crate) fn detect_activity(names: &[String]) -> TestActivity {
    let idle = TestActivity {
        is_testing: false,
        test_name: None,
    };

    if names.is_empty() {
        return idle;
    }

    let mut proc = System::new();
    proc.refresh_processes(ProcessesToUpdate::All, false);

    for process in proc.processes().values() {
        let proc_name = process.name().to_str().unwrap_or_default();
        if names.iter().any(|name| name == proc_name) {
            return TestActivity {
                is_testing: true,
                test_name: Some(proc_name.to_string()),
            };
        }
    }

    idle
}

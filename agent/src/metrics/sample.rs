use super::error::MetricsError;
use common::system::SystemSnapshot;
use std::{path::Path, thread::sleep, time::Duration};
use sysinfo::{Disks, System};

/// CPU usage is an interval sample. Two refreshes separated by this window,
/// not an instantaneous reading
const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

const BYTES_PER_GB: f64 = 1073741824.0;

#[cfg(target_os = "windows")]
const ROOT_VOLUME: &str = "C:\\";
#[cfg(not(target_os = "windows"))]
const ROOT_VOLUME: &str = "/";

/// Sample CPU, memory, root volume, and uptime state for one report
pub(crate) fn sample_system() -> Result<SystemSnapshot, MetricsError> {
    let mut system = System::new();

    system.refresh_cpu_all();
    sleep(CPU_SAMPLE_WINDOW);
    system.refresh_cpu_all();
    let cpu_percent = f64::from(system.global_cpu_usage()).clamp(0.0, 100.0);

    system.refresh_memory();
    let total_memory = system.total_memory();
    if total_memory == 0 {
        return Err(MetricsError::Memory);
    }
    let used_memory = system.used_memory();

    let (disk_percent, disk_free_gb) = get_root_volume()?;

    Ok(SystemSnapshot {
        cpu_percent: round_percent(cpu_percent),
        memory_percent: round_percent(used_memory as f64 / total_memory as f64 * 100.0),
        memory_used_gb: bytes_to_gb(used_memory),
        memory_total_gb: bytes_to_gb(total_memory),
        disk_percent,
        disk_free_gb,
        uptime_hours: seconds_to_hours(System::uptime()),
    })
}

/// Usage of the disk mounted at the fixed root volume. Other mounts are
/// ignored even if the root volume is missing
fn get_root_volume() -> Result<(f64, f64), MetricsError> {
    let disks = Disks::new_with_refreshed_list();

    for disk in &disks {
        if disk.mount_point() != Path::new(ROOT_VOLUME) {
            continue;
        }

        let total_space = disk.total_space();
        if total_space == 0 {
            break;
        }
        let available_space = disk.available_space();
        let used_space = total_space.saturating_sub(available_space);

        let percent = round_percent(used_space as f64 / total_space as f64 * 100.0);
        return Ok((percent, bytes_to_gb(available_space)));
    }

    Err(MetricsError::RootVolume)
}

/// Convert bytes to gigabytes rounded to two decimal places
pub(crate) fn bytes_to_gb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_GB * 100.0).round() / 100.0
}

/// Convert seconds to hours rounded to one decimal place
pub(crate) fn seconds_to_hours(seconds: u64) -> f64 {
    (seconds as f64 / 3600.0 * 10.0).round() / 10.0
}

fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

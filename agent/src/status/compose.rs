use crate::{configuration::config::Agent, utils::time::time_now_iso};
use common::heartbeat::StatusReport;
use common::system::{NetworkInfo, SystemSnapshot, TestActivity};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};
use sysinfo::System;

/// Built-in fields operator metadata may never replace. Probe fields such as
/// hostname stay overridable, metadata has the final say on those
const PROTECTED_FIELDS: [&str; 7] = [
    "rig_id",
    "timestamp",
    "status",
    "is_testing",
    "test_name",
    "agent_version",
    "os",
];

/// Merge identity, probe output, and operator metadata into one report.
/// Layers apply in a fixed order and later layers overwrite earlier ones
pub(crate) fn compose_status(
    config: &Agent,
    activity: &TestActivity,
    network: &NetworkInfo,
    snapshot: Option<&SystemSnapshot>,
) -> StatusReport {
    let mut fields = Map::new();

    fields.insert(String::from("rig_id"), Value::from(config.rig_id.as_str()));
    fields.insert(String::from("timestamp"), Value::from(time_now_iso()));
    fields.insert(
        String::from("status"),
        Value::from(status_label(activity.is_testing)),
    );

    merge_layer(&mut fields, to_layer(activity));
    merge_layer(&mut fields, to_layer(network));
    if let Some(sample) = snapshot {
        merge_layer(&mut fields, to_layer(sample));
    }
    merge_metadata(&mut fields, config);

    // Version and platform stamps always win, even over metadata
    fields.insert(
        String::from("agent_version"),
        Value::from(env!("CARGO_PKG_VERSION")),
    );
    fields.insert(String::from("os"), Value::from(os_description()));

    StatusReport { fields }
}

/// Report label for the activity state
pub(crate) fn status_label(is_testing: bool) -> &'static str {
    if is_testing { "busy" } else { "available" }
}

/// Apply one report layer. Keys already present are overwritten
fn merge_layer(fields: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        fields.insert(key, value);
    }
}

/// Metadata merges last but may not clobber the built-in report fields
fn merge_metadata(fields: &mut Map<String, Value>, config: &Agent) {
    for (key, value) in &config.metadata {
        if PROTECTED_FIELDS.contains(&key.as_str()) {
            warn!("[agent] Metadata key {key} collides with a built-in field, dropping it");
            continue;
        }
        fields.insert(key.clone(), Value::from(value.as_str()));
    }
}

/// Serialize one report section into a mergeable JSON object
fn to_layer<T: Serialize>(section: &T) -> Map<String, Value> {
    match serde_json::to_value(section) {
        Ok(Value::Object(result)) => result,
        _ => Map::new(),
    }
}

/// Long OS description for the report. Ex: Linux 24.04 Ubuntu
fn os_description() -> String {
    System::long_os_version().unwrap_or_else(|| String::from("Unknown OS"))
}

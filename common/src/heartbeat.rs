use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Composite status report sent to the collector. Identity, probe output,
/// and operator metadata are merged into one flat JSON document
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusReport {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StatusReport {
    /// Lookup a report field by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::StatusReport;
    use serde_json::{Map, Value};

    #[test]
    fn test_status_report_flattens() {
        let mut fields = Map::new();
        fields.insert(String::from("is_testing"), Value::from(false));
        fields.insert(String::from("rig_id"), Value::from("rig-7"));

        let report = StatusReport { fields };
        let output = serde_json::to_string(&report).unwrap();

        assert_eq!(output, "{\"is_testing\":false,\"rig_id\":\"rig-7\"}");
        assert_eq!(report.fields["rig_id"], "rig-7");
        assert!(report.get("status").is_none());
    }
}

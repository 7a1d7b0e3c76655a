use chrono::{SecondsFormat, Utc};

/// Current UTC time in ISO8601 format. Used to stamp outgoing reports
pub(crate) fn time_now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

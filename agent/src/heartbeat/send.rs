use super::error::HeartbeatError;
use common::heartbeat::StatusReport;
use log::{error, info};
use reqwest::{StatusCode, blocking::Client};
use std::time::Duration;

/// Collector route that receives status reports
const HEARTBEAT_ENDPOINT: &str = "/api/heartbeat";

/// Bound on the entire request. One attempt per cycle, no retries
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// POST one status report to the collector. Any error means the heartbeat
/// was not delivered, each cause is logged separately
pub(crate) fn send_heartbeat(
    report: &StatusReport,
    server_url: &str,
    api_key: &str,
) -> Result<(), HeartbeatError> {
    send_with_timeout(report, server_url, api_key, SEND_TIMEOUT)
}

fn send_with_timeout(
    report: &StatusReport,
    server_url: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<(), HeartbeatError> {
    let url = format!("{server_url}{HEARTBEAT_ENDPOINT}");

    let client = match Client::builder().timeout(timeout).build() {
        Ok(result) => result,
        Err(err) => {
            error!("[agent] Failed to build heartbeat client: {err:?}");
            return Err(HeartbeatError::BuildClient);
        }
    };

    let builder = client.post(&url).bearer_auth(api_key).json(report);
    let res = match builder.send() {
        Ok(result) => result,
        Err(err) => {
            if err.is_timeout() {
                error!("[agent] Heartbeat to {url} timed out after {timeout:?}");
                return Err(HeartbeatError::Timeout);
            }
            if err.is_connect() {
                error!("[agent] Could not connect to collector at {url}: {err:?}");
                return Err(HeartbeatError::Connection);
            }
            error!("[agent] Failed to send heartbeat to {url}: {err:?}");
            return Err(HeartbeatError::FailedSend);
        }
    };

    let status = res.status();
    if status != StatusCode::OK {
        error!(
            "[agent] Collector returned status {status}: {:?}",
            res.text().unwrap_or_default()
        );
        return Err(HeartbeatError::HeartbeatNotOk);
    }

    let rig = report
        .get("rig_id")
        .and_then(|value| value.as_str())
        .unwrap_or_default();
    info!("[agent] Heartbeat sent successfully for {rig}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::heartbeat::send::{send_heartbeat, send_with_timeout};
    use common::heartbeat::StatusReport;
    use httpmock::{Method::POST, MockServer};
    use serde_json::{Map, Value, json};
    use std::time::Duration;

    fn test_report() -> StatusReport {
        let mut fields = Map::new();
        fields.insert(String::from("rig_id"), Value::from("rig-lab-01"));
        fields.insert(String::from("status"), Value::from("available"));
        fields.insert(String::from("is_testing"), Value::from(false));

        StatusReport { fields }
    }

    #[test]
    fn test_send_heartbeat() {
        let mock_server = MockServer::start();
        let port = mock_server.port();

        let mock_me = mock_server.mock(|when, then| {
            when.method(POST)
                .path("/api/heartbeat")
                .header("authorization", "Bearer my key")
                .body_contains("rig-lab-01")
                .body_contains("is_testing");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "ok": true }));
        });

        let report = test_report();
        send_heartbeat(&report, &format!("http://127.0.0.1:{port}"), "my key").unwrap();
        mock_me.assert();
    }

    #[test]
    #[should_panic(expected = "HeartbeatNotOk")]
    fn test_send_heartbeat_server_error() {
        let mock_server = MockServer::start();
        let port = mock_server.port();

        let mock_me = mock_server.mock(|when, then| {
            when.method(POST).path("/api/heartbeat");
            then.status(500)
                .header("content-type", "application/json")
                .body("collector exploded");
        });

        let report = test_report();
        send_heartbeat(&report, &format!("http://127.0.0.1:{port}"), "my key").unwrap();
        mock_me.assert();
    }

    #[test]
    #[should_panic(expected = "HeartbeatNotOk")]
    fn test_send_heartbeat_bad_key() {
        let mock_server = MockServer::start();
        let port = mock_server.port();

        let mock_me = mock_server.mock(|when, then| {
            when.method(POST).path("/api/heartbeat");
            then.status(401)
                .header("content-type", "application/json")
                .body("who are you");
        });

        let report = test_report();
        send_heartbeat(&report, &format!("http://127.0.0.1:{port}"), "bad key").unwrap();
        mock_me.assert();
    }

    #[test]
    #[should_panic(expected = "Connection")]
    fn test_send_heartbeat_no_collector() {
        let report = test_report();
        send_heartbeat(&report, "http://127.0.0.1:2223", "my key").unwrap();
    }

    #[test]
    #[should_panic(expected = "Timeout")]
    fn test_send_heartbeat_timeout() {
        let mock_server = MockServer::start();
        let port = mock_server.port();

        let _mock_me = mock_server.mock(|when, then| {
            when.method(POST).path("/api/heartbeat");
            then.status(200).delay(Duration::from_secs(2));
        });

        let report = test_report();
        send_with_timeout(
            &report,
            &format!("http://127.0.0.1:{port}"),
            "my key",
            Duration::from_millis(200),
        )
        .unwrap();
    }
}

use crate::{
    activity::detect::detect_activity, configuration::config::Agent,
    heartbeat::send::send_heartbeat, metrics::sample::sample_system,
    network::resolve::resolve_network, status::compose::compose_status,
};
use log::{error, info};

/// Run one collect, compose, and send cycle. Probe faults degrade the report
/// and transmission faults degrade the outcome, neither aborts the run.
/// Returns whether the collector accepted the heartbeat
pub(crate) fn run_once(config: &Agent) -> bool {
    info!("[agent] Heartbeat cycle starting for {}", config.rig_id);

    let activity = detect_activity(&config.test_process_names);
    let network = resolve_network();
    let snapshot = match sample_system() {
        Ok(result) => Some(result),
        Err(err) => {
            error!("[agent] Failed to sample system state, reporting without metrics: {err:?}");
            None
        }
    };

    let report = compose_status(config, &activity, &network, snapshot.as_ref());
    let delivered = send_heartbeat(&report, &config.server_url, &config.api_key).is_ok();

    info!(
        "[agent] Heartbeat cycle finished for {} (delivered: {delivered})",
        config.rig_id
    );

    delivered
}

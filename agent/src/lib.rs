pub(crate) mod activity;
pub mod configuration;
pub(crate) mod cycle;
pub(crate) mod error;
pub(crate) mod heartbeat;
pub(crate) mod metrics;
pub(crate) mod network;
pub mod start;
pub(crate) mod status;
pub(crate) mod utils;

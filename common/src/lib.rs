pub mod heartbeat;
pub mod system;

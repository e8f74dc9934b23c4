pub mod admin;
pub mod config;
pub mod topics;

#[cfg(test)]
pub mod testing;

pub use admin::{AdminError, ClusterAdmin, KafkaAdminClient};
pub use config::KafkaConfig;

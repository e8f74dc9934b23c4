//! Topic listing from live cluster metadata.

use std::time::Duration;

use super::admin::{AdminError, ClusterAdmin};

/// Topics whose names start with this prefix are reserved by the messaging
/// system and excluded from user-facing listings.
pub const INTERNAL_TOPIC_PREFIX: &str = "_";

/// Read-only topic summary, rebuilt on every query. Never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicSummary {
    pub name: String,
    pub partitions: usize,
    pub replication_factor: usize,
}

/// Query live metadata and summarize the non-internal topics, sorted by name.
///
/// The replication factor is taken from the first partition's replica list,
/// 0 when the topic has no partitions.
pub async fn list_topics(
    admin: &dyn ClusterAdmin,
    timeout: Duration,
) -> Result<Vec<TopicSummary>, AdminError> {
    let metadata = admin.list_metadata(timeout).await?;

    let mut topics: Vec<TopicSummary> = metadata
        .topics
        .into_iter()
        .filter(|topic| !topic.name.starts_with(INTERNAL_TOPIC_PREFIX))
        .map(|topic| TopicSummary {
            partitions: topic.partitions.len(),
            replication_factor: topic
                .partitions
                .first()
                .map(|partition| partition.replicas.len())
                .unwrap_or(0),
            name: topic.name,
        })
        .collect();

    topics.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(topics)
}

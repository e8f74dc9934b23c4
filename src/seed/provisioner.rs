//! Topic provisioning against a ready cluster.

use std::time::Duration;
use tracing::{error, info, warn};

use crate::core::admin::{ClusterAdmin, CreateTopicResult, TopicSpec};
use crate::core::topics::INTERNAL_TOPIC_PREFIX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProvisionStatus {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Per-spec result of a provisioning run. Outcomes are reported in the order
/// the broker resolves them, one per requested topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub topic: String,
    pub status: ProvisionStatus,
}

/// Submit all creation requests as one batch and classify each result.
///
/// The caller must have confirmed readiness first. An "already exists" error
/// is benign and normalized to success; any other error is reported for that
/// topic without aborting its siblings. If the batch submission itself fails,
/// every spec is reported as failed with the submission error.
pub async fn provision(admin: &dyn ClusterAdmin, specs: &[TopicSpec]) -> Vec<ProvisionOutcome> {
    info!("Creating {} demo topics...", specs.len());

    match admin.create_topics(specs).await {
        Ok(results) => results.into_iter().map(classify).collect(),
        Err(err) => {
            let reason = err.to_string();
            error!("Topic creation request failed: {}", reason);
            specs
                .iter()
                .map(|spec| ProvisionOutcome {
                    topic: spec.name.clone(),
                    status: ProvisionStatus::Failed(reason.clone()),
                })
                .collect()
        }
    }
}

fn classify(result: CreateTopicResult) -> ProvisionOutcome {
    let status = match result.result {
        Ok(()) => {
            info!("Topic '{}' created successfully", result.name);
            ProvisionStatus::Created
        }
        Err(reason) if reason.to_lowercase().contains("already exists") => {
            info!("Topic '{}' already exists", result.name);
            ProvisionStatus::AlreadyExists
        }
        Err(reason) => {
            error!("Failed to create topic '{}': {}", result.name, reason);
            ProvisionStatus::Failed(reason)
        }
    };
    ProvisionOutcome {
        topic: result.name,
        status,
    }
}

/// Verification pass after provisioning: report the total topic count and the
/// sorted non-internal topic names from live metadata.
pub async fn report_cluster_topics(admin: &dyn ClusterAdmin, timeout: Duration) {
    match admin.list_metadata(timeout).await {
        Ok(metadata) => {
            info!("Total topics in cluster: {}", metadata.topics.len());
            let mut names: Vec<&str> = metadata
                .topics
                .iter()
                .map(|topic| topic.name.as_str())
                .filter(|name| !name.starts_with(INTERNAL_TOPIC_PREFIX))
                .collect();
            names.sort_unstable();
            info!("Topics:");
            for name in names {
                info!("  - {}", name);
            }
        }
        Err(err) => warn!("Could not verify created topics: {}", err),
    }
}

//! Cluster readiness probing.

use std::time::Duration;
use tracing::{info, warn};

use crate::core::admin::ClusterAdmin;

/// Timeout for a single readiness probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll cluster metadata at a fixed interval until it answers.
///
/// Returns true as soon as a probe succeeds. After `max_attempts` consecutive
/// failures returns false; there is no sleep after the final attempt.
pub async fn wait_until_ready(
    admin: &dyn ClusterAdmin,
    max_attempts: u32,
    delay: Duration,
) -> bool {
    info!("Waiting for Kafka to be ready...");
    for attempt in 1..=max_attempts {
        match admin.list_metadata(PROBE_TIMEOUT).await {
            Ok(metadata) => {
                info!(
                    "Kafka is ready! Found {} existing topics.",
                    metadata.topics.len()
                );
                return true;
            }
            Err(err) => {
                warn!(
                    "Attempt {}/{}: Kafka not ready yet ({})",
                    attempt, max_attempts, err
                );
                if attempt < max_attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MockClusterAdmin;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempts_with_one_fewer_sleep() {
        let admin = MockClusterAdmin::failing("connection refused");
        let delay = Duration::from_secs(2);
        let start = Instant::now();

        let ready = wait_until_ready(&admin, 5, delay).await;

        assert!(!ready);
        assert_eq!(admin.metadata_calls(), 5);
        // 5 attempts, 4 sleeps: no sleep after the final failure.
        assert_eq!(start.elapsed(), delay * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_probing_once_the_cluster_answers() {
        let admin = MockClusterAdmin::ready_after(2, vec![("user-events", vec![vec![1], vec![1]])]);
        let delay = Duration::from_secs(2);
        let start = Instant::now();

        let ready = wait_until_ready(&admin, 30, delay).await;

        assert!(ready);
        assert_eq!(admin.metadata_calls(), 3);
        assert_eq!(start.elapsed(), delay * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_never_sleeps() {
        let admin = MockClusterAdmin::with_topics(Vec::new());
        let start = Instant::now();

        assert!(wait_until_ready(&admin, 30, Duration::from_secs(2)).await);
        assert_eq!(admin.metadata_calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

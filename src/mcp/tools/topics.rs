//! Topic listing tool

use std::time::Duration;

use crate::core::topics::{self, TopicSummary};
use crate::core::{KafkaAdminClient, KafkaConfig};

/// Handle the `list_topics` tool call.
///
/// A fresh connection is opened per call; the cluster is the source of truth
/// and nothing is cached between invocations.
pub async fn list_topics(config: &KafkaConfig) -> String {
    let timeout = Duration::from_millis(config.metadata_timeout_ms);

    let result = match KafkaAdminClient::connect(config) {
        Ok(admin) => topics::list_topics(&admin, timeout).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(topics) => format_topics(&topics),
        Err(err) => format!(
            "Error listing topics: {}\n\nMake sure Kafka is running at {}",
            err, config.bootstrap_servers
        ),
    }
}

fn format_topics(topics: &[TopicSummary]) -> String {
    if topics.is_empty() {
        return "No topics found in the Kafka cluster.".to_string();
    }

    let mut output = format!("Found {} topic(s):\n\n", topics.len());
    for topic in topics {
        output.push_str(&format!("- **{}**\n", topic.name));
        output.push_str(&format!("  - Partitions: {}\n", topic.partitions));
        output.push_str(&format!(
            "  - Replication Factor: {}\n\n",
            topic.replication_factor
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_renders_the_literal_no_topics_message() {
        assert_eq!(format_topics(&[]), "No topics found in the Kafka cluster.");
    }

    #[test]
    fn renders_one_bulleted_block_per_topic() {
        let topics = vec![
            TopicSummary {
                name: "alpha".to_string(),
                partitions: 2,
                replication_factor: 1,
            },
            TopicSummary {
                name: "zeta".to_string(),
                partitions: 1,
                replication_factor: 3,
            },
        ];

        let output = format_topics(&topics);
        assert!(output.starts_with("Found 2 topic(s):\n\n"));
        assert!(output.contains("- **alpha**\n  - Partitions: 2\n  - Replication Factor: 1\n"));
        assert!(output.contains("- **zeta**\n  - Partitions: 1\n  - Replication Factor: 3\n"));
    }
}

//! Non-interactive provisioning entry point: wait for the cluster, then
//! create the configured topic set and verify the result.
//!
//! Errors are logged, never surfaced as process failure codes.

pub mod prober;
pub mod provisioner;

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

use crate::core::admin::TopicSpec;
use crate::core::{KafkaAdminClient, KafkaConfig};

const DEFAULT_BOOTSTRAP_SERVERS: &str = "kafka:29092";

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[arg(
        long,
        help = "Kafka bootstrap servers (overrides KAFKA_BOOTSTRAP_SERVERS, default kafka:29092)"
    )]
    bootstrap_servers: Option<String>,

    #[arg(long, default_value_t = 30, help = "Readiness probe attempts before giving up")]
    max_attempts: u32,

    #[arg(long, default_value_t = 2, help = "Seconds between readiness probes")]
    delay_seconds: u64,

    #[arg(
        long,
        help = "JSON file with the topics to create (defaults to the built-in demo set)"
    )]
    topics_file: Option<std::path::PathBuf>,
}

/// The demo set used when no topics file is supplied.
fn demo_topics() -> Vec<TopicSpec> {
    vec![
        TopicSpec::new("user-events", 2, 1),
        TopicSpec::new("system-logs", 1, 1),
        TopicSpec::new("order-processing", 2, 1),
    ]
}

fn parse_topics(raw: &str) -> Result<Vec<TopicSpec>> {
    serde_json::from_str(raw).context("invalid topics file: expected a JSON array of topic specs")
}

fn load_topics(path: &Path) -> Result<Vec<TopicSpec>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read topics file {}", path.display()))?;
    parse_topics(&raw)
}

pub async fn run(args: SeedArgs) -> Result<()> {
    let config = KafkaConfig::resolve(args.bootstrap_servers, DEFAULT_BOOTSTRAP_SERVERS);
    info!("Connecting to Kafka at {}...", config.bootstrap_servers);

    let admin = match KafkaAdminClient::connect(&config) {
        Ok(admin) => admin,
        Err(err) => {
            error!("Could not configure the admin client: {}", err);
            return Ok(());
        }
    };

    let delay = Duration::from_secs(args.delay_seconds);
    if !prober::wait_until_ready(&admin, args.max_attempts, delay).await {
        error!("Kafka is not ready after waiting. Exiting.");
        return Ok(());
    }

    let specs = match &args.topics_file {
        Some(path) => match load_topics(path) {
            Ok(specs) => specs,
            Err(err) => {
                error!("{:#}", err);
                return Ok(());
            }
        },
        None => demo_topics(),
    };

    provisioner::provision(&admin, &specs).await;
    provisioner::report_cluster_topics(&admin, Duration::from_millis(config.metadata_timeout_ms))
        .await;

    info!("Demo topics setup complete!");
    Ok(())
}

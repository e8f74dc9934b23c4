//! Cluster administration seam.
//!
//! `ClusterAdmin` is the interface the prober, provisioner and lister are
//! written against; `KafkaAdminClient` binds it to rdkafka's `AdminClient`.

use async_trait::async_trait;
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::config::ClientConfig;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use super::config::KafkaConfig;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("{0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
    #[error("{0}")]
    Connect(String),
}

/// A topic to create, as accepted by the provisioner.
#[derive(Clone, Debug, Deserialize)]
pub struct TopicSpec {
    pub name: String,
    pub partitions: i32,
    pub replication_factor: i32,
}

impl TopicSpec {
    pub fn new(name: &str, partitions: i32, replication_factor: i32) -> Self {
        Self {
            name: name.to_string(),
            partitions,
            replication_factor,
        }
    }
}

/// Broker-reported cluster metadata, reduced to what the tools consume.
#[derive(Clone, Debug, Default)]
pub struct ClusterMetadata {
    pub topics: Vec<TopicMetadata>,
}

#[derive(Clone, Debug)]
pub struct TopicMetadata {
    pub name: String,
    pub partitions: Vec<PartitionMetadata>,
}

#[derive(Clone, Debug)]
pub struct PartitionMetadata {
    pub id: i32,
    pub replicas: Vec<i32>,
}

/// Per-topic result of a batched creation request. The error side carries
/// the raw broker error text so callers can classify it.
#[derive(Clone, Debug)]
pub struct CreateTopicResult {
    pub name: String,
    pub result: Result<(), String>,
}

/// Administrative view of the cluster: a metadata query and a batched
/// topic-creation request.
#[async_trait]
pub trait ClusterAdmin: Send + Sync {
    async fn list_metadata(&self, timeout: Duration) -> Result<ClusterMetadata, AdminError>;

    async fn create_topics(
        &self,
        specs: &[TopicSpec],
    ) -> Result<Vec<CreateTopicResult>, AdminError>;
}

/// rdkafka-backed admin client. One instance per invocation; it holds no
/// resources beyond the call's lifetime.
pub struct KafkaAdminClient {
    inner: AdminClient<DefaultClientContext>,
}

impl KafkaAdminClient {
    pub fn connect(config: &KafkaConfig) -> Result<Self, AdminError> {
        let inner = ClientConfig::new()
            .set("bootstrap.servers", &config.bootstrap_servers)
            .create()
            .map_err(|err| AdminError::Connect(format!("cannot create admin client: {}", err)))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl ClusterAdmin for KafkaAdminClient {
    async fn list_metadata(&self, timeout: Duration) -> Result<ClusterMetadata, AdminError> {
        let metadata = self.inner.inner().fetch_metadata(None, timeout)?;
        let topics = metadata
            .topics()
            .iter()
            .map(|topic| TopicMetadata {
                name: topic.name().to_string(),
                partitions: topic
                    .partitions()
                    .iter()
                    .map(|partition| PartitionMetadata {
                        id: partition.id(),
                        replicas: partition.replicas().to_vec(),
                    })
                    .collect(),
            })
            .collect();
        Ok(ClusterMetadata { topics })
    }

    async fn create_topics(
        &self,
        specs: &[TopicSpec],
    ) -> Result<Vec<CreateTopicResult>, AdminError> {
        let new_topics: Vec<NewTopic> = specs
            .iter()
            .map(|spec| {
                NewTopic::new(
                    &spec.name,
                    spec.partitions,
                    TopicReplication::Fixed(spec.replication_factor),
                )
            })
            .collect();

        let results = self
            .inner
            .create_topics(new_topics.iter(), &AdminOptions::new())
            .await?;

        Ok(results
            .into_iter()
            .map(|result| match result {
                Ok(name) => CreateTopicResult {
                    name,
                    result: Ok(()),
                },
                Err((name, code)) => CreateTopicResult {
                    name,
                    result: Err(code.to_string()),
                },
            })
            .collect())
    }
}

//! Scripted `ClusterAdmin` double for unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::admin::{
    AdminError, ClusterAdmin, ClusterMetadata, CreateTopicResult, PartitionMetadata,
    TopicMetadata, TopicSpec,
};

pub struct MockClusterAdmin {
    /// Number of leading `list_metadata` calls that fail before `metadata`
    /// is served. `usize::MAX` means every call fails.
    fail_first: usize,
    error_text: String,
    metadata: ClusterMetadata,
    metadata_calls: AtomicUsize,
    create_response: Mutex<Result<Vec<CreateTopicResult>, String>>,
}

impl MockClusterAdmin {
    /// Metadata is served immediately; each topic is (name, replica list per
    /// partition).
    pub fn with_topics(topics: Vec<(&str, Vec<Vec<i32>>)>) -> Self {
        Self::ready_after(0, topics)
    }

    /// Every metadata query fails with `error_text`.
    pub fn failing(error_text: &str) -> Self {
        let mut mock = Self::with_topics(Vec::new());
        mock.fail_first = usize::MAX;
        mock.error_text = error_text.to_string();
        mock
    }

    /// The first `fail_first` metadata queries fail, later ones succeed.
    pub fn ready_after(fail_first: usize, topics: Vec<(&str, Vec<Vec<i32>>)>) -> Self {
        let topics = topics
            .into_iter()
            .map(|(name, partitions)| TopicMetadata {
                name: name.to_string(),
                partitions: partitions
                    .into_iter()
                    .enumerate()
                    .map(|(id, replicas)| PartitionMetadata {
                        id: id as i32,
                        replicas,
                    })
                    .collect(),
            })
            .collect();
        Self {
            fail_first,
            error_text: "connection refused".to_string(),
            metadata: ClusterMetadata { topics },
            metadata_calls: AtomicUsize::new(0),
            create_response: Mutex::new(Ok(Vec::new())),
        }
    }

    pub fn with_create_results(self, results: Vec<(&str, Result<(), &str>)>) -> Self {
        let results = results
            .into_iter()
            .map(|(name, result)| CreateTopicResult {
                name: name.to_string(),
                result: result.map_err(|reason| reason.to_string()),
            })
            .collect();
        *self.create_response.lock().unwrap() = Ok(results);
        self
    }

    pub fn with_create_error(self, error_text: &str) -> Self {
        *self.create_response.lock().unwrap() = Err(error_text.to_string());
        self
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterAdmin for MockClusterAdmin {
    async fn list_metadata(&self, _timeout: Duration) -> Result<ClusterMetadata, AdminError> {
        let call = self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_first {
            Err(AdminError::Connect(self.error_text.clone()))
        } else {
            Ok(self.metadata.clone())
        }
    }

    async fn create_topics(
        &self,
        _specs: &[TopicSpec],
    ) -> Result<Vec<CreateTopicResult>, AdminError> {
        match &*self.create_response.lock().unwrap() {
            Ok(results) => Ok(results.clone()),
            Err(reason) => Err(AdminError::Connect(reason.clone())),
        }
    }
}

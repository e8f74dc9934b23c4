/// Configuration for reaching the Kafka cluster's admin interface
#[derive(Clone, Debug)]
pub struct KafkaConfig {
    pub bootstrap_servers: String,
    pub metadata_timeout_ms: u64,
}

impl KafkaConfig {
    /// Resolve the endpoint: explicit flag, then KAFKA_BOOTSTRAP_SERVERS,
    /// then the entry point's default.
    pub fn resolve(flag: Option<String>, default_servers: &str) -> Self {
        let bootstrap_servers = flag.unwrap_or_else(|| {
            std::env::var("KAFKA_BOOTSTRAP_SERVERS")
                .unwrap_or_else(|_| default_servers.to_string())
        });
        Self {
            bootstrap_servers,
            metadata_timeout_ms: 10_000,
        }
    }
}

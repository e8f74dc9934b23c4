//! MCP (Model Context Protocol) server implementation
//!
//! Exposes Kafka cluster introspection to AI assistants over a stdio
//! transport. The tool surface is a single capability, `list_topics`.

pub mod server;
pub mod tools;

use anyhow::Result;
use clap::Args;

use crate::core::KafkaConfig;

pub use server::KafkaMcpServer;

const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(
        long,
        help = "Kafka bootstrap servers (overrides KAFKA_BOOTSTRAP_SERVERS, default localhost:9092)"
    )]
    bootstrap_servers: Option<String>,
}

pub async fn run_mcp_server(args: ServeArgs) -> Result<()> {
    use rmcp::ServiceExt;
    use tokio::io::{stdin, stdout};

    let config = KafkaConfig::resolve(args.bootstrap_servers, DEFAULT_BOOTSTRAP_SERVERS);
    tracing::info!("Kafka endpoint configured as {}", config.bootstrap_servers);

    let server = KafkaMcpServer::new(config);
    let transport = (stdin(), stdout());
    let service = server.serve(transport).await?;

    tracing::info!("MCP server running, waiting for requests...");
    service.waiting().await?;

    Ok(())
}

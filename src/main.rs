mod core;
mod mcp;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kafka-inspector")]
#[command(about = "Kafka Inspector - demo topic seeding and an MCP server for cluster introspection", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create demo topics after waiting for the cluster to become ready
    #[command(display_order = 1)]
    Seed(seed::SeedArgs),

    /// Start the MCP server on stdin/stdout
    #[command(display_order = 2)]
    Serve(mcp::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr: in serve mode stdout carries the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed(args) => seed::run(args).await,
        Commands::Serve(args) => {
            tracing::info!("Starting kafka-inspector MCP server");
            mcp::run_mcp_server(args).await
        }
    }
}

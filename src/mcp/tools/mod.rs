//! MCP Tool implementations
//!
//! Each module contains tool functions that query the Kafka cluster and
//! return human-readable output for AI assistants.

pub mod topics;

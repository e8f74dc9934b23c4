//! MCP Server implementation
//!
//! Contains the KafkaMcpServer struct, the advertised tool list,
//! and the ServerHandler implementation.

use rmcp::{model::*, ErrorData as McpError, ServerHandler};
use std::sync::Arc;

use super::tools;
use crate::core::KafkaConfig;

#[derive(Clone)]
pub struct KafkaMcpServer {
    config: Arc<KafkaConfig>,
}

impl KafkaMcpServer {
    pub fn new(config: KafkaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn tool_list() -> Vec<Tool> {
        vec![Tool::new(
            "list_topics",
            "List all Kafka topics with basic information including partition count and replication factor",
            Arc::new(empty_input_schema()),
        )]
    }

    /// Route a tool call by name. An unregistered name is answered with a
    /// plain text message rather than a protocol error.
    pub async fn dispatch(&self, name: &str) -> String {
        match name {
            "list_topics" => tools::topics::list_topics(&self.config).await,
            other => format!("Unknown tool: {}", other),
        }
    }
}

fn empty_input_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert(
        "type".to_string(),
        serde_json::Value::String("object".to_string()),
    );
    schema.insert(
        "properties".to_string(),
        serde_json::Value::Object(JsonObject::new()),
    );
    schema.insert("required".to_string(), serde_json::Value::Array(Vec::new()));
    schema
}

impl ServerHandler for KafkaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: Self::tool_list(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.dispatch(request.name.as_ref()).await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

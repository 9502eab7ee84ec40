use crate::app::App;
use crate::constants::server::{NAME, PROTOCOL_VERSION, VERSION};
use crate::errors::{ErrorCode, McpError, ToolError};
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};
use crate::services::dispatcher::CallToolResult;
use crate::services::logger::Logger;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

pub struct McpServer {
    app: Arc<App>,
    logger: Logger,
}

fn render_tool_result(result: &CallToolResult) -> Value {
    json!({
        "content": [ { "type": "text", "text": result.text } ],
        "isError": result.is_error,
    })
}

fn encode(response: &JsonRpcResponse) -> String {
    // Only Values and strings inside; serialization cannot fail.
    serde_json::to_string(response).unwrap_or_default()
}

impl McpServer {
    pub fn new(app: Arc<App>) -> Self {
        let logger = app.logger.child("mcp");
        Self { app, logger }
    }

    async fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {"listChanged": false}},
            "serverInfo": {"name": NAME, "version": VERSION},
        })
    }

    async fn handle_tools_list(&self) -> Value {
        json!({ "tools": self.app.registry.definitions() })
    }

    async fn handle_tools_call(&self, params: &Value) -> Result<Value, McpError> {
        let params = params.as_object().cloned().unwrap_or_default();
        let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
        if name.is_empty() {
            return Err(McpError::new(ErrorCode::InvalidParams, "Missing tool name"));
        }
        // Absent arguments reach the handler as null and fail its object check.
        let args = params.get("arguments").cloned().unwrap_or(Value::Null);

        let result = self
            .app
            .registry
            .call(name, args)
            .await
            .ok_or_else(|| McpError::unknown_tool(name))?;
        if result.is_error {
            self.logger
                .debug("tool returned error", Some(&json!({"tool": name})));
        }
        Ok(render_tool_result(&result))
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);
        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.handle_initialize().await),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.handle_tools_list().await),
            "tools/call" => match self.handle_tools_call(&request.params).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(err) => JsonRpcResponse::from_error(id, err),
            },
            _ if request.method.starts_with("notifications/") => {
                JsonRpcResponse::success(id, json!({}))
            }
            _ => JsonRpcResponse::failure(
                id,
                ErrorCode::MethodNotFound.as_i32(),
                "Method not found".to_string(),
            ),
        };
        Some(response)
    }

    /// Handles one line of the stdio stream and returns the serialized reply,
    /// if any.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let parsed: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(err) => {
                self.logger
                    .warn("unparseable message", Some(&json!({"error": err.to_string()})));
                return Some(encode(&JsonRpcResponse::failure(
                    Value::Null,
                    ErrorCode::ParseError.as_i32(),
                    "Parse error".to_string(),
                )));
            }
        };

        let id = parsed.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(parsed) {
            Ok(req) => req,
            Err(_) => {
                return Some(encode(&JsonRpcResponse::failure(
                    id,
                    ErrorCode::InvalidRequest.as_i32(),
                    "Invalid request".to_string(),
                )));
            }
        };

        self.dispatch(request).await.map(|response| encode(&response))
    }

    pub async fn run_stdio(&self) -> Result<(), ToolError> {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin).lines();
        let mut writer = BufWriter::new(stdout);

        self.logger.info("serving on stdio", None);
        while let Some(line) = reader
            .next_line()
            .await
            .map_err(|err| ToolError::internal(err.to_string()))?
        {
            if let Some(payload) = self.handle_line(&line).await {
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        self.logger.info("stdin closed, shutting down", None);

        Ok(())
    }
}

pub async fn run_stdio(app: App) -> Result<(), ToolError> {
    let server = McpServer::new(Arc::new(app));
    server.run_stdio().await
}

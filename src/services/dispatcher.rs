//! The single request pipeline shared by every registry tool.
//!
//! validate path params -> render URL -> encode body -> sign -> send ->
//! interpret status -> decode response. Failures are returned as
//! [`ToolError`] and only become tool results through the
//! [`CallToolResult`] conversion.

use crate::constants::http::{ACCEPT, APPLICATION_JSON, CONTENT_TYPE, ERROR_STATUS_FLOOR};
use crate::constants::limits::LOG_BODY_PREVIEW_BYTES;
use crate::errors::ToolError;
use crate::registry::{Decoded, Operation, ResponseBody};
use crate::services::logger::Logger;
use crate::services::transport::{HttpRequest, HttpTransport, RequestSigner};
use crate::utils::path_template;
use crate::utils::query::build_query_string;
use crate::utils::text::truncate_utf8_prefix;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOutcome {
    /// Body decoded into the declared schema and re-printed.
    Typed,
    /// Success status but the body did not match the schema; text is the raw body.
    DecodeFallback,
    /// Content endpoint; text is the body as received.
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub outcome: ResponseOutcome,
}

/// What a tool invocation hands back to the MCP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToolResult {
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The handler boundary: every pipeline failure becomes an error result.
impl From<Result<ToolOutput, ToolError>> for CallToolResult {
    fn from(result: Result<ToolOutput, ToolError>) -> Self {
        match result {
            Ok(output) => Self::success(output.text),
            Err(err) => Self::error(err.message),
        }
    }
}

pub struct Dispatcher {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    signer: Option<Arc<dyn RequestSigner>>,
    logger: Logger,
}

impl Dispatcher {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            signer: None,
            logger: Logger::new("registry-mcp").child("dispatch"),
        }
    }

    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(&self, operation: &Operation, args: &Value) -> Result<ToolOutput, ToolError> {
        let args = args.as_object().ok_or_else(ToolError::invalid_arguments)?;
        let path_values = collect_path_values(operation, args)?;

        let url = format!(
            "{}{}{}",
            self.base_url,
            path_template::render(operation.path, &path_values),
            build_query_string(args, operation.query)
        );

        let mut request = HttpRequest::new(operation.method, url);
        request.set_header(ACCEPT, APPLICATION_JSON);
        if let Some(schema) = operation.request {
            let body = schema.encode_body(&Value::Object(args.clone()))?;
            request.set_header(CONTENT_TYPE, APPLICATION_JSON);
            request.body = Some(body);
        }
        if let Some(signer) = &self.signer {
            signer
                .sign(&mut request)
                .map_err(|err| ToolError::request_failed(err.to_string()))?;
        }

        let call_id = Uuid::new_v4().to_string();
        self.logger.debug(
            "dispatch",
            Some(&json!({
                "call_id": call_id,
                "operation": operation.id,
                "method": operation.method.as_str(),
                "url": request.url,
            })),
        );

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                self.logger.warn(
                    "request failed",
                    Some(&json!({
                        "call_id": call_id,
                        "operation": operation.id,
                        "error": err.to_string(),
                    })),
                );
                return Err(ToolError::request_failed(err.to_string()));
            }
        };

        let body_text = response.text();
        if response.status >= ERROR_STATUS_FLOOR {
            self.logger.warn(
                "api error",
                Some(&json!({
                    "call_id": call_id,
                    "operation": operation.id,
                    "status": response.status,
                    "body": truncate_utf8_prefix(&body_text, LOG_BODY_PREVIEW_BYTES),
                })),
            );
            return Err(ToolError::api(response.status, &body_text));
        }

        let schema = match operation.response {
            ResponseBody::Raw => {
                return Ok(ToolOutput {
                    text: body_text,
                    outcome: ResponseOutcome::Raw,
                })
            }
            ResponseBody::Typed(schema) => schema,
        };

        match schema.decode_pretty(&response.body) {
            Decoded::Pretty(text) => Ok(ToolOutput {
                text,
                outcome: ResponseOutcome::Typed,
            }),
            Decoded::Mismatch(err) => {
                self.logger.debug(
                    "response did not match schema, returning raw body",
                    Some(&json!({
                        "call_id": call_id,
                        "operation": operation.id,
                        "error": err.to_string(),
                    })),
                );
                Ok(ToolOutput {
                    text: body_text,
                    outcome: ResponseOutcome::DecodeFallback,
                })
            }
            Decoded::Unprintable(err) => Err(ToolError::formatting(format!(
                "Failed to format response: {}",
                err
            ))),
        }
    }
}

/// Validates every path placeholder in template order, before any I/O.
fn collect_path_values<'a>(
    operation: &Operation,
    args: &'a Map<String, Value>,
) -> Result<HashMap<&'static str, &'a str>, ToolError> {
    let mut values = HashMap::new();
    for name in operation.path_params() {
        let value = match args.get(name) {
            None => return Err(ToolError::missing_parameter(name)),
            Some(Value::String(text)) => text.as_str(),
            Some(_) => return Err(ToolError::invalid_parameter_type(name)),
        };
        values.insert(name, value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::all_operations;

    fn find(id: &str) -> Operation {
        all_operations()
            .iter()
            .copied()
            .find(|op| op.id == id)
            .unwrap_or_else(|| panic!("operation {} must exist", id))
    }

    #[test]
    fn path_values_fail_on_first_missing_in_template_order() {
        let args = json!({"project": "demo"});
        let err = collect_path_values(&find("GetApi"), args.as_object().expect("object"))
            .expect_err("location missing");
        assert_eq!(err.message, "Missing required path parameter: location");
    }

    #[test]
    fn path_values_reject_non_string_ids() {
        let args = json!({"project": "demo", "location": 7, "api": "petstore"});
        let err = collect_path_values(&find("GetApi"), args.as_object().expect("object"))
            .expect_err("location is a number");
        assert_eq!(err.code, "INVALID_PARAMETER_TYPE");
    }

    #[test]
    fn null_path_value_is_a_wrong_type_not_a_missing_key() {
        let args = json!({"project": null, "location": "global", "api": "petstore"});
        let err = collect_path_values(&find("GetApi"), args.as_object().expect("object"))
            .expect_err("project null");
        assert_eq!(err.code, "INVALID_PARAMETER_TYPE");
        assert_eq!(err.message, "Invalid path parameter: project");
    }

    #[test]
    fn call_tool_result_from_pipeline_result() {
        let ok: CallToolResult = Ok(ToolOutput {
            text: "{}".to_string(),
            outcome: ResponseOutcome::Typed,
        })
        .into();
        assert_eq!(ok, CallToolResult::success("{}"));

        let failed: CallToolResult = Err(ToolError::missing_parameter("api")).into();
        assert_eq!(failed, CallToolResult::error("Missing required path parameter: api"));
    }

    #[test]
    fn call_tool_result_serializes_is_error_camel_case() {
        let value = serde_json::to_value(CallToolResult::error("boom")).expect("json");
        assert_eq!(value, json!({"text": "boom", "isError": true}));
    }
}

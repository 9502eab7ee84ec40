use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    InvalidArguments,
    MissingParameter,
    InvalidParameterType,
    Encoding,
    RequestFailed,
    Api,
    Formatting,
    Internal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
            details: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_arguments() -> Self {
        Self::new(
            ToolErrorKind::InvalidArguments,
            "INVALID_ARGUMENTS",
            "Invalid arguments object",
        )
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            ToolErrorKind::MissingParameter,
            "MISSING_PARAMETER",
            format!("Missing required path parameter: {}", name),
        )
        .with_details(serde_json::json!({ "parameter": name }))
    }

    pub fn invalid_parameter_type(name: &str) -> Self {
        Self::new(
            ToolErrorKind::InvalidParameterType,
            "INVALID_PARAMETER_TYPE",
            format!("Invalid path parameter: {}", name),
        )
        .with_details(serde_json::json!({ "parameter": name, "expected": "string" }))
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Encoding, "ENCODING_ERROR", message)
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::RequestFailed, "REQUEST_FAILED", message)
    }

    /// Backend answered with status >= 400. The body is surfaced verbatim.
    pub fn api(status: u16, body: &str) -> Self {
        Self::new(
            ToolErrorKind::Api,
            "API_ERROR",
            format!("API error (status {}): {}", status, body),
        )
        .with_details(serde_json::json!({ "status": status }))
    }

    pub fn formatting(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Formatting, "FORMATTING_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Internal, "INTERNAL", message)
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(|v| v.as_u64())
            .and_then(|v| u16::try_from(v).ok())
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ToolError {}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        ToolError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_body_verbatim_and_status() {
        let err = ToolError::api(404, r#"{"code":5,"message":"not found"}"#);
        assert_eq!(err.kind, ToolErrorKind::Api);
        assert!(err.message.contains(r#"{"code":5,"message":"not found"}"#));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let err = ToolError::missing_parameter("location");
        assert_eq!(err.code, "MISSING_PARAMETER");
        assert_eq!(err.message, "Missing required path parameter: location");
        assert!(err.status().is_none());
    }
}

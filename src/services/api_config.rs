use crate::constants::{env, protocols::ALLOWED_HTTP};
use crate::errors::ToolError;
use url::Url;

/// Process-wide backend settings. Read once at startup, never mutated.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ToolError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Explicit values win over the environment.
    pub fn resolve(base_url: Option<&str>, token: Option<String>) -> Result<Self, ToolError> {
        let base_url = match base_url {
            Some(value) => value.to_string(),
            None => std::env::var(env::BASE_URL).map_err(|_| {
                ToolError::internal("Backend base URL is not configured").with_hint(format!(
                    "Pass --base-url or set {} (e.g. http://localhost:8080).",
                    env::BASE_URL
                ))
            })?,
        };
        let token = token.or_else(|| std::env::var(env::TOKEN).ok());
        Self::new(&base_url, token)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ToolError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|err| ToolError::internal(format!("Invalid base URL '{}': {}", trimmed, err)))?;
    if !ALLOWED_HTTP.contains(&parsed.scheme()) {
        return Err(ToolError::internal(
            "Only http/https base URLs are supported",
        ));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://localhost:8080/", None).expect("config");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn keeps_path_prefix() {
        let config = ApiConfig::new("https://gw.example.com/registry", None).expect("config");
        assert_eq!(config.base_url, "https://gw.example.com/registry");
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(ApiConfig::new("ftp://example.com", None).is_err());
        assert!(ApiConfig::new("not a url", None).is_err());
    }

    #[test]
    fn blank_token_is_ignored() {
        let config = ApiConfig::new("http://localhost", Some("  ".to_string())).expect("config");
        assert!(config.token.is_none());
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = ApiConfig::new("http://localhost", Some("secret".to_string())).expect("config");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}

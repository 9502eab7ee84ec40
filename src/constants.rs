pub mod server {
    pub const NAME: &str = "registry-mcp";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PROTOCOL_VERSION: &str = "2025-06-18";
}

pub mod env {
    pub const BASE_URL: &str = "REGISTRY_API_BASE_URL";
    pub const TOKEN: &str = "REGISTRY_API_TOKEN";
    pub const LOG_LEVEL: &str = "REGISTRY_MCP_LOG_LEVEL";
}

pub mod http {
    pub const ACCEPT: &str = "Accept";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const AUTHORIZATION: &str = "Authorization";
    pub const APPLICATION_JSON: &str = "application/json";
    /// Statuses at or above this are surfaced as API errors.
    pub const ERROR_STATUS_FLOOR: u16 = 400;
}

pub mod protocols {
    pub const ALLOWED_HTTP: &[&str] = &["http", "https"];
}

pub mod limits {
    /// Bytes of an error body echoed into log lines.
    pub const LOG_BODY_PREVIEW_BYTES: usize = 512;
}

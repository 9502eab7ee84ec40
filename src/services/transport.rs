//! Outbound HTTP capability used by the dispatcher.
//!
//! The dispatcher only talks to [`HttpTransport`]; production wires in
//! [`ReqwestTransport`], tests substitute a recording fake.

use crate::constants::http::AUTHORIZATION;
use crate::registry::HttpMethod;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Replaces any existing header with the same (case-insensitive) name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("request signing failed: {0}")]
    Signing(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Hook for attaching credentials right before a request leaves the process.
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &mut HttpRequest) -> Result<(), TransportError>;
}

pub struct BearerTokenSigner {
    token: String,
}

impl BearerTokenSigner {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestSigner for BearerTokenSigner {
    fn sign(&self, request: &mut HttpRequest) -> Result<(), TransportError> {
        if self.token.contains(['\r', '\n']) {
            return Err(TransportError::Signing(
                "token contains line breaks".to_string(),
            ));
        }
        request.set_header(AUTHORIZATION, format!("Bearer {}", self.token));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::new(HttpMethod::Get, "http://localhost/v1");
        request.set_header("accept", "text/plain");
        request.set_header("Accept", "application/json");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("ACCEPT"), Some("application/json"));
    }

    #[test]
    fn bearer_signer_sets_authorization() {
        let mut request = HttpRequest::new(HttpMethod::Get, "http://localhost/v1");
        BearerTokenSigner::new("abc123")
            .sign(&mut request)
            .expect("sign");
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn bearer_signer_rejects_header_injection() {
        let mut request = HttpRequest::new(HttpMethod::Get, "http://localhost/v1");
        let err = BearerTokenSigner::new("abc\r\nX-Evil: 1")
            .sign(&mut request)
            .expect_err("must reject");
        assert!(matches!(err, TransportError::Signing(_)));
    }
}

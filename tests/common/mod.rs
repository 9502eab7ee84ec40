#![allow(dead_code)]

use async_trait::async_trait;
use once_cell::sync::Lazy;
use registry_mcp::registry::{all_operations, Operation};
use registry_mcp::services::dispatcher::Dispatcher;
use registry_mcp::services::logger::{LogLevel, Logger};
use registry_mcp::services::transport::{
    HttpRequest, HttpResponse, HttpTransport, TransportError,
};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

pub static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub const BASE_URL: &str = "http://registry.test";

/// Records every request and answers from a script. Once the script is
/// exhausted it answers `200 {}`.
#[derive(Default)]
pub struct FakeTransport {
    requests: StdMutex<Vec<HttpRequest>>,
    script: StdMutex<VecDeque<Result<HttpResponse, String>>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Ok(HttpResponse::new(status, body.to_string())));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("at least one request")
    }

    pub fn last_body_json(&self) -> Value {
        let body = self.last().body.expect("request body");
        serde_json::from_slice(&body).expect("body is json")
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        let next = self.script.lock().expect("script lock").pop_front();
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Body(message)),
            None => Ok(HttpResponse::new(200, "{}")),
        }
    }
}

pub fn quiet_logger() -> Logger {
    Logger::new("registry-mcp-test").with_level(LogLevel::Error)
}

pub fn dispatcher(transport: Arc<FakeTransport>) -> Arc<Dispatcher> {
    Arc::new(Dispatcher::new(BASE_URL, transport).with_logger(quiet_logger()))
}

pub fn operation(id: &str) -> Operation {
    all_operations()
        .iter()
        .copied()
        .find(|op| op.id == id)
        .unwrap_or_else(|| panic!("operation {} must exist", id))
}

/// Arguments naming every path parameter an operation can have.
pub fn full_path_args() -> Value {
    json!({
        "project": "demo",
        "location": "global",
        "api": "petstore",
        "version": "v1",
        "spec": "openapi",
        "deployment": "prod",
        "artifact": "lint",
    })
}

pub fn with_args(base: Value, extra: Value) -> Value {
    let mut merged = base.as_object().cloned().expect("object");
    if let Value::Object(extra) = extra {
        merged.extend(extra);
    }
    Value::Object(merged)
}

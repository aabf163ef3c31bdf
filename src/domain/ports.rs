use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::FieldIssue;

// Method subset the service endpoints actually use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

// An outbound request described as plain data. `path` is relative to the
// transport's base URL.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

// A successful (2xx) reply: status code plus decoded JSON body.
#[derive(Clone, Debug)]
pub struct TransportReply {
    pub status: u16,
    pub body: Value,
}

// How a transport call can fail.
#[derive(Clone, Debug)]
pub enum TransportFailure {
    // The service answered with a non-success status.
    Upstream { status: u16, body: Option<Value> },
    // The request never produced a reply (unreachable host, timeout).
    Connection(String),
    // Transport-internal failure outside HTTP semantics.
    Unexpected(String),
}

// Port for issuing remote calls. Implementations must be safe for
// concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportReply, TransportFailure>;
}

// Port for checking a response body against a declared shape.
pub trait ResponseSchema {
    type Output;

    fn validate(&self, body: &Value) -> Result<Self::Output, Vec<FieldIssue>>;
}

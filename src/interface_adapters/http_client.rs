use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{
    HttpMethod, Transport, TransportFailure, TransportReply, TransportRequest,
};

// Reqwest binding of the transport port. Holds only the base URL and the
// per-request timeout; the inner client is reference-counted, so clones
// share one connection pool and concurrent calls are safe.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportReply, TransportFailure> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        builder = builder.timeout(self.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_builder() {
                TransportFailure::Unexpected(err.to_string())
            } else {
                TransportFailure::Connection(err.to_string())
            }
        })?;

        let status = response.status();
        let body = decode_body(response.text().await.unwrap_or_default());

        if status.is_success() {
            return Ok(TransportReply {
                status: status.as_u16(),
                body,
            });
        }

        Err(TransportFailure::Upstream {
            status: status.as_u16(),
            body: match body {
                Value::Null => None,
                body => Some(body),
            },
        })
    }
}

// Decode a reply body: JSON when it parses, the raw text otherwise, null
// for an empty body.
fn decode_body(text: String) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{Transport, TransportFailure, TransportReply, TransportRequest};

// What the mock transport should do on every call.
#[derive(Clone)]
pub(crate) enum ScriptedOutcome {
    Reply(Value),
    Upstream { status: u16, body: Option<Value> },
    Connection(String),
    Unexpected(String),
}

// Mock transport port: replays one scripted outcome and records every
// request so tests can assert on call counts and request shapes.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    outcome: ScriptedOutcome,
    calls: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    pub(crate) fn replying(body: Value) -> Self {
        Self::with_outcome(ScriptedOutcome::Reply(body))
    }

    pub(crate) fn failing_upstream(status: u16, body: Option<Value>) -> Self {
        Self::with_outcome(ScriptedOutcome::Upstream { status, body })
    }

    pub(crate) fn failing_connection(message: impl Into<String>) -> Self {
        Self::with_outcome(ScriptedOutcome::Connection(message.into()))
    }

    pub(crate) fn failing_unexpected(message: impl Into<String>) -> Self {
        Self::with_outcome(ScriptedOutcome::Unexpected(message.into()))
    }

    fn with_outcome(outcome: ScriptedOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn sent_requests(&self) -> Vec<TransportRequest> {
        let guard = self.calls.lock().expect("calls mutex poisoned");
        guard.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportReply, TransportFailure> {
        {
            let mut guard = self.calls.lock().expect("calls mutex poisoned");
            guard.push(request);
        }

        match self.outcome.clone() {
            ScriptedOutcome::Reply(body) => Ok(TransportReply { status: 200, body }),
            ScriptedOutcome::Upstream { status, body } => {
                Err(TransportFailure::Upstream { status, body })
            }
            ScriptedOutcome::Connection(message) => Err(TransportFailure::Connection(message)),
            ScriptedOutcome::Unexpected(message) => Err(TransportFailure::Unexpected(message)),
        }
    }
}

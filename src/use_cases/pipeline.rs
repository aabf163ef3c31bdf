use serde_json::Value;
use tracing::debug;

use crate::domain::errors::{ErrorDetails, SdkError};
use crate::domain::ports::{ResponseSchema, Transport, TransportFailure, TransportRequest};
use crate::interface_adapters::protocol::ErrorBody;

// The four remote operations, used for log fields and fallback messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    SignIn,
    SignUp,
    VerifyEmail,
    GetProfile,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SignIn => "sign_in",
            Operation::SignUp => "sign_up",
            Operation::VerifyEmail => "verify_email",
            Operation::GetProfile => "get_profile",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::SignIn => "An unknown error occurred during sign in.",
            Operation::SignUp => "An unknown error occurred during sign up.",
            Operation::VerifyEmail => "An unknown error occurred during email verification.",
            Operation::GetProfile => "An unknown error occurred during profile retrieval.",
        }
    }
}

// A failure caught at an operation boundary, before classification.
#[derive(Debug)]
pub(crate) enum CallFailure {
    // Already carries its final shape; must pass through unchanged.
    Normalized(SdkError),
    Transport(TransportFailure),
    // Unexpected failure inside the SDK itself (e.g. body serialization).
    Internal(String),
}

// Reject empty required string inputs before any transport work.
pub(crate) fn require_input<'a>(field: &str, value: &'a str) -> Result<&'a str, CallFailure> {
    if value.is_empty() {
        return Err(CallFailure::Normalized(SdkError::missing_field(field)));
    }
    Ok(value)
}

// Send a request through the transport port and validate the reply body
// against the operation's schema.
pub(crate) async fn execute<T, S>(
    operation: Operation,
    transport: &T,
    request: TransportRequest,
    schema: &S,
) -> Result<S::Output, CallFailure>
where
    T: Transport,
    S: ResponseSchema,
{
    debug!(operation = operation.name(), path = %request.path, "issuing request");

    let reply = transport
        .send(request)
        .await
        .map_err(CallFailure::Transport)?;

    schema
        .validate(&reply.body)
        .map_err(|issues| CallFailure::Normalized(SdkError::invalid_response(issues)))
}

// Single classification entry point, applied at the boundary of every
// operation. The arms form a strict precedence chain: only the first
// matching rule applies.
pub(crate) fn normalize(operation: Operation, failure: CallFailure) -> SdkError {
    match failure {
        CallFailure::Normalized(error) => error,
        CallFailure::Transport(TransportFailure::Upstream { status: _, body }) => {
            let message = body
                .as_ref()
                .and_then(upstream_message)
                .unwrap_or_else(|| "Server error".to_string());
            SdkError::server(message, body.map(ErrorDetails::Body))
        }
        CallFailure::Transport(TransportFailure::Connection(message)) => {
            // Connectivity failures stay folded into the server kind; the
            // network kind is declared but not yet populated.
            SdkError::server(message, None)
        }
        CallFailure::Transport(TransportFailure::Unexpected(message))
        | CallFailure::Internal(message) => {
            if message.is_empty() {
                SdkError::unknown(operation.fallback_message())
            } else {
                SdkError::unknown(message)
            }
        }
    }
}

// Pull a human-readable message out of an upstream error body: the body
// itself when it is a bare string, or its `message` envelope field.
fn upstream_message(body: &Value) -> Option<String> {
    match body {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::String(_) => None,
        _ => serde_json::from_value::<ErrorBody>(body.clone())
            .ok()
            .map(|envelope| envelope.message),
    }
}

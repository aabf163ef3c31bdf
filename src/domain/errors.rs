use std::fmt;

use serde_json::Value;

// Classification tag carried by every SdkError.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SdkErrorKind {
    // Reserved for a future split of connectivity failures out of Server.
    // No call site populates this today.
    Network,
    Validation,
    Server,
    Unknown,
}

impl SdkErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SdkErrorKind::Network => "network",
            SdkErrorKind::Validation => "validation",
            SdkErrorKind::Server => "server",
            SdkErrorKind::Unknown => "unknown",
        }
    }
}

// One field-level schema violation: where it happened and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub reason: String,
}

impl FieldIssue {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Structured payload attached to an SdkError when one exists.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDetails {
    // Field-path issues from a failed response-schema check.
    Schema(Vec<FieldIssue>),
    // Raw error body as returned by the service.
    Body(Value),
}

// The single error value returned by every SDK operation on failure.
#[derive(Clone, Debug, PartialEq)]
pub struct SdkError {
    pub kind: SdkErrorKind,
    pub message: String,
    pub details: Option<ErrorDetails>,
}

impl SdkError {
    pub fn validation(message: impl Into<String>, details: Option<ErrorDetails>) -> Self {
        Self {
            kind: SdkErrorKind::Validation,
            message: message.into(),
            details,
        }
    }

    pub fn server(message: impl Into<String>, details: Option<ErrorDetails>) -> Self {
        Self {
            kind: SdkErrorKind::Server,
            message: message.into(),
            details,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: SdkErrorKind::Unknown,
            message: message.into(),
            details: None,
        }
    }

    // Shorthand for a missing/empty required input, naming the field.
    pub fn missing_field(field: &str) -> Self {
        Self::validation(format!("{field} is required"), None)
    }

    // Shorthand for a response body that failed its schema check.
    pub fn invalid_response(issues: Vec<FieldIssue>) -> Self {
        Self::validation(
            "Invalid API response format",
            Some(ErrorDetails::Schema(issues)),
        )
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for SdkError {}

use serde::{Deserialize, Serialize};

// Request body for the signin endpoint.
#[derive(Debug, Serialize)]
pub struct SignInBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// Request body for the signup endpoint.
#[derive(Debug, Serialize)]
pub struct SignUpBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// Error envelope used by the service for JSON error replies.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

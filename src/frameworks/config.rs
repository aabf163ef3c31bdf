use std::{env, time::Duration};

// Runtime defaults for the transport binding (not operation behavior).

pub fn service_url() -> String {
    env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("AUTH_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

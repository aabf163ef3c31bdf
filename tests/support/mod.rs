// Shared primitives for one-time stub-service bootstrapping across
// integration tests, plus the stub authentication service itself.
use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

// Global base URL used by all tests after the server publishes its bound address.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// One-time guard that ensures the server bootstrap path runs only once.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the stub service is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Spawn an OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Bind to an ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                axum::serve(listener, app())
                    .await
                    .expect("stub auth service failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Wait for URL publication and then wait for the socket to accept connections.
fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("stub auth service did not become ready in time");
}

// In-memory account record held by the stub service.
#[derive(Clone)]
struct Account {
    id: String,
    name: String,
    email: String,
    password: String,
    roles: Vec<String>,
    verification_token: String,
    is_verified: bool,
    created_at: String,
    updated_at: String,
    access_token: String,
}

// Application state holding account storage, keyed by email.
#[derive(Clone)]
struct AppState {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

fn app() -> Router {
    let state = AppState {
        accounts: Arc::new(Mutex::new(HashMap::new())),
    };

    Router::new()
        .route("/user/signup", post(sign_up))
        .route("/user/signin", post(sign_in))
        .route("/user/verify-email", post(verify_email))
        .route("/user/me", get(me))
        .with_state(state)
}

// Request payload for account creation.
#[derive(Debug, Deserialize)]
struct SignUpRequest {
    name: String,
    email: String,
    password: String,
}

// Request payload for sign-in.
#[derive(Debug, Deserialize)]
struct SignInRequest {
    email: String,
    password: String,
}

// Query parameters for email verification.
#[derive(Debug, Deserialize)]
struct VerifyParams {
    token: Option<String>,
}

async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut accounts = state.accounts.lock().await;
    if accounts.contains_key(&payload.email) {
        return Err(error_response(
            StatusCode::CONFLICT,
            "Email already registered",
        ));
    }

    let account = Account {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email.clone(),
        password: payload.password,
        roles: vec!["user".to_string()],
        verification_token: Uuid::new_v4().to_string(),
        is_verified: false,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        access_token: Uuid::new_v4().to_string(),
    };
    let token = account.access_token.clone();
    accounts.insert(payload.email, account);

    Ok(Json(json!({ "access_token": token })))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let accounts = state.accounts.lock().await;
    match accounts.get(&payload.email) {
        Some(account) if account.password == payload.password => {
            Ok(Json(json!({ "access_token": account.access_token })))
        }
        // Bare-string error body, the way the real service reports it.
        _ => Err((StatusCode::UNAUTHORIZED, Json(json!("Invalid credentials")))),
    }
}

async fn verify_email(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let access_token = require_access_token(&headers)?;

    let mut accounts = state.accounts.lock().await;
    let account = accounts
        .values_mut()
        .find(|account| account.access_token == access_token)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "invalid access token"))?;

    match params.token {
        Some(token) if token == account.verification_token => {
            account.is_verified = true;
            account.updated_at = "2024-01-02T00:00:00Z".to_string();
            Ok(Json(json!(true)))
        }
        _ => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Invalid verification token",
        )),
    }
}

async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let access_token = require_access_token(&headers)?;

    let accounts = state.accounts.lock().await;
    let account = accounts
        .values()
        .find(|account| account.access_token == access_token)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "invalid access token"))?;

    Ok(Json(json!({
        "_id": account.id,
        "email": account.email,
        "name": account.name,
        "roles": account.roles,
        "verificationToken": account.verification_token,
        "isVerified": account.is_verified,
        "createdAt": account.created_at,
        "updatedAt": account.updated_at,
    })))
}

fn require_access_token(headers: &HeaderMap) -> Result<String, (StatusCode, Json<Value>)> {
    headers
        .get("x-access-token")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "access token required"))
}

// Helper to build a JSON error envelope.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

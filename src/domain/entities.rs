use serde::{Deserialize, Serialize};

// Caller-supplied credentials for sign-in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

// Caller-supplied details for account creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Tokens issued by the service after sign-in or sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
}

// Account profile as served by the `/user/me` endpoint. Field renames
// carry the wire names used by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    #[serde(rename = "verificationToken")]
    pub verification_token: String,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

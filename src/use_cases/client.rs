use crate::domain::entities::{AuthTokens, Profile, SignInCredentials, SignUpDetails};
use crate::domain::errors::SdkError;
use crate::domain::ports::Transport;
use crate::frameworks::config;
use crate::interface_adapters::http_client::HttpTransport;
use crate::use_cases::get_profile::GetProfileUseCase;
use crate::use_cases::sign_in::SignInUseCase;
use crate::use_cases::sign_up::SignUpUseCase;
use crate::use_cases::verify_email::VerifyEmailUseCase;

// Entry point of the SDK: one transport binding, four operations. Holds
// no other state, so a single client can serve concurrent calls.
pub struct AuthClient<T = HttpTransport> {
    transport: T,
}

impl AuthClient<HttpTransport> {
    // Binds the default reqwest transport to `base_url`. No network
    // activity happens until the first operation call.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: HttpTransport::new(base_url, config::request_timeout()),
        }
    }

    // Binds against the service URL configured in the environment.
    pub fn from_env() -> Self {
        Self::new(config::service_url())
    }
}

impl<T> AuthClient<T>
where
    T: Transport + Clone,
{
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub async fn sign_in(&self, credentials: SignInCredentials) -> Result<AuthTokens, SdkError> {
        let use_case = SignInUseCase {
            transport: self.transport.clone(),
        };
        use_case.execute(credentials).await
    }

    pub async fn sign_up(&self, details: SignUpDetails) -> Result<AuthTokens, SdkError> {
        let use_case = SignUpUseCase {
            transport: self.transport.clone(),
        };
        use_case.execute(details).await
    }

    pub async fn verify_email(
        &self,
        verification_token: &str,
        access_token: &str,
    ) -> Result<bool, SdkError> {
        let use_case = VerifyEmailUseCase {
            transport: self.transport.clone(),
        };
        use_case.execute(verification_token, access_token).await
    }

    pub async fn get_profile(&self, access_token: &str) -> Result<Profile, SdkError> {
        let use_case = GetProfileUseCase {
            transport: self.transport.clone(),
        };
        use_case.execute(access_token).await
    }
}

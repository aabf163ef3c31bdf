use serde_json::to_value;
use tracing::warn;

use crate::domain::entities::{AuthTokens, SignInCredentials};
use crate::domain::errors::SdkError;
use crate::domain::ports::{Transport, TransportRequest};
use crate::interface_adapters::protocol::SignInBody;
use crate::interface_adapters::schemas::TokenSchema;
use crate::use_cases::pipeline::{self, CallFailure, Operation};

// Sign-in use case with an injected transport.
pub struct SignInUseCase<T> {
    pub transport: T,
}

impl<T> SignInUseCase<T>
where
    T: Transport,
{
    pub async fn execute(&self, credentials: SignInCredentials) -> Result<AuthTokens, SdkError> {
        self.call(credentials).await.map_err(|failure| {
            let error = pipeline::normalize(Operation::SignIn, failure);
            warn!(operation = Operation::SignIn.name(), error = %error, "sign in failed");
            error
        })
    }

    async fn call(&self, credentials: SignInCredentials) -> Result<AuthTokens, CallFailure> {
        let body = to_value(SignInBody {
            email: &credentials.email,
            password: &credentials.password,
        })
        .map_err(|err| CallFailure::Internal(err.to_string()))?;

        let request = TransportRequest::post("/user/signin").with_body(body);
        pipeline::execute(Operation::SignIn, &self.transport, request, &TokenSchema).await
    }
}

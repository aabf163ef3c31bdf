use serde_json::to_value;
use tracing::warn;

use crate::domain::entities::{AuthTokens, SignUpDetails};
use crate::domain::errors::SdkError;
use crate::domain::ports::{Transport, TransportRequest};
use crate::interface_adapters::protocol::SignUpBody;
use crate::interface_adapters::schemas::TokenSchema;
use crate::use_cases::pipeline::{self, CallFailure, Operation};

// Sign-up use case with an injected transport.
pub struct SignUpUseCase<T> {
    pub transport: T,
}

impl<T> SignUpUseCase<T>
where
    T: Transport,
{
    pub async fn execute(&self, details: SignUpDetails) -> Result<AuthTokens, SdkError> {
        self.call(details).await.map_err(|failure| {
            let error = pipeline::normalize(Operation::SignUp, failure);
            warn!(operation = Operation::SignUp.name(), error = %error, "sign up failed");
            error
        })
    }

    async fn call(&self, details: SignUpDetails) -> Result<AuthTokens, CallFailure> {
        let body = to_value(SignUpBody {
            name: &details.name,
            email: &details.email,
            password: &details.password,
        })
        .map_err(|err| CallFailure::Internal(err.to_string()))?;

        let request = TransportRequest::post("/user/signup").with_body(body);
        pipeline::execute(Operation::SignUp, &self.transport, request, &TokenSchema).await
    }
}

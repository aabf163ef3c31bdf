use serde_json::Value;
use tracing::warn;

use crate::domain::errors::{ErrorDetails, SdkError};
use crate::domain::ports::{Transport, TransportRequest};
use crate::interface_adapters::schemas::AnyBodySchema;
use crate::use_cases::pipeline::{self, CallFailure, Operation};

// Email verification use case with an injected transport. The reply body
// is only a success indicator; no typed value comes back.
pub struct VerifyEmailUseCase<T> {
    pub transport: T,
}

impl<T> VerifyEmailUseCase<T>
where
    T: Transport,
{
    pub async fn execute(
        &self,
        verification_token: &str,
        access_token: &str,
    ) -> Result<bool, SdkError> {
        self.call(verification_token, access_token)
            .await
            .map_err(|failure| {
                let error = pipeline::normalize(Operation::VerifyEmail, failure);
                warn!(
                    operation = Operation::VerifyEmail.name(),
                    error = %error,
                    "email verification failed"
                );
                error
            })
    }

    async fn call(
        &self,
        verification_token: &str,
        access_token: &str,
    ) -> Result<bool, CallFailure> {
        let verification_token = pipeline::require_input("verification_token", verification_token)?;
        let access_token = pipeline::require_input("access_token", access_token)?;

        let request = TransportRequest::post(format!("/user/verify-email?token={verification_token}"))
            .with_header("x-access-token", access_token);
        let body =
            pipeline::execute(Operation::VerifyEmail, &self.transport, request, &AnyBodySchema)
                .await?;

        if is_truthy(&body) {
            return Ok(true);
        }
        Err(CallFailure::Normalized(SdkError::server(
            "Email verification failed",
            Some(ErrorDetails::Body(body)),
        )))
    }
}

// Truthiness of the success indicator: null, false, zero, and the empty
// string are falsy; any other value (including empty arrays and objects)
// counts as success.
fn is_truthy(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

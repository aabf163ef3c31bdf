use tracing::warn;

use crate::domain::entities::Profile;
use crate::domain::errors::SdkError;
use crate::domain::ports::{Transport, TransportRequest};
use crate::interface_adapters::schemas::ProfileSchema;
use crate::use_cases::pipeline::{self, CallFailure, Operation};

// Profile retrieval use case with an injected transport.
pub struct GetProfileUseCase<T> {
    pub transport: T,
}

impl<T> GetProfileUseCase<T>
where
    T: Transport,
{
    pub async fn execute(&self, access_token: &str) -> Result<Profile, SdkError> {
        self.call(access_token).await.map_err(|failure| {
            let error = pipeline::normalize(Operation::GetProfile, failure);
            warn!(
                operation = Operation::GetProfile.name(),
                error = %error,
                "profile retrieval failed"
            );
            error
        })
    }

    async fn call(&self, access_token: &str) -> Result<Profile, CallFailure> {
        let access_token = pipeline::require_input("access_token", access_token)?;

        let request =
            TransportRequest::get("/user/me").with_header("x-access-token", access_token);
        pipeline::execute(Operation::GetProfile, &self.transport, request, &ProfileSchema).await
    }
}

pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::entities::{AuthTokens, Profile, SignInCredentials, SignUpDetails};
pub use domain::errors::{ErrorDetails, FieldIssue, SdkError, SdkErrorKind};
pub use domain::ports::{
    HttpMethod, Transport, TransportFailure, TransportReply, TransportRequest,
};
pub use interface_adapters::http_client::HttpTransport;
pub use use_cases::client::AuthClient;

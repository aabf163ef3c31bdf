// Interface adapters: the reqwest transport binding, response schemas,
// and wire payloads.

pub mod http_client;
pub mod protocol;
pub mod schemas;

pub use http_client::HttpTransport;

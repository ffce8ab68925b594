//! Data models for requests and responses.

pub mod request;
pub mod response;

pub use request::{HttpMethod, RequestConfig};
pub use response::HttpResponse;

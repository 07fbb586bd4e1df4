//! Networking — endpoint registry and the JSON API client.

pub mod endpoints;
pub mod error;
pub mod http;

pub use endpoints::{QueryParams, url_for};
pub use error::RequestError;
pub use http::{ApiClient, RequestOptions};

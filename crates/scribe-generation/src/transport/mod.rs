//! Transport layer: the HTTP/JSON client for the inference service.

pub mod http_client;

pub use http_client::{HttpEndpoint, HttpEndpointConfig};

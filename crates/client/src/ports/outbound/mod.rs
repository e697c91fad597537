//! Outbound ports - interfaces implemented by infrastructure adapters.

pub mod http_port;

pub use http_port::{HttpMethod, HttpPort, HttpRequest, HttpResponse, TransportError};

#[cfg(any(test, feature = "testing"))]
pub use http_port::MockHttpPort;

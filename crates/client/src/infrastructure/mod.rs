//! Infrastructure adapters - concrete transport and wire converters.

pub mod http_client;
pub mod session_converters;

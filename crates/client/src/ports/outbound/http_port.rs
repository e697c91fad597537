//! HTTP transport port - object-safe boundary over the actual transport.
//!
//! The dispatch primitive in `application::gateway` does all decoding and
//! error normalization; this trait only moves bytes. Keeping it this thin
//! lets tests drive the gateway with a mocked transport and assert, among
//! other things, that some operations never reach the network at all.

use async_trait::async_trait;

/// HTTP methods used by the backend API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request as handed to the transport, path relative to the base URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    /// Already-merged header pairs; the transport sends them verbatim.
    pub headers: Vec<(String, String)>,
    /// JSON body text, when the call carries one.
    pub body: Option<String>,
}

/// A raw response, before any decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Failure below the HTTP layer: the request never produced a response.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Connect(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait HttpPort: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl HttpResponse {
    /// Whether the status code is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the content type indicates a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"))
    }
}

//! The single error shape observed by gateway callers.

use serde_json::Value;

/// Error returned by every gateway operation.
///
/// `status` mirrors the HTTP status when the backend answered; `0` is
/// reserved for transport failures and client-side precondition failures
/// raised before any network call. `details` carries the raw decoded error
/// payload when the backend supplied one.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Attach the raw decoded error payload.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Transport-level failure (network, DNS, body read, decode).
    ///
    /// Status is always `0`; the message carries the
    /// `"Erreur de connexion: "` prefix, with `"Erreur inconnue"` standing
    /// in when the cause has no message of its own.
    pub fn connection(cause: &str) -> Self {
        let cause = if cause.is_empty() {
            "Erreur inconnue"
        } else {
            cause
        };
        Self::new(0, format!("Erreur de connexion: {cause}"))
    }

    /// Local failure that is neither a server response nor a transport
    /// error (for example an empty generation envelope).
    pub fn unexpected(cause: &str) -> Self {
        Self::new(0, format!("Erreur inattendue: {cause}"))
    }

    /// Normalize an arbitrary caught error into the gateway shape.
    ///
    /// An error that already is an [`ApiError`] passes through unchanged
    /// (status, message and details intact); anything else is wrapped as a
    /// status-0 unexpected error.
    pub fn from_unexpected(err: anyhow::Error) -> Self {
        match err.downcast::<Self>() {
            Ok(api_error) => api_error,
            Err(other) => Self::unexpected(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_status_message_and_details() {
        let error = ApiError::new(404, "Not Found")
            .with_details(serde_json::json!({"detail": "Resource not found"}));

        assert_eq!(error.status, 404);
        assert_eq!(error.message, "Not Found");
        assert_eq!(
            error.details,
            Some(serde_json::json!({"detail": "Resource not found"}))
        );
    }

    #[test]
    fn connection_prefixes_the_cause() {
        let error = ApiError::connection("dns error for localhost");
        assert_eq!(error.status, 0);
        assert_eq!(error.message, "Erreur de connexion: dns error for localhost");
    }

    #[test]
    fn connection_falls_back_when_cause_is_empty() {
        let error = ApiError::connection("");
        assert_eq!(error.message, "Erreur de connexion: Erreur inconnue");
    }

    #[test]
    fn from_unexpected_passes_existing_api_errors_through() {
        let original = ApiError::new(409, "Session déjà active")
            .with_details(serde_json::json!({"detail": "Session déjà active"}));
        let normalized = ApiError::from_unexpected(anyhow::Error::new(original.clone()));

        assert_eq!(normalized.status, original.status);
        assert_eq!(normalized.message, original.message);
        assert_eq!(normalized.details, original.details);
    }

    #[test]
    fn from_unexpected_wraps_generic_errors() {
        let normalized =
            ApiError::from_unexpected(anyhow::anyhow!("le disque est plein"));

        assert_eq!(normalized.status, 0);
        assert_eq!(normalized.message, "Erreur inattendue: le disque est plein");
        assert!(normalized.details.is_none());
    }
}

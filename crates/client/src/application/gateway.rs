//! Request dispatch - the primitive every typed operation goes through.
//!
//! One function owns header defaults, error-body decoding and the dual
//! JSON/text success mode; the typed helpers on top of it only add
//! serialization. Whatever goes wrong, callers get an [`ApiError`] and
//! nothing else: transport failures are wrapped with `status = 0`, HTTP
//! failures carry the backend's own message when one can be extracted.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use milieu_shared::ErrorBody;

use crate::error::ApiError;
use crate::ports::outbound::{HttpMethod, HttpPort, HttpRequest, HttpResponse, TransportError};

/// Decoded success body: JSON for most endpoints, raw text for the few
/// that answer plain text (scenario detail).
#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Stateless dispatcher over an [`HttpPort`] transport.
///
/// `Send + Sync` and cheap to share behind `Arc`; concurrent calls own
/// their request and response entirely.
pub struct ApiGateway {
    transport: Arc<dyn HttpPort>,
}

impl ApiGateway {
    pub fn new(transport: Arc<dyn HttpPort>) -> Self {
        Self { transport }
    }

    /// Issue a request and normalize the outcome.
    ///
    /// Caller headers are merged over the JSON defaults and win on
    /// conflicting names. A non-success status never yields a partial
    /// result: the body is mined for a `detail` message (validation lists
    /// joined with `", "`), falling back to `HTTP <status>: <text>`.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        headers: &[(String, String)],
    ) -> Result<Payload, ApiError> {
        let request = HttpRequest {
            method,
            path: path.to_string(),
            headers: merge_headers(headers),
            body: body.map(|value| value.to_string()),
        };
        tracing::debug!(method = ?request.method, path = %request.path, "dispatching API request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(TransportError::Connect(cause)) => {
                tracing::warn!(path, %cause, "transport failure");
                return Err(ApiError::connection(&cause));
            }
        };

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        if response.is_json() {
            match serde_json::from_str(&response.body) {
                Ok(value) => Ok(Payload::Json(value)),
                Err(e) => Err(ApiError::connection(&e.to_string())),
            }
        } else {
            Ok(Payload::Text(response.body))
        }
    }

    /// GET a JSON endpoint and decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let payload = self.dispatch(HttpMethod::Get, path, None, &[]).await?;
        decode(payload)
    }

    /// GET with `404 Not Found` translated to `Ok(None)`.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.status == 404 => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// GET an endpoint that may answer plain text.
    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        match self.dispatch(HttpMethod::Get, path, None, &[]).await? {
            Payload::Text(text) => Ok(text),
            // A JSON string body (FastAPI serializing a str) unwraps to
            // its contents; anything else round-trips as JSON text.
            Payload::Json(Value::String(text)) => Ok(text),
            Payload::Json(other) => Ok(other.to_string()),
        }
    }

    /// POST a JSON body and decode the response into `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::unexpected(&e.to_string()))?;
        let payload = self.dispatch(HttpMethod::Post, path, Some(body), &[]).await?;
        decode(payload)
    }
}

/// Merge caller headers over the JSON defaults; caller wins on a
/// case-insensitive name conflict.
fn merge_headers(extra: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ];
    for (name, value) in extra {
        if let Some(existing) = merged
            .iter_mut()
            .find(|(merged_name, _)| merged_name.eq_ignore_ascii_case(name))
        {
            existing.1 = value.clone();
        } else {
            merged.push((name.clone(), value.clone()));
        }
    }
    merged
}

/// Build the typed error for a non-success response.
fn error_from_response(response: &HttpResponse) -> ApiError {
    let fallback = format!("HTTP {}: {}", response.status, response.status_text);

    match serde_json::from_str::<Value>(&response.body) {
        Ok(details) => {
            let message = serde_json::from_value::<ErrorBody>(details.clone())
                .ok()
                .and_then(|body| body.detail)
                .map_or(fallback, |detail| detail.to_message());
            ApiError::new(response.status, message).with_details(details)
        }
        Err(_) => ApiError::new(response.status, fallback),
    }
}

fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T, ApiError> {
    let value = match payload {
        Payload::Json(value) => value,
        Payload::Text(text) => Value::String(text),
    };
    serde_json::from_value(value).map_err(|e| ApiError::unexpected(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockHttpPort;

    fn json_response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    fn gateway_with(mock: MockHttpPort) -> ApiGateway {
        ApiGateway::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn merges_caller_headers_over_defaults() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute()
            .withf(|request| {
                let accept: Vec<_> = request
                    .headers
                    .iter()
                    .filter(|(name, _)| name.eq_ignore_ascii_case("accept"))
                    .collect();
                accept.len() == 1 && accept[0].1 == "text/markdown"
            })
            .returning(|_| {
                Ok(HttpResponse {
                    status: 200,
                    status_text: "OK".to_string(),
                    content_type: Some("text/markdown".to_string()),
                    body: "# Scénario".to_string(),
                })
            });

        let gateway = gateway_with(mock);
        let payload = gateway
            .dispatch(
                HttpMethod::Get,
                "/api/scenarios/x.md",
                None,
                &[("Accept".to_string(), "text/markdown".to_string())],
            )
            .await
            .unwrap();

        assert!(matches!(payload, Payload::Text(text) if text == "# Scénario"));
    }

    #[tokio::test]
    async fn joins_validation_messages_with_commas() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(json_response(
                422,
                "Unprocessable Entity",
                r#"{"detail":[{"msg":"a"},{"msg":"b"}]}"#,
            ))
        });

        let gateway = gateway_with(mock);
        let error = gateway
            .dispatch(HttpMethod::Get, "/api/characters/", None, &[])
            .await
            .unwrap_err();

        assert_eq!(error.status, 422);
        assert_eq!(error.message, "a, b");
        assert!(error.details.is_some());
    }

    #[tokio::test]
    async fn string_detail_becomes_the_message() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(json_response(
                409,
                "Conflict",
                r#"{"detail": "Session déjà existante"}"#,
            ))
        });

        let gateway = gateway_with(mock);
        let error = gateway
            .dispatch(HttpMethod::Post, "/api/scenarios/start", None, &[])
            .await
            .unwrap_err();

        assert_eq!(error.status, 409);
        assert_eq!(error.message, "Session déjà existante");
    }

    #[tokio::test]
    async fn undecodable_error_body_falls_back_to_http_text() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(HttpResponse {
                status: 500,
                status_text: "Internal Server Error".to_string(),
                content_type: Some("text/html".to_string()),
                body: "<html>boom</html>".to_string(),
            })
        });

        let gateway = gateway_with(mock);
        let error = gateway
            .dispatch(HttpMethod::Get, "/api/characters/", None, &[])
            .await
            .unwrap_err();

        assert_eq!(error.status, 500);
        assert_eq!(error.message, "HTTP 500: Internal Server Error");
        assert!(error.details.is_none());
    }

    #[tokio::test]
    async fn transport_failure_becomes_status_zero() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Err(TransportError::Connect(
                "error trying to connect: dns error".to_string(),
            ))
        });

        let gateway = gateway_with(mock);
        let error = gateway
            .dispatch(HttpMethod::Get, "/api/characters/", None, &[])
            .await
            .unwrap_err();

        assert_eq!(error.status, 0);
        assert!(error.message.starts_with("Erreur de connexion: "));
    }

    #[tokio::test]
    async fn get_text_unwraps_json_string_bodies() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute()
            .returning(|_| Ok(json_response(200, "OK", "\"# Les Pierres du Passé\"")));

        let gateway = gateway_with(mock);
        let text = gateway.get_text("/api/scenarios/p.md").await.unwrap();

        assert_eq!(text, "# Les Pierres du Passé");
    }

    #[tokio::test]
    async fn get_optional_translates_404_to_none() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(json_response(
                404,
                "Not Found",
                r#"{"detail": "Personnage introuvable"}"#,
            ))
        });

        let gateway = gateway_with(mock);
        let found: Option<Value> = gateway.get_optional("/api/characters/42").await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn malformed_success_json_is_a_connection_error() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute()
            .returning(|_| Ok(json_response(200, "OK", "{not json")));

        let gateway = gateway_with(mock);
        let error = gateway
            .dispatch(HttpMethod::Get, "/api/characters/", None, &[])
            .await
            .unwrap_err();

        assert_eq!(error.status, 0);
        assert!(error.message.starts_with("Erreur de connexion: "));
    }
}

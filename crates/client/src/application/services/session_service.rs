//! Active-session views and the session-id precondition guard.

use std::sync::Arc;

use milieu_domain::{is_valid_uuid, GameSession};
use milieu_shared::ActiveSessionsResponse;

use crate::application::gateway::ApiGateway;
use crate::error::ApiError;
use crate::infrastructure::session_converters::session_record_to_game_session;

/// Guard run before any session-scoped call.
///
/// Returns a 400-status error for an empty id and a distinct 400-status
/// error for a non-empty id that is not a canonical UUID. Both are raised
/// client-side, before any request is built.
pub fn validate_session_params(session_id: &str) -> Result<(), ApiError> {
    if session_id.is_empty() {
        return Err(ApiError::new(400, "ID de session requis"));
    }
    if !is_valid_uuid(session_id) {
        return Err(ApiError::new(400, "ID de session invalide: UUID attendu"));
    }
    Ok(())
}

/// Operations on the running game sessions.
#[derive(Clone)]
pub struct SessionService {
    gateway: Arc<ApiGateway>,
}

impl SessionService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// List the sessions currently tracked by the backend, adapted into
    /// [`GameSession`] view models with defaulted status/activity.
    pub async fn active_sessions(&self) -> Result<Vec<GameSession>, ApiError> {
        let response: ActiveSessionsResponse =
            self.gateway.get("/api/scenarios/sessions").await?;
        Ok(response
            .sessions
            .into_iter()
            .map(session_record_to_game_session)
            .collect())
    }

    /// Look up one session by id.
    ///
    /// An id that fails UUID validation resolves to `Ok(None)` immediately,
    /// without touching the network.
    pub async fn get(&self, session_id: &str) -> Result<Option<GameSession>, ApiError> {
        if !is_valid_uuid(session_id) {
            return Ok(None);
        }
        let sessions = self.active_sessions().await?;
        Ok(sessions
            .into_iter()
            .find(|session| session.session_id == session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HttpResponse, MockHttpPort};
    use milieu_domain::SessionStatus;

    fn service_with(mock: MockHttpPort) -> SessionService {
        SessionService::new(Arc::new(ApiGateway::new(Arc::new(mock))))
    }

    #[test]
    fn guard_rejects_empty_id() {
        let error = validate_session_params("").unwrap_err();
        assert_eq!(error.status, 400);
        assert_eq!(error.message, "ID de session requis");
    }

    #[test]
    fn guard_rejects_malformed_id_with_distinct_message() {
        let error = validate_session_params("invalid-uuid").unwrap_err();
        assert_eq!(error.status, 400);
        assert_eq!(error.message, "ID de session invalide: UUID attendu");
    }

    #[test]
    fn guard_accepts_canonical_uuid() {
        assert!(validate_session_params("550e8400-e29b-41d4-a716-446655440000").is_ok());
    }

    #[tokio::test]
    async fn get_with_invalid_id_never_touches_the_transport() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().times(0);

        let found = service_with(mock).get("invalid-uuid").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn active_sessions_apply_view_model_defaults() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                content_type: Some("application/json".to_string()),
                body: r#"{"sessions": [{
                    "session_id": "550e8400-e29b-41d4-a716-446655440000",
                    "scenario_name": "Les_Pierres_du_Passe.md",
                    "character_id": "c1",
                    "character_name": "Galadhwen"
                }]}"#
                    .to_string(),
            })
        });

        let sessions = service_with(mock).active_sessions().await.unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].status, SessionStatus::Active);
        assert_eq!(sessions[0].character_name, "Galadhwen");
    }

    #[tokio::test]
    async fn get_finds_a_session_by_id() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                content_type: Some("application/json".to_string()),
                body: r#"{"sessions": [
                    {"session_id": "550e8400-e29b-41d4-a716-446655440000",
                     "scenario_name": "a.md", "character_name": "A"},
                    {"session_id": "6fa459ea-ee8a-3ca4-894e-db77e160355e",
                     "scenario_name": "b.md", "character_name": "B"}
                ]}"#
                .to_string(),
            })
        });

        let found = service_with(mock)
            .get("6fa459ea-ee8a-3ca4-894e-db77e160355e")
            .await
            .unwrap();

        assert_eq!(found.unwrap().character_name, "B");
    }
}

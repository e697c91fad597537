//! Combat attack resolution.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;

use milieu_shared::CombatAttackRequest;

use crate::application::gateway::ApiGateway;
use crate::error::ApiError;

/// Characters escaped inside a query-string value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// Operations on `/api/combat`.
#[derive(Clone)]
pub struct CombatService {
    gateway: Arc<ApiGateway>,
}

impl CombatService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve one attack between two combatants.
    ///
    /// The backend answers with the updated combat state, whose shape it
    /// owns; the result is handed back as raw JSON.
    pub async fn perform_attack(
        &self,
        request: &CombatAttackRequest,
    ) -> Result<Value, ApiError> {
        let attacker = utf8_percent_encode(&request.attacker_id, QUERY_VALUE);
        let target = utf8_percent_encode(&request.target_id, QUERY_VALUE);
        let path = format!(
            "/api/combat/attack?attacker_id={attacker}&target_id={target}&attack_value={}",
            request.attack_value
        );
        self.gateway.post(&path, &request.combat_state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HttpMethod, HttpResponse, MockHttpPort};

    fn service_with(mock: MockHttpPort) -> CombatService {
        CombatService::new(Arc::new(ApiGateway::new(Arc::new(mock))))
    }

    fn attack_request() -> CombatAttackRequest {
        CombatAttackRequest {
            attacker_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            target_id: "6fa459ea-ee8a-3ca4-894e-db77e160355e".to_string(),
            attack_value: 15,
            combat_state: serde_json::json!({
                "round": 1,
                "participants": [
                    "550e8400-e29b-41d4-a716-446655440000",
                    "6fa459ea-ee8a-3ca4-894e-db77e160355e"
                ]
            }),
        }
    }

    #[tokio::test]
    async fn perform_attack_sends_params_in_the_query_and_state_as_body() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute()
            .withf(|request| {
                request.method == HttpMethod::Post
                    && request.path
                        == "/api/combat/attack\
                            ?attacker_id=550e8400-e29b-41d4-a716-446655440000\
                            &target_id=6fa459ea-ee8a-3ca4-894e-db77e160355e\
                            &attack_value=15"
                    && request
                        .body
                        .as_deref()
                        .is_some_and(|body| body.contains(r#""round":1"#))
            })
            .returning(|_| {
                Ok(HttpResponse {
                    status: 200,
                    status_text: "OK".to_string(),
                    content_type: Some("application/json".to_string()),
                    body: r#"{"result": {"hit": true, "damage": 7}, "round": 2}"#.to_string(),
                })
            });

        let outcome = service_with(mock)
            .perform_attack(&attack_request())
            .await
            .unwrap();

        assert_eq!(outcome["result"]["damage"], 7);
        assert_eq!(outcome["round"], 2);
    }

    #[tokio::test]
    async fn perform_attack_propagates_backend_errors() {
        let mut mock = MockHttpPort::new();
        mock.expect_execute().returning(|_| {
            Ok(HttpResponse {
                status: 409,
                status_text: "Conflict".to_string(),
                content_type: Some("application/json".to_string()),
                body: r#"{"detail": "Combat déjà terminé"}"#.to_string(),
            })
        });

        let error = service_with(mock)
            .perform_attack(&attack_request())
            .await
            .unwrap_err();

        assert_eq!(error.status, 409);
        assert_eq!(error.message, "Combat déjà terminé");
    }
}

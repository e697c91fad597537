//! Scenario library and gameplay round trips.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use milieu_domain::{ConversationMessage, ScenarioStatus};
use milieu_shared::{
    HistoryResponse, PlayScenarioRequest, ScenarioListResponse, StartScenarioRequest,
    StartScenarioResponse,
};
use milieu_shared::responses::PlayScenarioResponse;

use crate::application::gateway::ApiGateway;
use crate::application::services::session_service::validate_session_params;
use crate::error::ApiError;

/// Characters escaped inside a path segment (everything a scenario file
/// name could contain that is not safe in a URL path).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Operations on `/api/scenarios`.
#[derive(Clone)]
pub struct ScenarioService {
    gateway: Arc<ApiGateway>,
}

impl ScenarioService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// List every scenario with its play status.
    pub async fn list(&self) -> Result<Vec<ScenarioStatus>, ApiError> {
        let response: ScenarioListResponse = self.gateway.get("/api/scenarios/").await?;
        Ok(response.scenarios)
    }

    /// Fetch the full markdown content of one scenario file.
    ///
    /// The backend answers this endpoint in plain text.
    pub async fn details(&self, scenario_file: &str) -> Result<String, ApiError> {
        let encoded = utf8_percent_encode(scenario_file, PATH_SEGMENT);
        self.gateway
            .get_text(&format!("/api/scenarios/{encoded}"))
            .await
    }

    /// Start a scenario with a character; returns the new session id and
    /// the opening narration.
    pub async fn start(
        &self,
        request: &StartScenarioRequest,
    ) -> Result<StartScenarioResponse, ApiError> {
        self.gateway.post("/api/scenarios/start", request).await
    }

    /// Send a player message into a running session.
    ///
    /// The session id is validated synchronously before anything is sent.
    pub async fn play(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<PlayScenarioResponse, ApiError> {
        validate_session_params(session_id)?;
        let request = PlayScenarioRequest {
            message: message.to_string(),
        };
        self.gateway
            .post(&format!("/api/scenarios/play?session_id={session_id}"), &request)
            .await
    }

    /// Fetch the complete conversation history of a session.
    pub async fn history(
        &self,
        session_id: &str,
    ) -> Result<Vec<ConversationMessage>, ApiError> {
        validate_session_params(session_id)?;
        let response: HistoryResponse = self
            .gateway
            .get(&format!("/api/scenarios/history/{session_id}"))
            .await?;
        Ok(response.history)
    }
}

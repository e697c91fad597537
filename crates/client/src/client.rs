//! The assembled client facade.

use std::sync::Arc;

use crate::application::gateway::ApiGateway;
use crate::application::services::{
    CharacterService, CombatService, CreationService, GenerationService, ScenarioService,
    SessionService,
};
use crate::config::ApiConfig;
use crate::infrastructure::http_client::ReqwestTransport;
use crate::ports::outbound::HttpPort;

/// One client per backend: a shared gateway and the operation services
/// wired over it.
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct MilieuClient {
    pub characters: CharacterService,
    pub scenarios: ScenarioService,
    pub sessions: SessionService,
    pub creation: CreationService,
    pub generation: GenerationService,
    pub combat: CombatService,
}

impl MilieuClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new(config)))
    }

    /// Client configured from `MILIEU_API_URL` (or the default URL).
    pub fn from_env() -> Self {
        Self::new(&ApiConfig::from_env())
    }

    /// Build the facade over an arbitrary transport. Tests inject a mock
    /// here; production code goes through [`MilieuClient::new`].
    pub fn with_transport(transport: Arc<dyn HttpPort>) -> Self {
        let gateway = Arc::new(ApiGateway::new(transport));
        Self {
            characters: CharacterService::new(Arc::clone(&gateway)),
            scenarios: ScenarioService::new(Arc::clone(&gateway)),
            sessions: SessionService::new(Arc::clone(&gateway)),
            creation: CreationService::new(Arc::clone(&gateway)),
            generation: GenerationService::new(Arc::clone(&gateway)),
            combat: CombatService::new(gateway),
        }
    }

    /// Whether the backend answers at all.
    ///
    /// Probes the character list and swallows the outcome: the caller gets
    /// a plain boolean, never an error.
    pub async fn health_check(&self) -> bool {
        match self.characters.list().await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(status = error.status, message = %error.message, "health check failed");
                false
            }
        }
    }
}

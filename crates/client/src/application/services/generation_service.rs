//! Narrative generation: names, backgrounds and physical descriptions
//! produced by the game-master model from a partial character.

use std::sync::Arc;

use milieu_shared::{
    CharacterDraft, GenerateBackgroundResponse, GenerateNameResponse,
    GeneratePhysicalDescriptionResponse,
};

use crate::application::gateway::ApiGateway;
use crate::error::ApiError;

/// Operations on the `/creation/generate-*` endpoints.
///
/// These routes sit outside the `/api` prefix. Each returns a small
/// envelope of suggestions; callers get the first one.
#[derive(Clone)]
pub struct GenerationService {
    gateway: Arc<ApiGateway>,
}

impl GenerationService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Generate a character name from what the player has filled in so far.
    pub async fn generate_name(&self, draft: &CharacterDraft) -> Result<String, ApiError> {
        let response: GenerateNameResponse =
            self.gateway.post("/creation/generate-name", draft).await?;
        first_suggestion(response.names, "nom")
    }

    /// Generate a background paragraph.
    pub async fn generate_background(&self, draft: &CharacterDraft) -> Result<String, ApiError> {
        let response: GenerateBackgroundResponse = self
            .gateway
            .post("/creation/generate-background", draft)
            .await?;
        first_suggestion(response.backgrounds, "background")
    }

    /// Generate a physical description.
    pub async fn generate_physical_description(
        &self,
        draft: &CharacterDraft,
    ) -> Result<String, ApiError> {
        let response: GeneratePhysicalDescriptionResponse = self
            .gateway
            .post("/creation/generate-physical-description", draft)
            .await?;
        first_suggestion(response.physical_descriptions, "description physique")
    }
}

fn first_suggestion(mut entries: Vec<String>, label: &str) -> Result<String, ApiError> {
    if entries.is_empty() {
        tracing::warn!(label, "generation response contained no suggestion");
        return Err(ApiError::unexpected(&format!(
            "aucune suggestion de {label} reçue"
        )));
    }
    Ok(entries.remove(0))
}

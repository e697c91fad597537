//! Character listing and lookup.

use std::sync::Arc;

use milieu_domain::Character;
use milieu_shared::{CharacterDto, CharacterListResponse};

use crate::application::gateway::ApiGateway;
use crate::error::ApiError;

/// Operations on `/api/characters`.
#[derive(Clone)]
pub struct CharacterService {
    gateway: Arc<ApiGateway>,
}

impl CharacterService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// List every character, complete or in progress, normalized into the
    /// stable domain shape.
    ///
    /// Failures propagate as the typed error; listing views decide for
    /// themselves how to degrade.
    pub async fn list(&self) -> Result<Vec<Character>, ApiError> {
        let response: CharacterListResponse = self.gateway.get("/api/characters/").await?;
        Ok(response
            .characters
            .into_iter()
            .map(CharacterDto::into_character)
            .collect())
    }

    /// Fetch one character by id.
    ///
    /// A `404` from the backend means "no such character" and resolves to
    /// `Ok(None)` so callers can tell absence apart from failure.
    pub async fn get(&self, id: &str) -> Result<Option<Character>, ApiError> {
        let dto: Option<CharacterDto> = self
            .gateway
            .get_optional(&format!("/api/characters/{id}"))
            .await?;
        Ok(dto.map(CharacterDto::into_character))
    }
}

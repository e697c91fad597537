//! Character-creation sub-flow: allocation checks, drafts, reference data.

use std::collections::BTreeMap;
use std::sync::Arc;

use milieu_domain::{CharacteristicsData, EquipmentCatalog, MagicSpheres, RaceData, SkillGroups};
use milieu_shared::{
    AllocateAttributesRequest, AllocateAttributesResponse, CheckAttributesRequest,
    CheckAttributesResponse, CheckSkillsRequest, CheckSkillsResponse, CreationStatusResponse,
    NewCharacterRequest, SaveCharacterRequest, SaveCharacterResponse,
};

use crate::application::gateway::ApiGateway;
use crate::error::ApiError;

/// Operations on `/api/creation`.
#[derive(Clone)]
pub struct CreationService {
    gateway: Arc<ApiGateway>,
}

impl CreationService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Roll the starting attribute spread for a race.
    pub async fn allocate_attributes(
        &self,
        race: &str,
    ) -> Result<BTreeMap<String, i32>, ApiError> {
        let request = AllocateAttributesRequest {
            race: race.to_string(),
        };
        let response: AllocateAttributesResponse = self
            .gateway
            .post("/api/creation/allocate-attributes", &request)
            .await?;
        Ok(response.attributes)
    }

    /// Check a player-proposed attribute allocation.
    pub async fn check_attributes(
        &self,
        attributes: BTreeMap<String, i32>,
    ) -> Result<CheckAttributesResponse, ApiError> {
        let request = CheckAttributesRequest { attributes };
        self.gateway
            .post("/api/creation/check-attributes", &request)
            .await
    }

    /// Check a skill allocation and get its point cost.
    pub async fn check_skills(
        &self,
        skills: BTreeMap<String, BTreeMap<String, i32>>,
    ) -> Result<CheckSkillsResponse, ApiError> {
        let request = CheckSkillsRequest { skills };
        self.gateway.post("/api/creation/check-skills", &request).await
    }

    /// Create a new in-progress character record.
    pub async fn new_character(
        &self,
        request: &NewCharacterRequest,
    ) -> Result<CreationStatusResponse, ApiError> {
        self.gateway.post("/api/creation/new", request).await
    }

    /// Persist a character draft.
    pub async fn save_character(
        &self,
        request: &SaveCharacterRequest,
    ) -> Result<SaveCharacterResponse, ApiError> {
        self.gateway.post("/api/creation/save", request).await
    }

    /// Creation status of a character by id.
    pub async fn status(&self, character_id: &str) -> Result<CreationStatusResponse, ApiError> {
        self.gateway
            .get(&format!("/api/creation/status/{character_id}"))
            .await
    }

    /// Playable races with their cultures.
    pub async fn races(&self) -> Result<Vec<RaceData>, ApiError> {
        self.gateway.get("/api/creation/races").await
    }

    /// The skill taxonomy, grouped.
    pub async fn skills(&self) -> Result<SkillGroups, ApiError> {
        self.gateway.get("/api/creation/skills").await
    }

    /// The equipment catalog.
    pub async fn equipments(&self) -> Result<EquipmentCatalog, ApiError> {
        self.gateway.get("/api/creation/equipments").await
    }

    /// Spell catalog by magic sphere.
    pub async fn spells(&self) -> Result<MagicSpheres, ApiError> {
        self.gateway.get("/api/creation/spells").await
    }

    /// Characteristic metadata and allocation tables.
    pub async fn characteristics(&self) -> Result<CharacteristicsData, ApiError> {
        self.gateway.get("/api/creation/characteristics").await
    }
}

//! Request bodies accepted by the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST /api/scenarios/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartScenarioRequest {
    pub scenario_name: String,
    pub character_id: String,
}

/// Body for `POST /api/scenarios/play`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayScenarioRequest {
    pub message: String,
}

/// Body for `POST /api/creation/allocate-attributes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocateAttributesRequest {
    pub race: String,
}

/// Body for `POST /api/creation/check-attributes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAttributesRequest {
    pub attributes: BTreeMap<String, i32>,
}

/// Body for `POST /api/creation/check-skills`.
///
/// Skills are grouped on the wire: group name, then skill name to rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSkillsRequest {
    pub skills: BTreeMap<String, BTreeMap<String, i32>>,
}

/// Body for `POST /api/creation/new` - starts an in-progress character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCharacterRequest {
    pub name: String,
    pub race: String,
    pub culture: String,
}

/// Body for `POST /api/creation/save` - persists a character draft.
///
/// The draft itself is passed as raw JSON: the creation views assemble it
/// incrementally and the backend validates the final shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCharacterRequest {
    pub character_id: String,
    pub character: Value,
}

/// Parameters of `POST /api/combat/attack`.
///
/// The ids and the attack value travel as query parameters; `combat_state`
/// is the raw JSON body. Its shape is backend-owned and passed through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatAttackRequest {
    pub attacker_id: String,
    pub target_id: String,
    pub attack_value: i32,
    pub combat_state: Value,
}

/// Partial character sent to the narrative-generation endpoints.
///
/// Every field is optional: generation works from whatever the player has
/// filled in so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caracteristiques: Option<BTreeMap<String, i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_description: Option<String>,
}

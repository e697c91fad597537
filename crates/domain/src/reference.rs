//! Reference catalogs served by the character-creation endpoints.
//!
//! These are read-only rulebook data: races and their cultures, the skill
//! taxonomy, the equipment catalog, spell spheres and the characteristic
//! tables. The gateway returns them verbatim to the creation views.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A playable race with its mechanical bonuses and available cultures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceData {
    pub name: String,
    #[serde(default)]
    pub characteristic_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub destiny_points: i32,
    #[serde(default)]
    pub special_abilities: Vec<String>,
    #[serde(default)]
    pub base_languages: Vec<String>,
    #[serde(default)]
    pub optional_languages: Vec<String>,
    /// Omitted when a race is sent back for persistence.
    #[serde(default)]
    pub cultures: Option<Vec<CultureData>>,
}

/// A culture within a race.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CultureData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skill_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub characteristic_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub free_skill_points: i32,
}

/// One skill inside a group of the taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub primary_characteristic: String,
    #[serde(default)]
    pub difficulty_levels: BTreeMap<String, String>,
}

/// The full skill taxonomy, keyed by group name.
pub type SkillGroups = BTreeMap<String, Vec<SkillEntry>>;

/// One purchasable piece of equipment.
///
/// Category-specific fields (`damage`, `range`, `protection`) are only
/// present for the matching category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub damage: Option<String>,
    #[serde(default)]
    pub range: Option<i32>,
    #[serde(default)]
    pub protection: Option<i32>,
}

/// The equipment catalog split by category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    #[serde(default)]
    pub weapons: BTreeMap<String, EquipmentEntry>,
    #[serde(default)]
    pub armor: BTreeMap<String, EquipmentEntry>,
    #[serde(default)]
    pub items: BTreeMap<String, EquipmentEntry>,
}

/// One castable spell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellData {
    pub name: String,
    #[serde(default)]
    pub power_cost: i32,
    #[serde(default)]
    pub description: String,
}

/// Spell catalog keyed by magic sphere.
pub type MagicSpheres = BTreeMap<String, Vec<SpellData>>;

/// Metadata for one characteristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacteristicData {
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Characteristic metadata plus the allocation tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacteristicsData {
    #[serde(default)]
    pub characteristics: BTreeMap<String, CharacteristicData>,
    #[serde(default)]
    pub bonus_table: BTreeMap<String, i32>,
    #[serde(default)]
    pub cost_table: BTreeMap<String, i32>,
    #[serde(default)]
    pub starting_points: i32,
    #[serde(default)]
    pub maximum_starting_value: i32,
}

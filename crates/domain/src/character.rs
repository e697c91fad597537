//! Character entity and its reduced UI projection.
//!
//! `Character` is the normalized shape handed to view components. The
//! backend's representation of `race` and `culture` drifted across API
//! versions (plain string vs nested descriptor record); by the time a
//! `Character` exists both are full descriptors, with a string-only source
//! becoming a descriptor carrying just the display name.
//!
//! [`CharacterContext`] is the flattened projection kept for legacy
//! consumers: inventory reduced to item names, descriptors reduced to
//! display names, and every optional numeric field coerced to a real zero
//! so display code never meets an absent value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A playable character as displayed by the sheet and session views.
///
/// Data-carrying struct with no invariants to protect: any combination of
/// field values is a valid (possibly in-progress) character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub race: Race,
    pub culture: Culture,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub caracteristiques: BTreeMap<String, i32>,
    #[serde(default)]
    pub competences: BTreeMap<String, i32>,
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub spells: Vec<String>,
    #[serde(default)]
    pub equipment_summary: Option<EquipmentSummary>,
    #[serde(default)]
    pub culture_bonuses: BTreeMap<String, i32>,
    /// Narrative backstory, present once generated or written.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub physical_description: Option<String>,
}

/// Race descriptor, normalized from either API generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Race {
    pub name: String,
    #[serde(default)]
    pub characteristic_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub destiny_points: i32,
    #[serde(default)]
    pub special_abilities: Vec<String>,
}

/// Culture descriptor, normalized from either API generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Culture {
    pub name: String,
    #[serde(default)]
    pub skill_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub characteristic_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub free_skill_points: i32,
}

impl Race {
    /// Descriptor carrying only a display name (older API versions).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Culture {
    /// Descriptor carrying only a display name (older API versions).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// An object carried in a character's inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub base_value: i64,
}

/// Aggregate figures for a character's starting equipment.
///
/// Fields appeared and disappeared across backend versions, so every one is
/// serde-defaulted to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSummary {
    #[serde(default)]
    pub total_cost: i64,
    #[serde(default)]
    pub total_weight: f64,
    #[serde(default)]
    pub remaining_money: i64,
    #[serde(default)]
    pub starting_money: i64,
}

/// Reduced character projection for legacy view components.
///
/// Never contains absent numeric fields: the summary is always present and
/// zero-filled when the source character omits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterContext {
    pub id: String,
    pub name: String,
    pub race: String,
    pub culture: String,
    pub profession: String,
    pub caracteristiques: BTreeMap<String, i32>,
    pub competences: BTreeMap<String, i32>,
    pub hp: i32,
    pub gold: i64,
    pub inventory: Vec<String>,
    pub equipment: Vec<String>,
    pub spells: Vec<String>,
    pub equipment_summary: EquipmentSummary,
    pub culture_bonuses: BTreeMap<String, i32>,
}

impl Character {
    /// Project this character into the flattened [`CharacterContext`] shape.
    ///
    /// Inventory keeps item names only; race and culture reduce to their
    /// display names; an absent equipment summary becomes four zeroes.
    pub fn to_context(&self) -> CharacterContext {
        CharacterContext {
            id: self.id.clone(),
            name: self.name.clone(),
            race: self.race.name.clone(),
            culture: self.culture.name.clone(),
            profession: self.profession.clone(),
            caracteristiques: self.caracteristiques.clone(),
            competences: self.competences.clone(),
            hp: self.hp,
            gold: self.gold,
            inventory: self.inventory.iter().map(|item| item.name.clone()).collect(),
            equipment: self.equipment.clone(),
            spells: self.spells.clone(),
            equipment_summary: self.equipment_summary.unwrap_or_default(),
            culture_bonuses: self.culture_bonuses.clone(),
        }
    }
}

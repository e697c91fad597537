//! Versioned DTOs for shapes that drifted across backend releases.
//!
//! Older backends sent `race`/`culture` as plain strings; newer ones send
//! nested descriptor records. [`DescriptorDto`] is an untagged union over
//! both so either generation decodes, and [`CharacterDto::into_character`]
//! collapses the difference before anything reaches view code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use milieu_domain::{Character, Culture, EquipmentSummary, Item, Race};

/// `race`/`culture` field as seen on the wire: a bare display name or a
/// full descriptor record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorDto {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        characteristic_bonuses: BTreeMap<String, i32>,
        #[serde(default)]
        skill_bonuses: BTreeMap<String, i32>,
        #[serde(default)]
        destiny_points: i32,
        #[serde(default)]
        free_skill_points: i32,
        #[serde(default)]
        special_abilities: Vec<String>,
    },
}

impl Default for DescriptorDto {
    fn default() -> Self {
        Self::Name(String::new())
    }
}

impl DescriptorDto {
    /// The display name regardless of wire generation.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    fn into_race(self) -> Race {
        match self {
            Self::Name(name) => Race::named(name),
            Self::Detailed {
                name,
                characteristic_bonuses,
                destiny_points,
                special_abilities,
                ..
            } => Race {
                name,
                characteristic_bonuses,
                destiny_points,
                special_abilities,
            },
        }
    }

    fn into_culture(self) -> Culture {
        match self {
            Self::Name(name) => Culture::named(name),
            Self::Detailed {
                name,
                characteristic_bonuses,
                skill_bonuses,
                free_skill_points,
                ..
            } => Culture {
                name,
                skill_bonuses,
                characteristic_bonuses,
                free_skill_points,
            },
        }
    }
}

/// A character exactly as the backend serializes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub race: DescriptorDto,
    #[serde(default)]
    pub culture: DescriptorDto,
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
    pub culture_bonuses: Option<BTreeMap<String, i32>>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub physical_description: Option<String>,
    /// Creation status and other fields some versions include; ignored by
    /// the views but kept from failing the decode.
    #[serde(default)]
    pub status: Option<String>,
}

impl CharacterDto {
    /// Normalize into the stable domain shape.
    pub fn into_character(self) -> Character {
        Character {
            id: self.id,
            name: self.name,
            race: self.race.into_race(),
            culture: self.culture.into_culture(),
            profession: self.profession,
            caracteristiques: self.caracteristiques,
            competences: self.competences,
            hp: self.hp,
            gold: self.gold,
            inventory: self.inventory,
            equipment: self.equipment,
            spells: self.spells,
            equipment_summary: self.equipment_summary,
            culture_bonuses: self.culture_bonuses.unwrap_or_default(),
            background: self.background,
            physical_description: self.physical_description,
        }
    }
}

/// A raw session record as returned by `GET /api/scenarios/sessions`.
///
/// `status` and `last_activity` only exist on newer backends; the client
/// fills in defaults when they are absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecordDto {
    pub session_id: String,
    #[serde(default)]
    pub scenario_name: String,
    #[serde(default)]
    pub character_id: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_activity: Option<String>,
    /// Any extra per-session metadata, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_legacy_string_race() {
        let json = r#"{"id": "c1", "name": "Bilbon", "race": "Hobbit", "culture": "Comté"}"#;
        let dto: CharacterDto = serde_json::from_str(json).unwrap();
        let character = dto.into_character();

        assert_eq!(character.race.name, "Hobbit");
        assert_eq!(character.culture.name, "Comté");
        assert!(character.race.characteristic_bonuses.is_empty());
    }

    #[test]
    fn decodes_descriptor_race_with_bonuses() {
        let json = r#"{
            "id": "c2",
            "name": "Aragorn",
            "race": {
                "name": "Humain",
                "characteristic_bonuses": {"force": 1},
                "destiny_points": 3
            },
            "culture": {"name": "Gondor", "free_skill_points": 4}
        }"#;
        let character: Character = serde_json::from_str::<CharacterDto>(json)
            .unwrap()
            .into_character();

        assert_eq!(character.race.name, "Humain");
        assert_eq!(character.race.destiny_points, 3);
        assert_eq!(character.race.characteristic_bonuses.get("force"), Some(&1));
        assert_eq!(character.culture.free_skill_points, 4);
    }

    #[test]
    fn session_record_tolerates_minimal_payload() {
        let json = r#"{"session_id": "s1", "scenario_name": "Les_Pierres_du_Passe.md"}"#;
        let record: SessionRecordDto = serde_json::from_str(json).unwrap();

        assert_eq!(record.session_id, "s1");
        assert!(record.character_name.is_none());
        assert!(record.status.is_none());
    }
}

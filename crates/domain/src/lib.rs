//! Milieu Domain - view models for the "Terres du Milieu" companion client.
//!
//! This crate contains the stable, UI-facing shapes produced by the API
//! gateway plus the pure value logic around them:
//! - Normalized entities (`Character`, `Item`, `GameSession`, ...)
//! - The reduced [`CharacterContext`] projection consumed by legacy views
//! - Conversation history types for the narrative chat interface
//! - Reference catalogs used by the character-creation flow
//!
//! # Design Principles
//!
//! - **No I/O** - wire decoding and HTTP concerns live in `milieu-client`
//! - **Plain owned values** - no shared mutable state, each call to the
//!   backend produces fresh copies
//! - **Normalized at the edge** - backend shape drift (string vs descriptor
//!   race/culture fields) is absorbed before these types are built

pub mod character;
pub mod common;
pub mod conversation;
pub mod reference;
pub mod scenario;
pub mod session;

pub use character::{Character, CharacterContext, Culture, EquipmentSummary, Item, Race};
pub use common::{format_scenario_name, generate_session_id, is_valid_uuid};
pub use conversation::{ConversationMessage, MessageKind, MessagePart, MessageUsage, PartKind};
pub use reference::{
    CharacteristicData, CharacteristicsData, CultureData, EquipmentCatalog, EquipmentEntry,
    MagicSpheres, RaceData, SkillEntry, SkillGroups, SpellData,
};
pub use scenario::ScenarioStatus;
pub use session::{GameSession, SessionStatus};

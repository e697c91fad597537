//! Milieu Shared - wire-format types for the game backend REST API.
//!
//! This crate contains the shapes exactly as the backend sends and accepts
//! them, prior to normalization into `milieu-domain` view models:
//! - Versioned DTOs absorbing backend shape drift ([`dto`])
//! - Request bodies and response envelopes per endpoint family
//! - The FastAPI-style error body ([`error_body`])
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **Tolerant decoding** - optional and defaulted fields wherever the
//!    backend has been observed to omit them
//! 3. **Normalization happens in the client crate** - ambiguity stays here

pub mod dto;
pub mod error_body;
pub mod requests;
pub mod responses;

pub use dto::{CharacterDto, DescriptorDto, SessionRecordDto};
pub use error_body::{ErrorBody, ErrorDetail, FieldError};
pub use requests::{
    AllocateAttributesRequest, CharacterDraft, CheckAttributesRequest, CheckSkillsRequest,
    CombatAttackRequest, NewCharacterRequest, PlayScenarioRequest, SaveCharacterRequest,
    StartScenarioRequest,
};
pub use responses::{
    ActiveSessionsResponse, AllocateAttributesResponse, CharacterListResponse,
    CheckAttributesResponse, CheckSkillsResponse, CreationStatusResponse,
    GenerateBackgroundResponse, GenerateNameResponse, GeneratePhysicalDescriptionResponse,
    HistoryResponse, PlayReply, PlayScenarioResponse, SaveCharacterResponse,
    ScenarioListResponse, StartScenarioResponse,
};

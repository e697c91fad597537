//! Typed operation services, one per endpoint family.
//!
//! Each service is a thin wrapper over the shared [`ApiGateway`]: it knows
//! its endpoints, the request/response envelopes, and which conversions to
//! apply on the way out. None of them keeps state between calls.
//!
//! [`ApiGateway`]: crate::application::gateway::ApiGateway

pub mod character_service;
pub mod combat_service;
pub mod creation_service;
pub mod generation_service;
pub mod scenario_service;
pub mod session_service;

pub use character_service::CharacterService;
pub use combat_service::CombatService;
pub use creation_service::CreationService;
pub use generation_service::GenerationService;
pub use scenario_service::ScenarioService;
pub use session_service::{validate_session_params, SessionService};

//! Milieu Client - typed HTTP gateway to the "Terres du Milieu" backend.
//!
//! Single choke point for all outbound backend communication. The crate is
//! organized hexagonally:
//! - `ports::outbound` - the object-safe [`HttpPort`] transport boundary
//! - `infrastructure` - the `reqwest` adapter and wire converters
//! - `application` - the dispatch primitive and the typed operation services
//!
//! Every operation is a stateless async round trip returning
//! `Result<_, ApiError>`: no retries, no caching, no cancellation. Callers
//! only ever observe the one [`ApiError`] shape.

pub mod application;
pub mod client;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::gateway::ApiGateway;
pub use application::services::{
    validate_session_params, CharacterService, CombatService, CreationService,
    GenerationService, ScenarioService, SessionService,
};
pub use client::MilieuClient;
pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::ApiError;
pub use infrastructure::http_client::ReqwestTransport;
pub use ports::outbound::{HttpMethod, HttpPort, HttpRequest, HttpResponse, TransportError};

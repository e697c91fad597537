//! Pure utility functions used across the client.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects beyond clock/randomness reads
//! - **No network awareness** - validation runs before any request is built

pub mod ids;
pub mod string;

pub use ids::{generate_session_id, is_valid_uuid};
pub use string::format_scenario_name;

//! Scenario listing view model.

use serde::{Deserialize, Serialize};

/// A scenario as listed by the library view, with its play status.
///
/// When a scenario is being played, the backend links it to the running
/// session via `session_id`, `scenario_name` and `character_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioStatus {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub scenario_name: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
}

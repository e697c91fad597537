//! Game session view models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

/// A running (or finished) playthrough of a scenario by one character.
///
/// This is a front-end projection assembled by the gateway from raw session
/// records. The backend does not always supply `status` or a last-activity
/// timestamp, in which case they default to [`SessionStatus::Active`] and
/// "now" - an acknowledged approximation, not a guarantee of accuracy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub session_id: String,
    pub scenario_name: String,
    pub character_name: String,
    pub status: SessionStatus,
    pub last_activity: DateTime<Utc>,
}

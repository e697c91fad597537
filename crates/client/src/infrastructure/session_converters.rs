//! Wire-to-view-model conversion for session records.

use chrono::{DateTime, Utc};

use milieu_domain::{GameSession, SessionStatus};
use milieu_shared::SessionRecordDto;

/// Convert a raw session record into the [`GameSession`] view model.
///
/// The backend does not always supply a status or a last-activity
/// timestamp; missing or unrecognized values default to
/// [`SessionStatus::Active`] and "now". Those defaults are an acknowledged
/// approximation for display purposes, not a statement about the session.
pub fn session_record_to_game_session(record: SessionRecordDto) -> GameSession {
    let status = record
        .status
        .as_deref()
        .map_or(SessionStatus::Active, parse_session_status);
    let last_activity = record
        .last_activity
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or_else(Utc::now);

    GameSession {
        session_id: record.session_id,
        scenario_name: record.scenario_name,
        character_name: record
            .character_name
            .unwrap_or_else(|| "Personnage inconnu".to_string()),
        status,
        last_activity,
    }
}

fn parse_session_status(value: &str) -> SessionStatus {
    match value {
        "paused" => SessionStatus::Paused,
        "completed" => SessionStatus::Completed,
        _ => SessionStatus::Active,
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

//! Identifier validation and fallback generation.

use chrono::Utc;
use rand::Rng;
use uuid::{Uuid, Variant};

/// Returns `true` when `value` is a canonical hyphenated UUID
/// (8-4-4-4-12 hex groups) with version 1-5 and an RFC 4122 variant.
///
/// Session ids are checked with this before any network call; anything
/// else is rejected client-side.
pub fn is_valid_uuid(value: &str) -> bool {
    // parse_str also accepts simple/braced/urn forms; require the
    // canonical grouping explicitly.
    let canonical_grouping = value.len() == 36
        && value
            .bytes()
            .enumerate()
            .all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => b.is_ascii_hexdigit(),
            });
    if !canonical_grouping {
        return false;
    }

    match Uuid::parse_str(value) {
        Ok(uuid) => {
            (1..=5).contains(&uuid.get_version_num())
                && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

/// Generate a local fallback session id of the form
/// `session_<epoch-millis>_<random base-36 suffix>`.
///
/// Not globally unique - only distinguishable in practice, for tests and
/// offline fallbacks. Real session ids come from the backend.
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| {
            let digit = rng.gen_range(0..36u32);
            char::from_digit(digit, 36).unwrap_or('0')
        })
        .collect();
    format!("session_{}_{}", Utc::now().timestamp_millis(), suffix)
}

//! Identifier, credential, and timestamp generation.
//!
//! All three are generated application-side at creation time; storage
//! never assigns them. Entity IDs are random UUIDv4 strings (opaque,
//! non-sequential), API keys are 256 bits of OS randomness hex-encoded,
//! and timestamps are ISO-8601 UTC strings.

use chrono::{SecondsFormat, Utc};
use rand::RngCore;
use uuid::Uuid;

/// Number of random bytes in an API key (256 bits).
pub const API_KEY_BYTES: usize = 32;

/// Generate a fresh entity identifier (UUIDv4 string).
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a fresh API key: 32 bytes from the OS RNG, hex-encoded.
pub fn new_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Current time as an ISO-8601 UTC string.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_is_valid_uuid() {
        let id = new_entity_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(new_entity_id(), new_entity_id());
    }

    #[test]
    fn test_api_key_is_64_hex_chars() {
        let key = new_api_key();
        assert_eq!(key.len(), API_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_api_keys_are_unique() {
        assert_ne!(new_api_key(), new_api_key());
    }

    #[test]
    fn test_timestamp_parses_as_rfc3339() {
        let ts = utc_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}

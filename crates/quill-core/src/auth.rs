//! API-key header parsing.
//!
//! The credential travels in the standard `Authorization` header with
//! the scheme token `ApiKey`:
//!
//! ```text
//! Authorization: ApiKey <hex-secret>
//! ```
//!
//! Parsing is deliberately strict: exactly one space, exactly two
//! tokens, exact scheme match. Anything else is malformed. Resolving
//! the parsed key against storage happens elsewhere; this module is
//! pure and unit-testable.

use crate::{Error, Result};

/// Expected scheme token in the Authorization header.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Rejection reason when the header is absent entirely.
pub const MSG_NO_AUTH_HEADER: &str = "no authorization header included";

/// Rejection reason when the header does not match `ApiKey <token>`.
pub const MSG_MALFORMED_AUTH_HEADER: &str = "malformed authorization header";

/// Rejection reason when a well-formed key resolves to no user.
pub const MSG_USER_NOT_FOUND: &str = "Couldn't get user";

/// Extract the candidate API key from a raw `Authorization` header value.
///
/// Returns `Error::Unauthorized` with a fixed reason string when the
/// header is missing or does not split into exactly
/// `["ApiKey", <token>]` on a single space.
pub fn parse_api_key(header: Option<&str>) -> Result<&str> {
    let header = header.ok_or_else(|| Error::Unauthorized(MSG_NO_AUTH_HEADER.to_string()))?;

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != API_KEY_SCHEME {
        return Err(Error::Unauthorized(MSG_MALFORMED_AUTH_HEADER.to_string()));
    }

    Ok(parts[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unauthorized_reason(result: Result<&str>) -> String {
        match result {
            Err(Error::Unauthorized(msg)) => msg,
            other => panic!("Expected Unauthorized, got {:?}", other.map(|s| s.to_string())),
        }
    }

    #[test]
    fn test_missing_header_rejected() {
        let reason = unauthorized_reason(parse_api_key(None));
        assert_eq!(reason, MSG_NO_AUTH_HEADER);
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let reason = unauthorized_reason(parse_api_key(Some("Bearer token123")));
        assert_eq!(reason, MSG_MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_scheme_without_token_rejected() {
        let reason = unauthorized_reason(parse_api_key(Some("ApiKey")));
        assert_eq!(reason, MSG_MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_extra_tokens_rejected() {
        let reason = unauthorized_reason(parse_api_key(Some("ApiKey one two")));
        assert_eq!(reason, MSG_MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_double_space_rejected() {
        // "ApiKey  key" splits into three tokens (middle one empty).
        let reason = unauthorized_reason(parse_api_key(Some("ApiKey  key")));
        assert_eq!(reason, MSG_MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let reason = unauthorized_reason(parse_api_key(Some("apikey secret")));
        assert_eq!(reason, MSG_MALFORMED_AUTH_HEADER);
    }

    #[test]
    fn test_valid_header_yields_key() {
        let key = parse_api_key(Some("ApiKey secret-key-123")).unwrap();
        assert_eq!(key, "secret-key-123");
    }
}

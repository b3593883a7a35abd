//! Token claims decoding
//!
//! Reads the payload segment of a compact JWT without verifying it. The
//! signature is the server's business; the client only needs the roles to
//! decide what to show. Decoding is total: any malformed input yields empty
//! claims, which callers treat as anonymous.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

/// URL-safe decoder as lenient as the browser's `atob`: padding optional,
/// non-zero trailing bits accepted.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Role granted to administrators by the backend
pub const ROLE_ADMIN: &str = "ROLES_ADMIN";

/// Role granted to regular members by the backend
pub const ROLE_USER: &str = "ROLES_USER";

/// Decoded token payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The `sub` claim (the member's email for this backend)
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// Roles from `roles`, falling back to `authorities`.
    ///
    /// Accepts a list of strings, a list of `{ "authority": .. }` objects, or a
    /// single comma-separated string.
    pub fn roles(&self) -> Vec<String> {
        let raw = self
            .0
            .get("roles")
            .filter(|v| is_truthy(v))
            .or_else(|| self.0.get("authorities").filter(|v| is_truthy(v)));

        match raw {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Object(obj) => obj
                        .get("authority")
                        .and_then(Value::as_str)
                        .map(|s| s.trim().to_string()),
                    _ => None,
                })
                .filter(|role| !role.is_empty())
                .collect(),
            Some(Value::String(s)) => split_roles(s),
            Some(other) => split_roles(&other.to_string()),
            None => Vec::new(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

fn split_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(String::from)
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode the claims of a compact token. Never fails.
pub fn decode_claims(token: &str) -> Claims {
    match try_decode(token) {
        Some(map) => Claims(map),
        None => {
            tracing::debug!("token payload could not be decoded, treating as anonymous");
            Claims::default()
        }
    }
}

fn try_decode(token: &str) -> Option<Map<String, Value>> {
    let payload = token.split('.').nth(1)?;
    let normalized: String = payload
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = PAYLOAD_ENGINE.decode(normalized.as_bytes()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    match serde_json::from_str::<Value>(&text).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    fn token_with(payload: &Value) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJIUzI1NiJ9.{}.signature", encoded)
    }

    #[test]
    fn test_decode_valid_token() {
        let token = token_with(&json!({"sub": "admin@example.com", "roles": "ROLES_ADMIN"}));
        let claims = decode_claims(&token);

        assert_eq!(claims.subject(), Some("admin@example.com"));
        assert_eq!(claims.roles(), vec!["ROLES_ADMIN".to_string()]);
        assert!(claims.is_admin());
    }

    #[test]
    fn test_decode_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(json!({"sub": "a"}).to_string());
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).subject(), Some("a"));
    }

    #[test]
    fn test_decode_payload_with_trailing_bits() {
        // same bytes as "eyJhIjoxfQ", last character carries non-zero spare bits
        let claims = decode_claims("h.eyJhIjoxfR.s");
        assert_eq!(claims.get("a"), Some(&json!(1)));
        assert_eq!(claims, decode_claims("h.eyJhIjoxfQ.s"));
    }

    #[test]
    fn test_decode_standard_alphabet_payload() {
        let payload = base64::engine::general_purpose::STANDARD
            .encode(json!({"note": "?>?"}).to_string());
        let token = format!("h.{}.s", payload);
        assert_eq!(
            decode_claims(&token).get("note"),
            Some(&Value::String("?>?".to_string()))
        );
    }

    #[test]
    fn test_decode_unicode_payload() {
        let token = token_with(&json!({"name": "Zoë"}));
        assert_eq!(
            decode_claims(&token).get("name").and_then(Value::as_str),
            Some("Zoë")
        );
    }

    #[test]
    fn test_malformed_tokens_yield_empty_claims() {
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        let not_object = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2,3]"));
        let not_utf8 = format!("h.{}.s", URL_SAFE_NO_PAD.encode([0xffu8, 0xfe, 0xfd]));

        for token in [
            "",
            "single-segment",
            "h.!!!not-base64!!!.s",
            not_json.as_str(),
            not_object.as_str(),
            not_utf8.as_str(),
        ] {
            assert!(decode_claims(token).is_empty(), "expected empty claims for {token:?}");
        }
    }

    #[test]
    fn test_two_segments_are_enough() {
        let encoded = URL_SAFE_NO_PAD.encode(json!({"sub": "x"}).to_string());
        let token = format!("header.{}", encoded);
        assert_eq!(decode_claims(&token).subject(), Some("x"));
    }

    #[test]
    fn test_roles_from_array() {
        let claims = decode_claims(&token_with(&json!({"roles": ["ROLES_USER", " ROLES_ADMIN "]})));
        assert_eq!(claims.roles(), vec!["ROLES_USER", "ROLES_ADMIN"]);
    }

    #[test]
    fn test_roles_from_comma_separated_string() {
        let claims = decode_claims(&token_with(&json!({"roles": "ROLES_USER, ROLES_ADMIN,"})));
        assert_eq!(claims.roles(), vec!["ROLES_USER", "ROLES_ADMIN"]);
    }

    #[test]
    fn test_roles_fall_back_to_authorities() {
        let claims = decode_claims(&token_with(&json!({
            "roles": "",
            "authorities": [{"authority": "ROLES_USER"}]
        })));
        assert_eq!(claims.roles(), vec!["ROLES_USER"]);
        assert!(claims.has_role(ROLE_USER));
        assert!(!claims.is_admin());
    }

    #[test]
    fn test_no_roles() {
        let claims = decode_claims(&token_with(&json!({"sub": "someone"})));
        assert!(claims.roles().is_empty());
        assert!(Claims::default().roles().is_empty());
    }
}

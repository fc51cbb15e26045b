// src/types/claims.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use serde_json::Value;

/// Claims carried in the payload segment of a session credential.
///
/// No claim is mandatory at this layer; the gate decides what a missing
/// `exp` means. Unknown claims land in `extra` instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    #[serde(rename = "sub", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(rename = "name", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "email", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// Seconds since epoch.
    #[serde(rename = "iat", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<u64>,
    /// Seconds since epoch.
    #[serde(rename = "exp", default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// Identity claims are opaque; a numeric `sub` or structured `name` is kept
// as its JSON text instead of failing the whole document.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

impl ClaimSet {
    pub fn extra_claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registered_names_map_to_fields() {
        let claims: ClaimSet = serde_json::from_value(json!({
            "sub": "user-42",
            "name": "Ada",
            "email": "ada@example.com",
            "iat": 1_700_000_000u64,
            "exp": 1_700_003_600u64,
            "tenant": "acme"
        }))
        .unwrap();

        assert_eq!(claims.subject_id.as_deref(), Some("user-42"));
        assert_eq!(claims.display_name.as_deref(), Some("Ada"));
        assert_eq!(claims.contact_address.as_deref(), Some("ada@example.com"));
        assert_eq!(claims.issued_at, Some(1_700_000_000));
        assert_eq!(claims.expires_at, Some(1_700_003_600));
        assert_eq!(claims.extra_claim("tenant"), Some(&json!("acme")));
        assert_eq!(claims.extra.len(), 1);
    }

    #[test]
    fn test_non_string_identity_claims_are_kept_as_text() {
        let claims: ClaimSet = serde_json::from_value(json!({
            "sub": 12345,
            "name": { "given": "Ada" },
            "email": null,
            "exp": 1_700_003_600u64
        }))
        .unwrap();

        assert_eq!(claims.subject_id.as_deref(), Some("12345"));
        assert_eq!(claims.display_name.as_deref(), Some(r#"{"given":"Ada"}"#));
        assert_eq!(claims.contact_address, None);
        assert_eq!(claims.expires_at, Some(1_700_003_600));
    }

    #[test]
    fn test_negative_expiry_is_rejected() {
        let result = serde_json::from_value::<ClaimSet>(json!({ "exp": -5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_claims() {
        let claims = ClaimSet {
            subject_id: Some("abc".to_string()),
            ..ClaimSet::default()
        };
        assert_eq!(serde_json::to_value(&claims).unwrap(), json!({ "sub": "abc" }));
    }
}

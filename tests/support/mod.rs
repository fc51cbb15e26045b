// Shared helpers for integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (default 64).

#![allow(dead_code)]

use jsonwebtoken::{encode, EncodingKey, Header};
use proptest::prelude::ProptestConfig;
use serde::Serialize;
use serde_json::Value;

pub const NOW: u64 = 1_700_000_000;

/// Mints an HS256 credential the way an issuer would. The gate never checks
/// the signature, so the secret is irrelevant.
pub fn mint<T: Serialize>(claims: &T) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(b"test_secret_for_session_gate"),
    )
    .unwrap()
}

/// Builds `header.payload.signature` around a raw payload segment.
pub fn with_payload(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{}.c2lnbmF0dXJl", payload)
}

pub fn encode_document(document: &Value) -> String {
    base64::encode_config(document.to_string(), base64::URL_SAFE_NO_PAD)
}

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

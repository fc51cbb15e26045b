//! Untrusted decoding of compact `header.payload.signature` credentials.
//!
//! Only the payload segment is read and the signature is never checked, so
//! the result is good for UX decisions (when to refresh) and nothing more.

use serde_json::Value;

use crate::error::SessionTokenError;
use crate::types::ClaimSet;

const SEGMENT_COUNT: usize = 3;

/// Decodes the claim set carried in `credential`.
///
/// Fails with [`SessionTokenError::MalformedCredential`] when the credential
/// does not have exactly three segments, when the payload is not base64url,
/// or when the decoded bytes are not a JSON object matching [`ClaimSet`].
pub fn decode(credential: &str) -> Result<ClaimSet, SessionTokenError> {
    let parts: Vec<&str> = credential.split('.').collect();
    if parts.len() != SEGMENT_COUNT {
        tracing::debug!(segments = parts.len(), "rejecting credential: wrong segment count");
        return Err(SessionTokenError::MalformedCredential);
    }

    let payload_bytes = decode_segment(parts[1])?;
    parse_claims(&payload_bytes)
}

/// Maps the URL-safe alphabet back to the standard one and restores padding.
pub(crate) fn to_padded_standard(segment: &str) -> String {
    let mut standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let padding = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(padding));
    standard
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, SessionTokenError> {
    base64::decode_config(to_padded_standard(segment), base64::STANDARD).map_err(|e| {
        tracing::debug!(error = %e, "rejecting credential: payload is not base64");
        SessionTokenError::MalformedCredential
    })
}

fn parse_claims(payload_bytes: &[u8]) -> Result<ClaimSet, SessionTokenError> {
    let payload_str = std::str::from_utf8(payload_bytes).map_err(|_| {
        tracing::debug!("rejecting credential: payload is not UTF-8");
        SessionTokenError::MalformedCredential
    })?;

    let document: Value = serde_json::from_str(payload_str).map_err(|e| {
        tracing::debug!(error = %e, "rejecting credential: payload is not JSON");
        SessionTokenError::MalformedCredential
    })?;

    if !document.is_object() {
        tracing::debug!("rejecting credential: payload is not a JSON object");
        return Err(SessionTokenError::MalformedCredential);
    }

    serde_json::from_value(document).map_err(|e| {
        tracing::debug!(error = %e, "rejecting credential: claims have the wrong shape");
        SessionTokenError::MalformedCredential
    })
}

use crate::jwt_core::clock::Clock;
use crate::jwt_core::session_gate::SessionGate;
use crate::jwt_core::token_codec::decode;
use crate::types::{Output, SessionState, ValidityVerdict};

/// Builds the CLI report for `token`. Malformed input yields an `Invalid`
/// report, never an error.
pub fn inspect<C: Clock>(gate: &SessionGate<C>, token: &str) -> Output {
    let skew_seconds = gate.config().skew_seconds;

    match decode(token) {
        Ok(claims) => {
            let verdict = gate.verdict_for(&claims);
            let status = gate.classify(verdict);
            let detail = match status {
                SessionState::Valid => String::new(),
                SessionState::Expiring => "Session is close to expiry; refresh it soon.".to_string(),
                _ => "Session is no longer usable; re-authenticate.".to_string(),
            };
            Output {
                status,
                claims: Some(claims),
                verdict,
                skew_seconds,
                detail,
            }
        }
        Err(e) => Output {
            status: SessionState::Invalid,
            claims: None,
            verdict: ValidityVerdict::fail_closed(),
            skew_seconds,
            detail: format!("{}; re-authenticate.", e),
        },
    }
}

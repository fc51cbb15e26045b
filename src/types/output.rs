use serde::Serialize;

use crate::types::{ClaimSet, SessionState, ValidityVerdict};

/// Report printed by the CLI for one inspected credential.
#[derive(Debug, Serialize)]
pub struct Output {
    pub status: SessionState,
    pub claims: Option<ClaimSet>,
    #[serde(flatten)]
    pub verdict: ValidityVerdict,
    pub skew_seconds: u64,
    pub detail: String,
}

impl Output {
    pub fn exit_code(&self) -> i32 {
        if self.status.is_usable() {
            0
        } else {
            1
        }
    }
}

use serde::Serialize;
use std::fmt;

/// Temporal verdict for one credential, computed from a single clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidityVerdict {
    pub expired: bool,
    pub seconds_remaining: u64,
}

impl ValidityVerdict {
    /// Verdict for anything that cannot be trusted: decode failures and
    /// credentials without an expiry.
    pub const fn fail_closed() -> Self {
        ValidityVerdict {
            expired: true,
            seconds_remaining: 0,
        }
    }
}

/// Where a held session sits in its lifecycle.
///
/// `Valid` and `Expiring` decay into `Expired` purely with wall-clock time;
/// leaving `Expired` or `Invalid` requires a new credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Unknown,
    Valid,
    Expiring,
    Expired,
    Invalid,
}

impl SessionState {
    pub fn is_usable(self) -> bool {
        matches!(self, SessionState::Valid | SessionState::Expiring)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unknown => write!(f, "UNKNOWN"),
            SessionState::Valid => write!(f, "VALID"),
            SessionState::Expiring => write!(f, "EXPIRING"),
            SessionState::Expired => write!(f, "EXPIRED"),
            SessionState::Invalid => write!(f, "INVALID"),
        }
    }
}

//! Client-side session credential validation.
//!
//! Decodes the claims of a compact JWT without verifying its signature and
//! decides, from the claimed expiry alone, whether the session is still
//! usable. Nothing here is a security boundary: authenticity must be checked
//! server-side.

pub mod config;
pub mod error;
pub mod helpers;
pub mod jwt_core;
pub mod types;

pub use config::GateConfig;
pub use error::SessionTokenError;
pub use jwt_core::clock::{Clock, FixedClock, SystemClock};
pub use jwt_core::session_gate::SessionGate;
pub use jwt_core::token_codec::decode;
pub use types::{ClaimSet, SessionState, ValidityVerdict};

/// Checks `credential` against the wall clock. `skew_seconds` defaults to
/// [`config::DEFAULT_SKEW_SECONDS`].
pub fn is_expired(credential: &str, skew_seconds: Option<u64>) -> bool {
    let skew = skew_seconds.unwrap_or(config::DEFAULT_SKEW_SECONDS);
    SessionGate::<SystemClock>::default().is_expired_with_skew(credential, skew)
}

pub fn seconds_remaining(credential: &str) -> u64 {
    SessionGate::<SystemClock>::default().seconds_remaining(credential)
}

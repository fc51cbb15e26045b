use crate::config::GateConfig;
use crate::jwt_core::clock::{Clock, SystemClock};
use crate::jwt_core::token_codec;
use crate::types::{ClaimSet, SessionState, ValidityVerdict};

/// Answers temporal questions about a credential without any I/O.
///
/// Methods taking a raw credential re-decode it on every call and read the
/// clock once. Nothing is cached, so a gate can be shared between threads.
#[derive(Debug, Clone)]
pub struct SessionGate<C = SystemClock> {
    clock: C,
    config: GateConfig,
}

impl SessionGate<SystemClock> {
    pub fn new(config: GateConfig) -> Self {
        SessionGate::with_clock(SystemClock, config)
    }
}

impl Default for SessionGate<SystemClock> {
    fn default() -> Self {
        SessionGate::new(GateConfig::default())
    }
}

impl<C: Clock> SessionGate<C> {
    pub fn with_clock(clock: C, config: GateConfig) -> Self {
        SessionGate { clock, config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn is_expired(&self, credential: &str) -> bool {
        self.is_expired_with_skew(credential, self.config.skew_seconds)
    }

    /// Undecodable credentials and credentials without `exp` are expired.
    pub fn is_expired_with_skew(&self, credential: &str, skew_seconds: u64) -> bool {
        match token_codec::decode(credential) {
            Ok(claims) => evaluate(&claims, self.clock.now_secs(), skew_seconds).expired,
            Err(_) => true,
        }
    }

    /// Seconds until the literal `exp`, without skew. Zero when the credential
    /// is unusable or already past expiry.
    pub fn seconds_remaining(&self, credential: &str) -> u64 {
        match token_codec::decode(credential) {
            Ok(claims) => evaluate(&claims, self.clock.now_secs(), 0).seconds_remaining,
            Err(_) => 0,
        }
    }

    pub fn verdict(&self, credential: &str) -> ValidityVerdict {
        match token_codec::decode(credential) {
            Ok(claims) => self.verdict_for(&claims),
            Err(_) => ValidityVerdict::fail_closed(),
        }
    }

    pub fn verdict_for(&self, claims: &ClaimSet) -> ValidityVerdict {
        evaluate(claims, self.clock.now_secs(), self.config.skew_seconds)
    }

    pub fn is_usable(&self, credential: &str) -> bool {
        !self.is_expired(credential)
    }

    pub fn state(&self, credential: Option<&str>) -> SessionState {
        let Some(credential) = credential else {
            return SessionState::Unknown;
        };

        match token_codec::decode(credential) {
            Ok(claims) => self.state_for(&claims),
            Err(_) => SessionState::Invalid,
        }
    }

    pub fn state_for(&self, claims: &ClaimSet) -> SessionState {
        self.classify(self.verdict_for(claims))
    }

    pub fn classify(&self, verdict: ValidityVerdict) -> SessionState {
        let state = if verdict.expired {
            SessionState::Expired
        } else if verdict.seconds_remaining < self.config.warning_threshold_seconds {
            SessionState::Expiring
        } else {
            SessionState::Valid
        };
        tracing::trace!(%state, seconds_remaining = verdict.seconds_remaining, "session state evaluated");
        state
    }
}

fn evaluate(claims: &ClaimSet, now: u64, skew_seconds: u64) -> ValidityVerdict {
    let Some(expires_at) = claims.expires_at else {
        return ValidityVerdict::fail_closed();
    };

    // exp - skew saturates at 0, and now >= 0 always holds, so a skew wider
    // than exp itself always reads as expired
    let threshold = expires_at.saturating_sub(skew_seconds);
    ValidityVerdict {
        expired: now >= threshold,
        seconds_remaining: expires_at.saturating_sub(now),
    }
}

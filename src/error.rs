use thiserror::Error;

/// Every decode failure collapses into this single kind so callers cannot
/// tell which stage rejected the credential.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("Malformed credential")]
    MalformedCredential,
}

// src/types/mod.rs
pub mod claims;
pub mod verdict;
pub mod output;

pub use claims::ClaimSet;
pub use verdict::{SessionState, ValidityVerdict};
pub use output::Output;

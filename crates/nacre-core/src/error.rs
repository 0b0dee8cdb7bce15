// crates/nacre-core/src/error.rs
//
// Shared error types for the Nacre Protocol.

use thiserror::Error;

/// A string failed the asset denomination format check.
///
/// Carries the offending string and the rule it broke so that callers
/// (genesis import, governance proposal handlers) can surface a precise
/// rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid denom {denom:?}: {reason}")]
pub struct DenomError {
    /// The rejected denomination string.
    pub denom: String,
    /// Which format rule the string violated.
    pub reason: &'static str,
}

impl DenomError {
    /// Record a rejected denomination and the rule it broke.
    pub fn new(denom: impl Into<String>, reason: &'static str) -> Self {
        Self {
            denom: denom.into(),
            reason,
        }
    }
}

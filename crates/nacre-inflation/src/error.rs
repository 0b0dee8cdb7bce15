// crates/nacre-inflation/src/error.rs
//
// Errors raised while validating inflation parameters.
//
// Every variant is a non-retryable configuration rejection: an invalid
// parameter set must never enter chain state, so callers (genesis import,
// governance proposal handlers) abort the whole operation on the first
// failure. There is no partial acceptance and no recovery path.

use nacre_core::{DenomError, Decimal};
use thiserror::Error;

/// Validation failure for inflation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The mint denomination failed the asset denomination format check.
    #[error("invalid mint denom: {0}")]
    InvalidDenom(#[from] DenomError),

    /// A decay formula coefficient (A, C, or B) was negative.
    #[error("coefficient {name} cannot be negative, got {value}")]
    NegativeCoefficient { name: &'static str, value: Decimal },

    /// A bounded parameter fell outside its [0, 1] range.
    #[error("{name} must be between 0 and 1 inclusive, got {value}")]
    RangeViolation { name: &'static str, value: Decimal },

    /// A distribution ratio was negative.
    #[error("distribution ratio {name} cannot be negative, got {value}")]
    NegativeRatio { name: &'static str, value: Decimal },

    /// The three distribution ratios did not sum to exactly 1.
    #[error("inflation distribution ratios must sum to exactly 1, got {0}")]
    DistributionNotNormalized(Decimal),

    /// A param-store update named a key this module does not register.
    #[error("unknown param key {0:?}")]
    UnknownParamKey(String),

    /// A param-store update supplied a value of the wrong kind for its key.
    #[error("param key {key} expects a {expected} value, got {got}")]
    KindMismatch {
        key: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// A genesis-level field (outside `Params`) was malformed.
    #[error("invalid genesis state: {0}")]
    InvalidGenesis(&'static str),
}

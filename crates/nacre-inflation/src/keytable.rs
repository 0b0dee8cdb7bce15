// crates/nacre-inflation/src/keytable.rs
//
// Param-store registration for the inflation module.
//
// The external param store updates fields independently: a governance
// proposal may change only the distribution split, and only that field is
// re-validated. Registration is explicit: `ParamKeyTable::new()` returns an
// immutable list of (key, validator) pairs that the store consumes at
// startup. There is no global mutable registry.

use serde::{Deserialize, Serialize};

use crate::distribution::InflationDistribution;
use crate::error::ParamError;
use crate::exponential::ExponentialCalculation;
use crate::params::Params;

/// Store key for the mint denomination field.
pub const KEY_MINT_DENOM: &str = "MintDenom";

/// Store key for the decay formula coefficients.
pub const KEY_EXPONENTIAL_CALCULATION: &str = "ExponentialCalculation";

/// Store key for the distribution split.
pub const KEY_INFLATION_DISTRIBUTION: &str = "InflationDistribution";

/// A single parameter field value, as handled by the param store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    MintDenom(String),
    ExponentialCalculation(ExponentialCalculation),
    InflationDistribution(InflationDistribution),
}

impl ParamValue {
    /// Name of the value's kind, for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::MintDenom(_) => "MintDenom",
            ParamValue::ExponentialCalculation(_) => "ExponentialCalculation",
            ParamValue::InflationDistribution(_) => "InflationDistribution",
        }
    }
}

/// Validator for a single registered parameter field.
pub type ParamValidator = fn(&ParamValue) -> Result<(), ParamError>;

/// One registered parameter field: its store key and its validator.
#[derive(Clone, Copy)]
pub struct ParamSetPair {
    pub key: &'static str,
    pub validator: ParamValidator,
}

/// The inflation module's registered parameter fields.
///
/// Built once and handed to the external param store; the pair list never
/// changes after construction.
pub struct ParamKeyTable {
    pairs: Vec<ParamSetPair>,
}

impl ParamKeyTable {
    /// Register the three inflation parameter fields.
    pub fn new() -> Self {
        Self {
            pairs: vec![
                ParamSetPair {
                    key: KEY_MINT_DENOM,
                    validator: validate_mint_denom_value,
                },
                ParamSetPair {
                    key: KEY_EXPONENTIAL_CALCULATION,
                    validator: validate_exponential_value,
                },
                ParamSetPair {
                    key: KEY_INFLATION_DISTRIBUTION,
                    validator: validate_distribution_value,
                },
            ],
        }
    }

    /// The registered (key, validator) pairs, in registration order.
    pub fn pairs(&self) -> &[ParamSetPair] {
        &self.pairs
    }

    /// Validate a single field update against its registered validator.
    ///
    /// # Errors
    /// Returns [`ParamError::UnknownParamKey`] for an unregistered key,
    /// [`ParamError::KindMismatch`] when the value's kind does not match the
    /// key, and otherwise whatever the field validator reports.
    pub fn validate(&self, key: &str, value: &ParamValue) -> Result<(), ParamError> {
        let pair = self
            .pairs
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| ParamError::UnknownParamKey(key.to_string()))?;
        (pair.validator)(value)
    }

    /// Validate a field update still in the store's serialized form.
    ///
    /// The store persists field values as JSON; this deserializes the raw
    /// value into the kind registered for `key` and validates it. A value
    /// that does not deserialize to the registered kind is a kind mismatch.
    pub fn validate_raw(&self, key: &str, raw: &serde_json::Value) -> Result<(), ParamError> {
        let value = match key {
            KEY_MINT_DENOM => serde_json::from_value::<String>(raw.clone())
                .map(ParamValue::MintDenom)
                .map_err(|_| ParamError::KindMismatch {
                    key: KEY_MINT_DENOM,
                    expected: "MintDenom",
                    got: "unparseable value",
                })?,
            KEY_EXPONENTIAL_CALCULATION => {
                serde_json::from_value::<ExponentialCalculation>(raw.clone())
                    .map(ParamValue::ExponentialCalculation)
                    .map_err(|_| ParamError::KindMismatch {
                        key: KEY_EXPONENTIAL_CALCULATION,
                        expected: "ExponentialCalculation",
                        got: "unparseable value",
                    })?
            }
            KEY_INFLATION_DISTRIBUTION => {
                serde_json::from_value::<InflationDistribution>(raw.clone())
                    .map(ParamValue::InflationDistribution)
                    .map_err(|_| ParamError::KindMismatch {
                        key: KEY_INFLATION_DISTRIBUTION,
                        expected: "InflationDistribution",
                        got: "unparseable value",
                    })?
            }
            other => return Err(ParamError::UnknownParamKey(other.to_string())),
        };
        self.validate(key, &value)
    }
}

impl Default for ParamKeyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Params {
    /// Decompose a bundle into per-key values, in registration order.
    ///
    /// Used by the store to seed the three fields from a whole-value
    /// genesis bundle.
    pub fn param_set_values(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            (
                KEY_MINT_DENOM,
                ParamValue::MintDenom(self.mint_denom.clone()),
            ),
            (
                KEY_EXPONENTIAL_CALCULATION,
                ParamValue::ExponentialCalculation(self.exponential_calculation.clone()),
            ),
            (
                KEY_INFLATION_DISTRIBUTION,
                ParamValue::InflationDistribution(self.inflation_distribution.clone()),
            ),
        ]
    }
}

fn validate_mint_denom_value(value: &ParamValue) -> Result<(), ParamError> {
    match value {
        ParamValue::MintDenom(denom) => {
            nacre_core::validate_denom(denom)?;
            Ok(())
        }
        other => Err(ParamError::KindMismatch {
            key: KEY_MINT_DENOM,
            expected: "MintDenom",
            got: other.kind(),
        }),
    }
}

fn validate_exponential_value(value: &ParamValue) -> Result<(), ParamError> {
    match value {
        ParamValue::ExponentialCalculation(exp) => exp.validate(),
        other => Err(ParamError::KindMismatch {
            key: KEY_EXPONENTIAL_CALCULATION,
            expected: "ExponentialCalculation",
            got: other.kind(),
        }),
    }
}

fn validate_distribution_value(value: &ParamValue) -> Result<(), ParamError> {
    match value {
        ParamValue::InflationDistribution(dist) => dist.validate(),
        other => Err(ParamError::KindMismatch {
            key: KEY_INFLATION_DISTRIBUTION,
            expected: "InflationDistribution",
            got: other.kind(),
        }),
    }
}

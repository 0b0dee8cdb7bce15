// crates/nacre-inflation/src/params.rs
//
// The inflation module's parameter bundle.
//
// `Params` aggregates the mint denomination, the decay formula coefficients,
// and the distribution split. Construction and validation are separate
// steps: `Params::new` performs no checks, and callers gate acceptance on
// `validate()`. Once accepted into the external param store a `Params`
// value is never mutated; updates replace the whole value (or a single
// registered field, see `keytable`).

use nacre_core::validate_denom;
use serde::{Deserialize, Serialize};

use crate::distribution::InflationDistribution;
use crate::error::ParamError;
use crate::exponential::ExponentialCalculation;

/// The production mint denomination: atto-nacre, the 10^-18 unit of $NACRE.
pub const DEFAULT_MINT_DENOM: &str = "anacre";

/// Inflation module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Denomination of the token minted by the inflation module.
    pub mint_denom: String,
    /// Coefficients of the exponential decay emission formula.
    pub exponential_calculation: ExponentialCalculation,
    /// Split of minted tokens across the three sinks.
    pub inflation_distribution: InflationDistribution,
}

impl Params {
    /// Assemble a parameter bundle without validating it.
    pub fn new(
        mint_denom: impl Into<String>,
        exponential_calculation: ExponentialCalculation,
        inflation_distribution: InflationDistribution,
    ) -> Self {
        Self {
            mint_denom: mint_denom.into(),
            exponential_calculation,
            inflation_distribution,
        }
    }

    /// Check the whole bundle, short-circuiting on the first failure.
    ///
    /// Order: mint denom, then the decay coefficients, then the
    /// distribution split. No errors are collected; the first failure
    /// aborts acceptance of the entire value.
    pub fn validate(&self) -> Result<(), ParamError> {
        validate_denom(&self.mint_denom)?;
        self.exponential_calculation.validate()?;
        self.inflation_distribution.validate()?;
        Ok(())
    }
}

impl Default for Params {
    /// The chain's production defaults. Guaranteed to pass `validate()`;
    /// `test_default_params_are_valid` pins this.
    fn default() -> Self {
        Self {
            mint_denom: DEFAULT_MINT_DENOM.to_string(),
            exponential_calculation: ExponentialCalculation::default(),
            inflation_distribution: InflationDistribution::default(),
        }
    }
}

// crates/nacre-inflation/src/genesis.rs
//
// Genesis state for the inflation module.
//
// Captures the parameter bundle plus the schedule position: which period
// the chain is in, the epoch cadence that advances periods, and how many
// epochs were skipped while inflation was disabled. The keeper consumes
// this to resume the schedule after a restart or upgrade.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::params::Params;

/// Epoch identifier that advances the inflation period once per day.
pub const DAY_EPOCH_ID: &str = "day";

/// Number of daily epochs in one inflation period (one year).
pub const DEFAULT_EPOCHS_PER_PERIOD: u64 = 365;

/// Initial state of the inflation module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Module parameters.
    pub params: Params,
    /// Current period of the decay formula (the x in `a * (1 - r)^x`).
    pub period: u64,
    /// Identifier of the epoch that triggers per-period minting.
    pub epoch_identifier: String,
    /// Number of epochs that make up one inflation period.
    pub epochs_per_period: u64,
    /// Epochs skipped while inflation was disabled; excluded from the
    /// period count.
    pub skipped_epochs: u64,
}

impl GenesisState {
    /// Assemble a genesis state without validating it.
    pub fn new(
        params: Params,
        period: u64,
        epoch_identifier: impl Into<String>,
        epochs_per_period: u64,
        skipped_epochs: u64,
    ) -> Self {
        Self {
            params,
            period,
            epoch_identifier: epoch_identifier.into(),
            epochs_per_period,
            skipped_epochs,
        }
    }

    /// Check the whole genesis state, short-circuiting on the first failure.
    ///
    /// # Errors
    /// Propagates any [`ParamError`] from the parameter bundle, and returns
    /// [`ParamError::InvalidGenesis`] for a malformed schedule position.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.params.validate()?;
        if self.epoch_identifier.is_empty() {
            return Err(ParamError::InvalidGenesis(
                "epoch identifier cannot be empty",
            ));
        }
        if self.epochs_per_period == 0 {
            return Err(ParamError::InvalidGenesis(
                "epochs per period must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for GenesisState {
    /// Production genesis: default params, starting at period 0 with daily
    /// epochs and year-long periods.
    fn default() -> Self {
        Self {
            params: Params::default(),
            period: 0,
            epoch_identifier: DAY_EPOCH_ID.to_string(),
            epochs_per_period: DEFAULT_EPOCHS_PER_PERIOD,
            skipped_epochs: 0,
        }
    }
}

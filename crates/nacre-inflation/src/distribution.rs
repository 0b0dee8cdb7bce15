// crates/nacre-inflation/src/distribution.rs
//
// Three-way split of each period's minted tokens.
//
// Every newly minted token goes to exactly one of three sinks:
//   - staking rewards, paid to bonded validators and delegators
//   - usage incentives, funding the protocol incentive module
//   - the community pool
// The three ratios must each be non-negative and must sum to exactly 1
// under exact decimal arithmetic. There is no tolerance band: a sum of
// 0.999999 is a consensus-visible misconfiguration, not a rounding artifact.

use nacre_core::{dec, Decimal};
use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Fractional allocation of minted tokens across the three sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationDistribution {
    /// Fraction minted for staking rewards.
    pub staking_rewards: Decimal,
    /// Fraction minted for the usage incentive module.
    pub usage_incentives: Decimal,
    /// Fraction minted for the community pool.
    pub community_pool: Decimal,
}

impl InflationDistribution {
    /// Assemble a ratio set without validating it.
    pub fn new(
        staking_rewards: Decimal,
        usage_incentives: Decimal,
        community_pool: Decimal,
    ) -> Self {
        Self {
            staking_rewards,
            usage_incentives,
            community_pool,
        }
    }

    /// The exact sum of the three ratios.
    pub fn total(&self) -> Decimal {
        self.staking_rewards + self.usage_incentives + self.community_pool
    }

    /// Check that the ratios form a partition of 1.
    ///
    /// Ratios are checked for non-negativity in declaration order, then the
    /// exact sum is compared against 1; the first violation wins.
    ///
    /// # Errors
    /// Returns [`ParamError::NegativeRatio`] for a negative ratio and
    /// [`ParamError::DistributionNotNormalized`] (carrying the actual sum)
    /// when the ratios do not sum to exactly 1.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.staking_rewards < Decimal::ZERO {
            return Err(ParamError::NegativeRatio {
                name: "staking_rewards",
                value: self.staking_rewards,
            });
        }
        if self.usage_incentives < Decimal::ZERO {
            return Err(ParamError::NegativeRatio {
                name: "usage_incentives",
                value: self.usage_incentives,
            });
        }
        if self.community_pool < Decimal::ZERO {
            return Err(ParamError::NegativeRatio {
                name: "community_pool",
                value: self.community_pool,
            });
        }

        let total = self.total();
        if total != Decimal::ONE {
            return Err(ParamError::DistributionNotNormalized(total));
        }
        Ok(())
    }
}

impl Default for InflationDistribution {
    /// The production split: 53.3334% staking, 33.3333% usage incentives,
    /// 13.3333% community pool.
    fn default() -> Self {
        Self {
            staking_rewards: dec(533_334, 6),
            usage_incentives: dec(333_333, 6),
            community_pool: dec(133_333, 6),
        }
    }
}

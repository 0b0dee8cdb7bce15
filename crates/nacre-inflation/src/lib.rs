// crates/nacre-inflation/src/lib.rs
//
// nacre-inflation: Token inflation schedule parameters for the Nacre Protocol.
//
// Newly minted $NACRE follows an exponential decay schedule
//
//     inflation(x) = (a * (1 - r)^x) + c
//
// scaled by a bonding-ratio exponent, and each period's emission is split
// across staking rewards, usage incentives, and the community pool. This
// crate defines those parameters and their legality: the decay coefficients
// must keep the schedule monotonic and non-negative, and the three-way split
// must partition unity exactly. The keeper that evaluates the schedule and
// the store that persists the parameters live elsewhere; everything here is
// a pure value type with a validation predicate.

pub mod distribution;
pub mod error;
pub mod exponential;
pub mod genesis;
pub mod keytable;
pub mod params;

// Re-export key types for ergonomic access from downstream crates.
pub use distribution::InflationDistribution;
pub use error::ParamError;
pub use exponential::ExponentialCalculation;
pub use genesis::GenesisState;
pub use keytable::{
    ParamKeyTable, ParamSetPair, ParamValue, KEY_EXPONENTIAL_CALCULATION,
    KEY_INFLATION_DISTRIBUTION, KEY_MINT_DENOM,
};
pub use params::{Params, DEFAULT_MINT_DENOM};

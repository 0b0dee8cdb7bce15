// crates/nacre-core/src/lib.rs
//
// nacre-core: Core types and shared primitives for the Nacre Protocol.
//
// This is the leaf crate that the other crates in the workspace depend on.
// It defines the chain-wide exact decimal type, the asset denomination
// format checker, and the shared error types used throughout the system.

pub mod decimal;
pub mod denom;
pub mod error;

// Re-export key items for ergonomic access from downstream crates.
// Usage: `use nacre_core::Decimal;`

pub use decimal::{dec, Decimal};
pub use denom::{validate_denom, MAX_DENOM_LEN, MIN_DENOM_LEN};
pub use error::DenomError;

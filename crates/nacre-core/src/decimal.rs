// crates/nacre-core/src/decimal.rs
//
// The chain-wide exact decimal type.
//
// All economic parameters and on-chain fractions use `rust_decimal::Decimal`,
// a 96-bit exact decimal. Binary floating point is forbidden in consensus
// code: validation runs identically on every node, and an invariant like
// "these ratios sum to exactly 1" only holds under exact decimal arithmetic.

/// Exact decimal number used for all on-chain economic values.
pub use rust_decimal::Decimal;

/// Construct a `Decimal` from an integer mantissa and a decimal scale.
///
/// `dec(m, s)` is `m * 10^-s`, so `dec(5, 1)` is `0.5` and
/// `dec(533334, 6)` is `0.533334`.
///
/// # Example
/// ```
/// use nacre_core::decimal::{dec, Decimal};
/// assert_eq!(dec(5, 1) + dec(5, 1), Decimal::ONE);
/// ```
pub fn dec(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_constructor() {
        assert_eq!(dec(5, 1).to_string(), "0.5");
        assert_eq!(dec(-5, 1).to_string(), "-0.5");
        assert_eq!(dec(300_000_000, 0).to_string(), "300000000");
        assert_eq!(dec(1, 0), Decimal::ONE);
        assert_eq!(dec(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_addition_is_exact() {
        // The classic float failure case: 0.1 + 0.2 == 0.3 exactly.
        assert_eq!(dec(1, 1) + dec(2, 1), dec(3, 1));
    }

    #[test]
    fn test_micro_unit_sum_is_exact() {
        // Three six-decimal ratios that partition unity must sum to
        // exactly 1, not approximately 1.
        let sum = dec(533_334, 6) + dec(333_333, 6) + dec(133_333, 6);
        assert_eq!(sum, Decimal::ONE);

        // And a one-micro-unit shortfall must be distinguishable from 1.
        let short = dec(533_333, 6) + dec(333_333, 6) + dec(133_333, 6);
        assert_ne!(short, Decimal::ONE);
        assert_eq!(short, dec(999_999, 6));
    }

    #[test]
    fn test_comparison_and_negation() {
        assert!(dec(5, 1) < Decimal::ONE);
        assert!(dec(5, 0) > Decimal::ONE);
        assert!(-Decimal::ONE < Decimal::ZERO);
        assert_eq!(-dec(5, 1), dec(-5, 1));
    }
}

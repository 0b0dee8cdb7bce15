// crates/nacre-inflation/src/exponential.rs
//
// Coefficients of the exponential decay emission formula.
//
// Per-period emission follows
//
//     inflation(x) = (a * (1 - r)^x) + c
//
// where x is the period number, scaled by a bonding-ratio adjustment driven
// by the exponent b (evaluated by the keeper, not here). The legality rules
// keep the schedule monotonic and non-negative:
//   - a >= 0: initial emission magnitude
//   - 0 <= r <= 1: decay rate (r = 0 never decays, r = 1 decays fully)
//   - c >= 0: long-run floor emission
//   - b >= 0: bonding-ratio exponent
// No upper bound applies to a, c, or b.

use nacre_core::{dec, Decimal};
use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// The four coefficients of the decay formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExponentialCalculation {
    /// Initial emission magnitude, in whole tokens per period.
    #[serde(rename = "A")]
    pub a: Decimal,
    /// Per-period decay rate, a fraction in [0, 1].
    #[serde(rename = "R")]
    pub r: Decimal,
    /// Long-run floor emission, in whole tokens per period.
    #[serde(rename = "C")]
    pub c: Decimal,
    /// Bonding-ratio exponent consumed by the keeper calculation.
    #[serde(rename = "B")]
    pub b: Decimal,
}

impl ExponentialCalculation {
    /// Assemble a coefficient set without validating it.
    pub fn new(a: Decimal, r: Decimal, c: Decimal, b: Decimal) -> Self {
        Self { a, r, c, b }
    }

    /// Check the coefficient domain rules.
    ///
    /// Coefficients are checked in order A, R, C, B and the first violation
    /// wins, so error messages are deterministic across nodes.
    ///
    /// # Errors
    /// Returns [`ParamError::NegativeCoefficient`] for a negative A, C, or B,
    /// and [`ParamError::RangeViolation`] when R falls outside [0, 1].
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.a < Decimal::ZERO {
            return Err(ParamError::NegativeCoefficient {
                name: "A",
                value: self.a,
            });
        }
        if self.r < Decimal::ZERO || self.r > Decimal::ONE {
            return Err(ParamError::RangeViolation {
                name: "R",
                value: self.r,
            });
        }
        if self.c < Decimal::ZERO {
            return Err(ParamError::NegativeCoefficient {
                name: "C",
                value: self.c,
            });
        }
        if self.b < Decimal::ZERO {
            return Err(ParamError::NegativeCoefficient {
                name: "B",
                value: self.b,
            });
        }
        Ok(())
    }
}

impl Default for ExponentialCalculation {
    /// The production decay schedule: 300M initial emission halving each
    /// period (r = 0.5) toward a 9.375M floor, with a unit bonding exponent.
    fn default() -> Self {
        Self {
            a: dec(300_000_000, 0),
            r: dec(5, 1),
            c: dec(9_375_000, 0),
            b: Decimal::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ExponentialCalculation::default().validate().is_ok());
    }

    #[test]
    fn test_boundary_decay_rates_are_valid() {
        let mut exp = ExponentialCalculation::default();
        exp.r = Decimal::ZERO;
        assert!(exp.validate().is_ok());
        exp.r = Decimal::ONE;
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn test_negative_a() {
        let mut exp = ExponentialCalculation::default();
        exp.a = dec(-1, 0);
        assert_eq!(
            exp.validate(),
            Err(ParamError::NegativeCoefficient {
                name: "A",
                value: dec(-1, 0),
            })
        );
    }

    #[test]
    fn test_negative_r() {
        let mut exp = ExponentialCalculation::default();
        exp.r = dec(-5, 1);
        assert_eq!(
            exp.validate(),
            Err(ParamError::RangeViolation {
                name: "R",
                value: dec(-5, 1),
            })
        );
    }

    #[test]
    fn test_r_above_one_any_bonding_exponent() {
        // r = 5 is out of range no matter what b is; the bonding exponent
        // has no upper bound and must not mask the r check.
        for b in [Decimal::ONE, dec(2, 0)] {
            let exp = ExponentialCalculation {
                a: dec(300_000_000, 0),
                r: dec(5, 0),
                c: dec(9_375_000, 0),
                b,
            };
            assert_eq!(
                exp.validate(),
                Err(ParamError::RangeViolation {
                    name: "R",
                    value: dec(5, 0),
                })
            );
        }
    }

    #[test]
    fn test_negative_c() {
        let mut exp = ExponentialCalculation::default();
        exp.c = dec(-9_375_000, 0);
        assert_eq!(
            exp.validate(),
            Err(ParamError::NegativeCoefficient {
                name: "C",
                value: dec(-9_375_000, 0),
            })
        );
    }

    #[test]
    fn test_negative_b() {
        let mut exp = ExponentialCalculation::default();
        exp.b = -Decimal::ONE;
        assert_eq!(
            exp.validate(),
            Err(ParamError::NegativeCoefficient {
                name: "B",
                value: -Decimal::ONE,
            })
        );
    }

    #[test]
    fn test_large_coefficients_are_unbounded() {
        let exp = ExponentialCalculation {
            a: dec(i64::MAX, 0),
            r: Decimal::ONE,
            c: dec(i64::MAX, 0),
            b: dec(100, 0),
        };
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        // Both a and r are invalid; a is reported because it is checked first.
        let exp = ExponentialCalculation {
            a: dec(-1, 0),
            r: dec(5, 0),
            c: dec(-1, 0),
            b: -Decimal::ONE,
        };
        assert!(matches!(
            exp.validate(),
            Err(ParamError::NegativeCoefficient { name: "A", .. })
        ));
    }
}

use crate::Rational;
use num::{BigInt, One};

/// Conversion failures for floating point values with no finite value
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FloatProblem {
    NotANumber,
    Infinity,
}

use std::fmt;

impl fmt::Display for FloatProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for FloatProblem {}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_bigint(n)
    }
}

fn signed(n: Rational, neg: bool) -> Rational {
    if neg {
        -n
    } else {
        n
    }
}

impl TryFrom<f64> for Rational {
    type Error = FloatProblem;

    /// The exact value of the float, which is rarely the decimal fraction
    /// it was written as in the program text
    fn try_from(n: f64) -> Result<Rational, Self::Error> {
        const NEG_BITS: u64 = 0x8000_0000_0000_0000;
        const EXP_BITS: u64 = 0x7ff0_0000_0000_0000;
        const SIG_BITS: u64 = 0x000f_ffff_ffff_ffff;
        debug_assert_eq!(NEG_BITS + EXP_BITS + SIG_BITS, u64::MAX);

        let bits = n.to_bits();
        let neg = (bits & NEG_BITS) == NEG_BITS;
        let exp = (bits & EXP_BITS) >> EXP_BITS.trailing_zeros();
        let sig = bits & SIG_BITS;
        match exp {
            0 if sig == 0 => Ok(Rational::zero()),
            // Subnormal, no implicit leading bit
            0 => {
                let numerator = BigInt::from(sig);
                let denominator = BigInt::one() << 1074;
                let fraction = Rational::from_bigint_fraction(numerator, denominator).unwrap();
                Ok(signed(fraction, neg))
            }
            1..=1075 => {
                let numerator = BigInt::from(SIG_BITS + 1 + sig);
                let denominator = BigInt::one() << (1075 - exp);
                let fraction = Rational::from_bigint_fraction(numerator, denominator).unwrap();
                Ok(signed(fraction, neg))
            }
            1076..=2046 => {
                let mut numerator = BigInt::from(SIG_BITS + 1 + sig);
                numerator <<= exp - 1075;
                Ok(signed(Rational::from_bigint(numerator), neg))
            }
            _ if sig == 0 => Err(FloatProblem::Infinity),
            _ => Err(FloatProblem::NotANumber),
        }
    }
}

//! Floating point logarithm estimates for arbitrary precision integers
//!
//! These estimates exist to budget loop counts. They are never allowed to
//! decide correctness; anything that matters is re-checked exactly.

use num::{BigUint, ToPrimitive};

const LN_2: f64 = std::f64::consts::LN_2;

/// The natural logarithm of n as a double precision estimate
///
/// Integers too wide for the floating point exponent range are shifted
/// down to 1022 bits first and the discarded bits come back as a multiple
/// of ln 2, so the estimate stays stable for integers of any size. The
/// logarithm of zero is negative infinity.
///
/// # Example
///
/// ```
/// use henselian::natural_log;
/// use num::BigUint;
/// let huge = BigUint::from(1u32) << 4096;
/// let estimate = natural_log(&huge);
/// assert!((estimate - 4096.0 * std::f64::consts::LN_2).abs() < 1e-6);
/// ```
pub fn natural_log(n: &BigUint) -> f64 {
    let excess = n.bits() as i64 - 1022;
    if excess > 0 {
        let scaled = n >> excess as u64;
        let log = scaled.to_f64().expect("shifted value fits in a double").ln();
        log + excess as f64 * LN_2
    } else {
        n.to_f64().expect("narrow value fits in a double").ln()
    }
}

/// The base 2 logarithm of n
pub fn log2(n: &BigUint) -> f64 {
    natural_log(n) / LN_2
}

/// The base 3 logarithm of n
pub fn log3(n: &BigUint) -> f64 {
    natural_log(n) / 3.0_f64.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow() {
        assert_eq!(natural_log(&BigUint::from(1u32)), 0.0);
        let e_ish = natural_log(&BigUint::from(20u32)) - natural_log(&BigUint::from(10u32));
        assert!((e_ish - LN_2).abs() < 1e-12);
    }

    #[test]
    fn wide() {
        // 2^5000 is far past the bare f64 range
        let wide = BigUint::from(1u32) << 5000;
        let estimate = natural_log(&wide);
        assert!((estimate - 5000.0 * LN_2).abs() < 1e-6);
    }

    #[test]
    fn bases() {
        let eight = BigUint::from(8u32);
        assert!((log2(&eight) - 3.0).abs() < 1e-12);
        let large = BigUint::from(3u32).pow(100);
        assert!((log3(&large) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_is_negative_infinity() {
        assert_eq!(natural_log(&BigUint::ZERO), f64::NEG_INFINITY);
    }
}

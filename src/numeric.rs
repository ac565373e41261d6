//! Elementary number theory helpers
//!
//! Nothing here is clever; these are the small utilities the interesting
//! algorithms lean on.

use num::{BigUint, Integer, One};

/// a raised to an arbitrary precision exponent by repeated squaring
///
/// # Example
///
/// ```
/// use henselian::pow;
/// use num::BigUint;
/// let answer = pow(&BigUint::from(3u32), &BigUint::from(10u32));
/// assert_eq!(answer, BigUint::from(59049u32));
/// ```
pub fn pow(base: &BigUint, exponent: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    for bit in (0..exponent.bits()).rev() {
        result = &result * &result;
        if exponent.bit(bit) {
            result *= base;
        }
    }
    result
}

/// n!, the factorial of n
pub fn factorial(n: u32) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

/// C(n, k), the binomial coefficient, zero when k exceeds n
pub fn binomial(n: u32, k: u32) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// φ(n), Euler's totient, counted by trial gcd
pub fn totient(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    let mut count = 1;
    for i in 2..n {
        if n.gcd(&i) == 1 {
            count += 1;
        }
    }
    count
}

/// The multiplicative order of a modulo n
///
/// Brute force, multiplying until the power comes back around to one.
/// None when a is not a unit modulo n, or n is below two, since no power
/// would ever get there.
///
/// # Example
///
/// ```
/// use henselian::multiplicative_order;
/// use num::BigUint;
/// assert_eq!(multiplicative_order(&BigUint::from(2u32), 7), Some(3));
/// assert_eq!(multiplicative_order(&BigUint::from(2u32), 8), None);
/// ```
pub fn multiplicative_order(a: &BigUint, n: u32) -> Option<u32> {
    if n < 2 {
        return None;
    }
    let modulus = BigUint::from(n);
    let base = a % &modulus;
    if base.gcd(&modulus) != BigUint::one() {
        return None;
    }
    let mut power = base.clone();
    let mut order = 1;
    while !power.is_one() {
        power = power * &base % &modulus;
        order += 1;
    }
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers() {
        let two = BigUint::from(2u32);
        assert_eq!(pow(&two, &BigUint::from(100u32)), BigUint::one() << 100);
        assert_eq!(pow(&two, &BigUint::ZERO), BigUint::one());
        assert_eq!(pow(&BigUint::ZERO, &BigUint::from(5u32)), BigUint::ZERO);
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), BigUint::one());
        assert_eq!(factorial(1), BigUint::one());
        assert_eq!(factorial(10), BigUint::from(3628800u32));
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(10, 3), BigUint::from(120u32));
        assert_eq!(binomial(5, 0), BigUint::one());
        assert_eq!(binomial(5, 5), BigUint::one());
        assert_eq!(binomial(3, 5), BigUint::ZERO);
        assert_eq!(binomial(52, 5), BigUint::from(2598960u32));
    }

    #[test]
    fn totients() {
        assert_eq!(totient(0), 0);
        assert_eq!(totient(1), 1);
        assert_eq!(totient(9), 6);
        assert_eq!(totient(12), 4);
        assert_eq!(totient(13), 12);
    }

    #[test]
    fn orders() {
        let order = |a: u32, n| multiplicative_order(&BigUint::from(a), n);
        assert_eq!(order(2, 7), Some(3));
        assert_eq!(order(3, 7), Some(6));
        assert_eq!(order(1, 5), Some(1));
        assert_eq!(order(10, 17), Some(16));
        // Not units
        assert_eq!(order(2, 8), None);
        assert_eq!(order(0, 5), None);
        assert_eq!(order(3, 1), None);
    }
}

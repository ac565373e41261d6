//! Exact integer roots by Hensel lifting
//!
//! Square roots lift in base 3 and odd nth roots lift in base 2. Starting
//! from a one digit approximation, each round squares the modulus, doubling
//! the number of correct digits the way Newton's method doubles correct
//! bits over the reals. A floating point logarithm only budgets the number
//! of rounds; every candidate root is verified with exact arbitrary
//! precision equality before it is returned, so an estimate can at worst
//! turn into an absent result, never a wrong one.

use crate::logarithm::{log2, log3};
use num::traits::Pow;
use num::{BigInt, BigUint, Integer, One, Zero};

mod unsigned {
    use num::BigUint;
    use std::sync::LazyLock;

    pub(super) static TWO: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(2u32));
    pub(super) static THREE: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(3u32));
    pub(super) static SIX: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(6u32));
    pub(super) static NINE: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(9u32));
}

mod signed {
    use num::BigInt;
    use std::sync::LazyLock;

    pub(super) static TWO: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(2));
    pub(super) static THREE: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(3));
    pub(super) static FOUR: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(4));
    pub(super) static NINE: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(9));
}

// Doubling rounds needed to grow one correct digit into k of them
fn rounds(k: u64) -> u32 {
    if k <= 1 {
        0
    } else {
        (k as f64).log2().ceil() as u32
    }
}

/// The exact integer square root of a, if a has one
///
/// A perfect square is 0, 1, 4 or 7 modulo 9, which rejects most inputs
/// before any lifting runs. Factors of nine are stripped from a first,
/// each putting one factor of three back onto the verified root.
///
/// # Examples
///
/// ```
/// use henselian::square_root;
/// use num::BigUint;
/// assert_eq!(square_root(&BigUint::from(1089u32)), Some(BigUint::from(33u32)));
/// assert_eq!(square_root(&BigUint::from(8u32)), None);
/// ```
pub fn square_root(a: &BigUint) -> Option<BigUint> {
    if a.is_zero() {
        return Some(BigUint::ZERO);
    }
    if a % &*unsigned::THREE == *unsigned::TWO {
        return None;
    }

    // Every factor of nine in a is a factor of three in its square root
    let mut rest = a.clone();
    let mut scale = BigUint::one();
    let remainder = loop {
        let (quotient, remainder) = rest.div_rem(&unsigned::NINE);
        if !remainder.is_zero() {
            break remainder;
        }
        rest = quotient;
        scale *= &*unsigned::THREE;
    };
    // A single leftover factor of three cannot belong to a square
    if remainder == *unsigned::THREE || remainder == *unsigned::SIX {
        return None;
    }
    if rest.is_one() {
        return Some(scale);
    }

    let root = lift_square_root(&rest)?;
    Some(root * scale)
}

// 3-adic Newton iteration for a of at least two, coprime to three or
// filtered out by verification. The auxiliary s tracks an approximate
// inverse of 2g so the correction needs no modular division.
fn lift_square_root(a: &BigUint) -> Option<BigUint> {
    let k = (log3(a) / 2.0).ceil() as u64;
    let r = rounds(k);
    let a = BigInt::from(a.clone());
    let mut g = BigInt::one();
    let mut s = signed::TWO.clone();
    let mut m = signed::NINE.clone();
    for _ in 1..r {
        g = (&g - (&g * &g - &a) * &s).mod_floor(&m);
        s = ((&s - &g * (&s * &s)) << 1u32).mod_floor(&m);
        m = &m * &m;
    }
    // One last correction at exactly the target precision. The lift can
    // converge on either square root modulo 3^k, so try both.
    let target = Pow::pow(&*signed::THREE, k);
    g = (&g - (&g * &g - &a) * &s).mod_floor(&target);
    if &g * &g == a {
        return Some(g.magnitude().clone());
    }
    let negated = target - g;
    if &negated * &negated == a {
        return Some(negated.magnitude().clone());
    }
    None
}

/// The exact nth root of a for odd n of at least three, if a has one
///
/// Any other n reports no root. Factors of two are stripped from a first,
/// since the 2-adic iteration needs an odd value to work on; they come
/// back on the root when their count is a multiple of n.
///
/// # Examples
///
/// ```
/// use henselian::nth_root_odd;
/// use num::BigUint;
/// assert_eq!(nth_root_odd(&BigUint::from(343u32), 3), Some(BigUint::from(7u32)));
/// assert_eq!(nth_root_odd(&BigUint::from(9u32), 3), None);
/// ```
pub fn nth_root_odd(a: &BigUint, n: u32) -> Option<BigUint> {
    if n < 3 || n % 2 == 0 {
        return None;
    }
    if a.is_zero() || a.is_one() {
        return Some(a.clone());
    }
    let twos = a.trailing_zeros().unwrap_or(0);
    if twos % u64::from(n) != 0 {
        return None;
    }
    let odd = a >> twos;
    let root = if odd.is_one() {
        BigUint::one()
    } else {
        lift_nth_root(&odd, n)?
    };
    Some(root << (twos / u64::from(n)))
}

// 2-adic Newton iteration for odd a of at least three. Both a and the
// derivative n*g^(n-1) are odd, hence units in the working ring. The
// auxiliary s approximates the inverse of the derivative and t carries
// g^(n-1) between the two updates.
fn lift_nth_root(a: &BigUint, n: u32) -> Option<BigUint> {
    let k = (log2(a) / f64::from(n)).ceil() as u64;
    let r = rounds(k);
    if r == 0 {
        // The root would have a single bit, impossible for a of three or more
        return None;
    }
    let a = BigInt::from(a.clone());
    let exponent = BigInt::from(n - 1);
    let big_n = BigInt::from(n);
    let mut g = BigInt::one();
    let mut s = BigInt::one();
    let mut t = BigInt::one();
    let mut m = signed::FOUR.clone();
    for _ in 1..r {
        g = (&g - (&g * &t - &a) * &s).mod_floor(&m);
        let m_square = &m * &m;
        t = g.modpow(&exponent, &m_square);
        s = ((&s << 1u32) - &big_n * &t * (&s * &s)).mod_floor(&m);
        m = m_square;
    }
    let target = BigInt::one() << k;
    g = (&g - (&g * &t - &a) * &s).mod_floor(&target);
    if Pow::pow(&g, n) == a {
        Some(g.magnitude().clone())
    } else {
        None
    }
}

/// The witnessing base and exponent for a perfect power
///
/// The square root is tried first, then every odd exponent up to the base
/// 2 logarithm of a in increasing order. The first hit wins, which is not
/// always the smallest exponent mathematically possible. Zero and one
/// report as their own squares.
///
/// # Example
///
/// ```
/// use henselian::perfect_power;
/// use num::BigUint;
/// let (base, exponent) = perfect_power(&BigUint::from(243u32)).unwrap();
/// assert_eq!((base, exponent), (BigUint::from(3u32), 5));
/// ```
pub fn perfect_power(a: &BigUint) -> Option<(BigUint, u32)> {
    if a.is_zero() || a.is_one() {
        return Some((a.clone(), 2));
    }
    if let Some(root) = square_root(a) {
        return Some((root, 2));
    }
    // floor(log2 a) exactly, so a power of two never falls just outside
    // the loop through rounding
    let highest = a.bits() - 1;
    let mut exponent = 3;
    while u64::from(exponent) <= highest {
        if let Some(root) = nth_root_odd(a, exponent) {
            return Some((root, exponent));
        }
        exponent += 2;
    }
    None
}

/// Whether a is gⁿ for some integer g and exponent n of at least two
///
/// # Examples
///
/// ```
/// use henselian::is_perfect_power;
/// use num::BigUint;
/// assert!(is_perfect_power(&BigUint::from(8u32)));
/// assert!(is_perfect_power(&BigUint::from(9u32)));
/// assert!(!is_perfect_power(&BigUint::from(15u32)));
/// ```
pub fn is_perfect_power(a: &BigUint) -> bool {
    perfect_power(a).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u128) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn squares_of_counting_numbers() {
        for g in 0..200u128 {
            assert_eq!(square_root(&big(g * g)), Some(big(g)), "{g}");
        }
    }

    #[test]
    fn rejects_two_mod_three() {
        for a in [2u128, 5, 8, 11, 14, 998] {
            assert_eq!(square_root(&big(a)), None, "{a}");
        }
    }

    #[test]
    fn rejects_non_squares() {
        for a in [3u128, 6, 7, 10, 12, 18, 45, 63, 1000, 9999] {
            assert_eq!(square_root(&big(a)), None, "{a}");
        }
    }

    #[test]
    fn square_roots_divisible_by_three() {
        // Roots with many factors of three exercise the stripping path
        assert_eq!(square_root(&big(9)), Some(big(3)));
        assert_eq!(square_root(&big(81)), Some(big(9)));
        assert_eq!(square_root(&big(324)), Some(big(18)));
        assert_eq!(square_root(&big(11025)), Some(big(105)));
        assert_eq!(square_root(&big(531441)), Some(big(729)));
    }

    #[test]
    fn square_root_large() {
        let g = big(987654321987654321);
        assert_eq!(square_root(&(&g * &g)), Some(g));
        let g = BigUint::from(10u32).pow(25u32) + 3u32;
        assert_eq!(square_root(&(&g * &g)), Some(g));
    }

    #[test]
    fn cubes_of_counting_numbers() {
        for g in 0..60u128 {
            assert_eq!(nth_root_odd(&big(g * g * g), 3), Some(big(g)), "{g}");
        }
    }

    #[test]
    fn higher_odd_roots() {
        for g in [3u32, 5, 7, 9, 11, 21] {
            for n in [5u32, 7] {
                let a = BigUint::from(g).pow(n);
                assert_eq!(nth_root_odd(&a, n), Some(BigUint::from(g)), "{g}^{n}");
            }
        }
    }

    #[test]
    fn odd_root_rejects() {
        assert_eq!(nth_root_odd(&big(9), 3), None);
        assert_eq!(nth_root_odd(&big(100), 3), None);
        assert_eq!(nth_root_odd(&big(31), 5), None);
        // Exponents outside odd n >= 3 never have an answer here
        assert_eq!(nth_root_odd(&big(64), 2), None);
        assert_eq!(nth_root_odd(&big(64), 6), None);
        assert_eq!(nth_root_odd(&big(64), 1), None);
    }

    #[test]
    fn roots_of_even_targets() {
        assert_eq!(nth_root_odd(&big(8), 3), Some(big(2)));
        assert_eq!(nth_root_odd(&big(1 << 30), 3), Some(big(1 << 10)));
        assert_eq!(nth_root_odd(&big(1 << 30), 5), Some(big(1 << 6)));
        assert_eq!(nth_root_odd(&big(1 << 30), 15), Some(big(4)));
        // 2^10 is not a cube, its valuation does not divide by three
        assert_eq!(nth_root_odd(&big(1 << 10), 3), None);
        assert_eq!(nth_root_odd(&big(216), 3), Some(big(6)));
        assert_eq!(nth_root_odd(&big(97336), 3), Some(big(46)));
    }

    #[test]
    fn nth_root_large() {
        let g = big(1_000_000_000_000_000_009);
        let a = (&g * &g) * &g;
        assert_eq!(nth_root_odd(&a, 3), Some(g));
        let g = big(12345678901234567);
        let a = (&g).pow(7u32);
        assert_eq!(nth_root_odd(&a, 7), Some(g));
    }

    #[test]
    fn perfect_power_verdicts() {
        let yes = [0u128, 1, 4, 8, 9, 16, 25, 27, 32, 36, 64, 100, 125, 128, 243, 1024, 6561];
        for a in yes {
            assert!(is_perfect_power(&big(a)), "{a}");
        }
        let no = [2u128, 3, 5, 6, 7, 10, 12, 15, 17, 24, 63, 101, 999];
        for a in no {
            assert!(!is_perfect_power(&big(a)), "{a}");
        }
    }

    #[test]
    fn perfect_power_witnesses() {
        assert_eq!(perfect_power(&big(512)), Some((big(8), 3)));
        assert_eq!(perfect_power(&big(6561)), Some((big(81), 2)));
        assert_eq!(perfect_power(&big(243)), Some((big(3), 5)));
        assert_eq!(perfect_power(&big(1)), Some((big(1), 2)));
        assert_eq!(perfect_power(&big(0)), Some((big(0), 2)));
        assert_eq!(perfect_power(&big(7)), None);
    }
}

//! Property tests for the rational and root arithmetic

use proptest::prelude::*;

use crate::{is_perfect_power, nth_root_odd, square_root, Rational};
use num::{BigInt, BigUint, Integer};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

proptest! {
    #[test]
    fn construction_fully_reduces(n in small_int(), d in non_zero_int()) {
        let r = Rational::fraction(n, d).unwrap();
        let numerator = r.numerator().magnitude().clone();
        if numerator == BigUint::ZERO {
            prop_assert_eq!(r, Rational::zero());
        } else {
            prop_assert_eq!(numerator.gcd(r.denominator()), BigUint::from(1u32));
        }
    }

    #[test]
    fn reduction_is_idempotent(n in small_int(), d in non_zero_int()) {
        let r = Rational::fraction(n, d).unwrap();
        let again =
            Rational::from_bigint_fraction(r.numerator(), BigInt::from(r.denominator().clone()))
                .unwrap();
        prop_assert_eq!(r, again);
    }

    #[test]
    fn additive_identity(n in small_int(), d in non_zero_int()) {
        let r = Rational::fraction(n, d).unwrap();
        prop_assert_eq!(r.clone() + Rational::zero(), r.clone());
        prop_assert_eq!(Rational::zero() + r.clone(), r);
    }

    #[test]
    fn multiplicative_identity(n in small_int(), d in non_zero_int()) {
        let r = Rational::fraction(n, d).unwrap();
        prop_assert_eq!(r.clone() * Rational::one(), r);
    }

    #[test]
    fn addition_commutes(na in small_int(), da in non_zero_int(),
                         nb in small_int(), db in non_zero_int()) {
        let a = Rational::fraction(na, da).unwrap();
        let b = Rational::fraction(nb, db).unwrap();
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn multiplication_commutes(na in small_int(), da in non_zero_int(),
                               nb in small_int(), db in non_zero_int()) {
        let a = Rational::fraction(na, da).unwrap();
        let b = Rational::fraction(nb, db).unwrap();
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn text_round_trips(n in small_int(), d in non_zero_int()) {
        let r = Rational::fraction(n, d).unwrap();
        let text = r.to_string();
        prop_assert_eq!(text.parse::<Rational>(), Ok(r));
    }

    #[test]
    fn compare_is_antisymmetric(na in small_int(), da in non_zero_int(),
                                nb in small_int(), db in non_zero_int()) {
        let a = Rational::fraction(na, da).unwrap();
        let b = Rational::fraction(nb, db).unwrap();
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn compare_is_transitive(na in small_int(), da in non_zero_int(),
                             nb in small_int(), db in non_zero_int(),
                             nc in small_int(), dc in non_zero_int()) {
        let a = Rational::fraction(na, da).unwrap();
        let b = Rational::fraction(nb, db).unwrap();
        let c = Rational::fraction(nc, dc).unwrap();
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn square_roots_round_trip(g in 0u64..100_000u64) {
        let g = BigUint::from(g);
        prop_assert_eq!(square_root(&(&g * &g)), Some(g));
    }

    #[test]
    fn cube_roots_round_trip(g in 0u64..10_000u64) {
        let g = BigUint::from(g);
        let a = &g * &g * &g;
        prop_assert_eq!(nth_root_odd(&a, 3), Some(g));
    }

    #[test]
    fn two_mod_three_is_never_a_square(i in 0u64..100_000u64) {
        let a = BigUint::from(3 * i + 2);
        prop_assert_eq!(square_root(&a), None);
    }

    #[test]
    fn powers_are_perfect_powers(g in 2u64..1000u64, n in 2u32..6u32) {
        let a = BigUint::from(g).pow(n);
        prop_assert!(is_perfect_power(&a));
    }
}

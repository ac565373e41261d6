use crate::Problem;
use num::bigint::Sign::{self, *};
use num::{BigInt, BigUint};
use num::{One, Zero};
use std::sync::LazyLock;

pub(crate) mod convert;

/// Ratio of two integers in canonical form
///
/// This type is functionally a [`Sign`] with a ratio between two [`BigUint`]
/// (the numerator and denominator). Every value is canonical: the
/// denominator is strictly positive, the numerator and denominator are
/// coprime, and zero is always exactly 0/1. Because of that, equality is
/// plain structural equality and two numerically equal values can never
/// look different.
///
/// # Examples
///
/// Parsing a rational from a simple fraction
/// ```
/// use henselian::Rational;
/// let half: Rational = "9/18".parse().unwrap();
/// assert_eq!(half, Rational::fraction(1, 2).unwrap());
/// ```
///
/// Parsing a decimal fraction
/// ```
/// use henselian::Rational;
/// let quarter: Rational = "0.25".parse().unwrap();
/// assert_eq!(quarter.to_string(), "1/4");
/// ```
///
/// Simple arithmetic
/// ```
/// use henselian::Rational;
/// let quarter = Rational::fraction(1, 4).unwrap();
/// let eighteen = Rational::new(18);
/// let two = Rational::one() + Rational::one();
/// let sixteen = eighteen - two;
/// let four = quarter * sixteen;
/// assert_eq!(four, Rational::new(4));
/// ```

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rational {
    sign: Sign,
    numerator: BigUint,
    denominator: BigUint,
}

static ONE: LazyLock<BigUint> = LazyLock::new(BigUint::one);
static TEN: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(10u32));

impl Rational {
    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self {
            sign: NoSign,
            numerator: BigUint::ZERO,
            denominator: BigUint::one(),
        }
    }

    /// One, the multiplicative identity
    pub fn one() -> Self {
        Self {
            sign: Plus,
            numerator: BigUint::one(),
            denominator: BigUint::one(),
        }
    }

    /// The Rational corresponding to the provided [`i64`]
    pub fn new(n: i64) -> Self {
        Self::from_bigint(BigInt::from(n))
    }

    /// The Rational corresponding to the provided [`BigInt`]
    pub fn from_bigint(n: BigInt) -> Self {
        let (sign, numerator) = n.into_parts();
        Self {
            sign,
            numerator,
            denominator: BigUint::one(),
        }
    }

    /// The Rational corresponding to the provided [`i64`] numerator and
    /// denominator as a fraction
    pub fn fraction(n: i64, d: i64) -> Result<Self, Problem> {
        Self::from_bigint_fraction(BigInt::from(n), BigInt::from(d))
    }

    /// The canonical Rational for the provided numerator and denominator
    ///
    /// The sign moves onto the numerator side and the fraction reduces to
    /// lowest terms. A zero denominator is a [`Problem::DivisionByZero`].
    ///
    /// # Example
    ///
    /// ```
    /// use henselian::Rational;
    /// use num::BigInt;
    /// let r = Rational::from_bigint_fraction(BigInt::from(6), BigInt::from(-4)).unwrap();
    /// assert_eq!(r, Rational::fraction(-3, 2).unwrap());
    /// ```
    pub fn from_bigint_fraction(n: BigInt, d: BigInt) -> Result<Self, Problem> {
        if d.is_zero() {
            return Err(Problem::DivisionByZero);
        }
        let (n_sign, numerator) = n.into_parts();
        let (d_sign, denominator) = d.into_parts();
        let answer = Self {
            sign: n_sign * d_sign,
            numerator,
            denominator,
        };
        Ok(answer.reduce())
    }

    fn reduce(self) -> Self {
        if self.numerator.is_zero() {
            return Self::zero();
        }
        if self.numerator == self.denominator {
            return Self {
                sign: self.sign,
                numerator: BigUint::one(),
                denominator: BigUint::one(),
            };
        }
        // A numerator of 1 or a denominator of 1 cannot reduce further
        if self.numerator == *ONE || self.denominator == *ONE {
            return self;
        }

        let divisor = num::Integer::gcd(&self.numerator, &self.denominator);
        if divisor == *ONE {
            self
        } else {
            let numerator = self.numerator / &divisor;
            let denominator = self.denominator / &divisor;
            Self {
                sign: self.sign,
                numerator,
                denominator,
            }
        }
    }

    /// The numerator, with the sign attached
    pub fn numerator(&self) -> BigInt {
        BigInt::from_biguint(self.sign, self.numerator.clone())
    }

    /// The denominator, always strictly positive
    pub fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// The [`Sign`] of this value
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Checks if the value is an integer
    pub fn is_integer(&self) -> bool {
        self.denominator == *ONE
    }

    /// The absolute value
    pub fn abs(self) -> Self {
        Self {
            sign: if self.sign == Minus { Plus } else { self.sign },
            ..self
        }
    }

    /// The multiplicative inverse of this Rational
    ///
    /// # Example
    ///
    /// ```
    /// use henselian::Rational;
    /// let five = Rational::new(5);
    /// let a_fifth = Rational::fraction(1, 5).unwrap();
    /// assert_eq!(five.reciprocal(), Ok(a_fifth));
    /// assert!(Rational::zero().reciprocal().is_err());
    /// ```
    pub fn reciprocal(self) -> Result<Self, Problem> {
        if self.sign == NoSign {
            return Err(Problem::DivisionByZero);
        }
        Ok(Self {
            sign: self.sign,
            numerator: self.denominator,
            denominator: self.numerator,
        })
    }

    /// Integer exponentiation
    ///
    /// The numerator and denominator are raised independently, which cannot
    /// introduce a common factor into a reduced fraction, so no further
    /// reduction happens. A negative exponent inverts the result and so
    /// zero raised to a negative power is a [`Problem::DivisionByZero`].
    ///
    /// # Example
    ///
    /// ```
    /// use henselian::Rational;
    /// let two_thirds = Rational::fraction(2, 3).unwrap();
    /// assert_eq!(two_thirds.powi(3), Ok(Rational::fraction(8, 27).unwrap()));
    /// assert_eq!(Rational::new(5).powi(-2), Ok(Rational::fraction(1, 25).unwrap()));
    /// ```
    pub fn powi(self, exp: i32) -> Result<Self, Problem> {
        if exp == 0 {
            return Ok(Self::one());
        }
        let up = exp.unsigned_abs();
        let sign = match self.sign {
            Minus if up % 2 == 0 => Plus,
            other => other,
        };
        let raised = Self {
            sign,
            numerator: self.numerator.pow(up),
            denominator: self.denominator.pow(up),
        };
        if exp < 0 {
            raised.reciprocal()
        } else {
            Ok(raised)
        }
    }

    fn parse_decimal(s: &str) -> Result<Self, Problem> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Minus, rest),
            None => (Plus, s),
        };
        let (unscaled, scale) = match digits.split_once('.') {
            Some((whole, fraction)) => (format!("{whole}{fraction}"), fraction.len()),
            None => (digits.to_string(), 0),
        };
        if unscaled.is_empty() {
            return Err(Problem::InvalidFormat);
        }
        let numerator =
            BigUint::parse_bytes(unscaled.as_bytes(), 10).ok_or(Problem::InvalidFormat)?;
        let denominator = TEN.pow(scale as u32);
        let sign = if numerator.is_zero() { NoSign } else { sign };
        Ok(Self {
            sign,
            numerator,
            denominator,
        }
        .reduce())
    }
}

use core::fmt;

impl fmt::Display for Rational {
    /// The canonical text: just the numerator for integers, otherwise
    /// numerator/denominator
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == *ONE {
            let int = self.numerator.to_string();
            return f.pad_integral(self.sign != Minus, "", &int);
        }

        if self.sign == Minus {
            f.write_str("-")?;
        } else if f.sign_plus() {
            f.write_str("+")?;
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl std::str::FromStr for Rational {
    type Err = Problem;

    /// Either a decimal literal like `3.25` or a fraction like `22/7`
    fn from_str(s: &str) -> Result<Self, Problem> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [number] => Self::parse_decimal(number),
            [n, d] => {
                let numerator =
                    BigInt::parse_bytes(n.as_bytes(), 10).ok_or(Problem::InvalidFormat)?;
                let denominator =
                    BigInt::parse_bytes(d.as_bytes(), 10).ok_or(Problem::InvalidFormat)?;
                Self::from_bigint_fraction(numerator, denominator)
            }
            _ => Err(Problem::InvalidFormat),
        }
    }
}

use core::ops::*;
use std::cmp::Ordering;

impl Add for Rational {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.sign == NoSign {
            return other;
        }
        if other.sign == NoSign {
            return self;
        }

        // The gcd of the denominators keeps the working numbers as small
        // as the result allows
        let divisor = num::Integer::gcd(&self.denominator, &other.denominator);
        let denominator = &self.denominator * (&other.denominator / &divisor);
        let a = self.numerator * (&other.denominator / &divisor);
        let b = other.numerator * (&self.denominator / &divisor);
        let (sign, numerator) = match (self.sign, other.sign) {
            (Plus, Plus) => (Plus, a + b),
            (Minus, Minus) => (Minus, a + b),
            (x, y) => match a.cmp(&b) {
                Ordering::Greater => (x, a - b),
                Ordering::Equal => {
                    return Self::zero();
                }
                Ordering::Less => (y, b - a),
            },
        };
        Self {
            sign,
            numerator,
            denominator,
        }
        .reduce()
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            sign: -self.sign,
            ..self
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let sign = self.sign * other.sign;
        let numerator = self.numerator * other.numerator;
        let denominator = self.denominator * other.denominator;
        Self {
            sign,
            numerator,
            denominator,
        }
        .reduce()
    }
}

impl Div for Rational {
    type Output = Result<Self, Problem>;

    fn div(self, other: Self) -> Result<Self, Problem> {
        if other.sign == NoSign {
            return Err(Problem::DivisionByZero);
        }
        let sign = self.sign * other.sign;
        let numerator = self.numerator * other.denominator;
        let denominator = self.denominator * other.numerator;
        Ok(Self {
            sign,
            numerator,
            denominator,
        }
        .reduce())
    }
}

impl Ord for Rational {
    /// Opposite signs compare by sign alone, equal signs cross multiply
    /// over the gcd of the denominators, exactly as addition does
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => (),
            unequal => return unequal,
        }
        if self.sign == NoSign {
            return Ordering::Equal;
        }
        let divisor = num::Integer::gcd(&self.denominator, &other.denominator);
        let left = &self.numerator * (&other.denominator / &divisor);
        let right = &other.numerator * (&self.denominator / &divisor);
        if self.sign == Plus {
            left.cmp(&right)
        } else {
            right.cmp(&left)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

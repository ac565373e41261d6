// We need to refer to these types in the documentation
#[allow(unused_imports)]
use crate::Rational;

/// Problems when parsing or attempting arithmetic with [`Rational`] numbers

#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to divide by zero, also arises when making a fraction with a
    /// zero denominator or raising zero to a negative power
    DivisionByZero,
    /// The text was neither a decimal literal nor a numerator/denominator
    /// fraction
    InvalidFormat,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Problem {}

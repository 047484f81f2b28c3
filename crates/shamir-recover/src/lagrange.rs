//! Exact Lagrange interpolation at `x = 0`.
//!
//! The secret is the constant term of the unique degree-`(k-1)` polynomial
//! through the `k` selected points. Each basis term
//! `y_i * prod_{j != i} (0 - x_j) / (x_i - x_j)` is a rational number, and
//! the individual terms are generally not integers even when their sum is.
//! The sum is therefore carried as reduced numerator/denominator pairs and
//! only converted to an integer at the very end; a floating-point rendition
//! of the same formula loses the secret to cancellation as soon as the
//! decoded values outgrow a double's mantissa.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/// An exact rational number, kept in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ratio {
    numerator: BigInt,
    denominator: BigInt,
}

impl Ratio {
    fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    /// Builds `numerator / denominator` in lowest terms. The denominator
    /// must be non-zero.
    fn new(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let gcd = numerator.gcd(&denominator);
        let mut numerator = numerator / &gcd;
        let mut denominator = denominator / &gcd;
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    fn add(&self, other: &Ratio) -> Ratio {
        Ratio::new(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

/// Evaluates, at `x = 0`, the unique polynomial of degree `points.len() - 1`
/// passing through all `points`, i.e. recovers its constant term.
///
/// The result does not depend on the order of `points`. Returns
/// [`Error::DuplicateAbscissa`] if two points share an x-coordinate,
/// [`Error::DegenerateInput`] for an empty point set, and
/// [`Error::NonIntegralSecret`] if the exact sum is not an integer.
pub fn interpolate_at_zero(points: &[(BigInt, BigInt)]) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::DegenerateInput);
    }
    for (position, (x, _)) in points.iter().enumerate() {
        if points[..position].iter().any(|(seen, _)| seen == x) {
            return Err(Error::DuplicateAbscissa(x.clone()));
        }
    }

    let mut sum = Ratio::from_integer(BigInt::zero());
    for (i, (x_i, y_i)) in points.iter().enumerate() {
        // l_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)
        let mut numerator = y_i.clone();
        let mut denominator = BigInt::one();
        for (j, (x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -x_j;
            denominator *= x_i - x_j;
        }
        sum = sum.add(&Ratio::new(numerator, denominator));
    }

    let Ratio {
        numerator,
        denominator,
    } = sum;
    if !denominator.is_one() {
        return Err(Error::NonIntegralSecret {
            numerator,
            denominator,
        });
    }
    Ok(numerator)
}

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::Error;

/// A decoded point (x, f(x)) on the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// The default selection policy: sort ascending by x and keep the first k.
///
/// Any k consistent points reconstruct the same polynomial, so the choice is
/// about reproducibility, not math. Swap in another policy through
/// [`reconstruct_with`] without touching the interpolation core.
pub fn first_by_ascending_x(points: &[Point], k: usize) -> Result<Vec<Point>, Error> {
    if points.len() < k {
        return Err(Error::InsufficientShares {
            available: points.len(),
            required: k,
        });
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x));
    sorted.truncate(k);
    Ok(sorted)
}

/// Reconstruct the secret f(0) from at least k points, selecting the first k
/// by ascending x.
pub fn reconstruct(points: &[Point], k: usize) -> Result<BigInt, Error> {
    reconstruct_with(points, k, first_by_ascending_x)
}

/// Reconstruct the secret with a caller-supplied selection policy.
pub fn reconstruct_with<S>(points: &[Point], k: usize, select: S) -> Result<BigInt, Error>
where
    S: Fn(&[Point], usize) -> Result<Vec<Point>, Error>,
{
    let selected = select(points, k)?;
    if selected.len() < k {
        return Err(Error::InsufficientShares {
            available: selected.len(),
            required: k,
        });
    }
    interpolate_at_zero(&selected)
}

/*
    Lagrange interpolation evaluated at x = 0:

        secret = Σ_i  y_i · Π_{j≠i} (0 − x_j) / (x_i − x_j)

    Every basis factor is an exact rational; floating point here silently
    corrupts large secrets. The sum only collapses to an integer at the very
    end, and a leftover denominator means the supplied points do not lie on
    one polynomial.
*/
fn interpolate_at_zero(points: &[Point]) -> Result<BigInt, Error> {
    let mut secret = BigRational::zero();

    for (i, p_i) in points.iter().enumerate() {
        // k = 1 leaves the basis at the empty product, 1/1
        let mut basis = BigRational::one();
        for (j, p_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let denominator = &p_i.x - &p_j.x;
            if denominator.is_zero() {
                return Err(Error::DuplicateAbscissa { x: p_i.x.clone() });
            }
            basis *= BigRational::new(-&p_j.x, denominator);
        }
        secret += basis * BigRational::from_integer(p_i.y.clone());
    }

    if !secret.is_integer() {
        return Err(Error::NonIntegerResult {
            numerator: secret.numer().clone(),
            denominator: secret.denom().clone(),
        });
    }
    Ok(secret.to_integer())
}

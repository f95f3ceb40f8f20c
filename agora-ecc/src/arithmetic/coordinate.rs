use crate::Error;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// Arithmetic a point coordinate (and a curve coefficient) has to support
/// for the group law to be evaluated over it.
///
/// Operations are fallible because a coordinate type may refuse certain
/// operands, e.g. field elements of different fields or a zero divisor.
pub trait Coordinate: Clone + PartialEq + fmt::Debug + fmt::Display {
    fn add(&self, other: &Self) -> Result<Self, Error>;

    fn sub(&self, other: &Self) -> Result<Self, Error>;

    fn mul(&self, other: &Self) -> Result<Self, Error>;

    fn div(&self, other: &Self) -> Result<Self, Error>;

    /// Computes `k * self` for a small integer constant `k`.
    fn scale(&self, k: u32) -> Self;

    fn is_zero(&self) -> bool;

    fn square(&self) -> Result<Self, Error> {
        self.mul(self)
    }
}

// Plain integers, used for the curve-over-the-integers examples. Division is
// only defined when it is exact.
impl Coordinate for BigInt {
    fn add(&self, other: &Self) -> Result<Self, Error> {
        Ok(self + other)
    }

    fn sub(&self, other: &Self) -> Result<Self, Error> {
        Ok(self - other)
    }

    fn mul(&self, other: &Self) -> Result<Self, Error> {
        Ok(self * other)
    }

    fn div(&self, other: &Self) -> Result<Self, Error> {
        if Zero::is_zero(other) {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = self.div_rem(other);
        if !Zero::is_zero(&remainder) {
            return Err(Error::InexactDivision(self.clone(), other.clone()));
        }
        Ok(quotient)
    }

    fn scale(&self, k: u32) -> Self {
        self * k
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
}

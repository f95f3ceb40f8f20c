use crate::arithmetic::{Coordinate, Point};
use crate::Error;

use std::fmt;

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` with coefficients of the
/// same type as the coordinates of its points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve<T> {
    a: T,
    b: T,
}

impl<T: Coordinate> Curve<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &T {
        &self.a
    }

    pub fn b(&self) -> &T {
        &self.b
    }

    /// Evaluates the curve equation at `(x, y)` in the coordinate type's own
    /// arithmetic.
    pub fn contains(&self, x: &T, y: &T) -> Result<bool, Error> {
        let lhs = y.square()?;
        let rhs = x
            .square()?
            .mul(x)?
            .add(&self.a.mul(x)?)?
            .add(&self.b)?;
        Ok(lhs == rhs)
    }

    pub fn point(&self, x: T, y: T) -> Result<Point<T>, Error> {
        Point::on_curve(self.clone(), x, y)
    }

    pub fn infinity(&self) -> Point<T> {
        Point::identity(self.clone())
    }
}

impl<T: fmt::Display> fmt::Display for Curve<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}*x + {}", self.a, self.b)
    }
}

use super::Coordinate;
use crate::curve::Curve;
use crate::Error;

use tracing::{debug, trace};

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Coordinates<T> {
    Finite { x: T, y: T },
    Infinity,
}

/// Point of a short Weierstrass curve in affine form, or the point at
/// infinity (the group identity).
///
/// A finite point can only be obtained through a membership check, so
/// every `Point` in existence lies on its curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point<T> {
    coordinates: Coordinates<T>,
    curve: Curve<T>,
}

impl<T: Coordinate> Point<T> {
    /// Point `(x, y)` on `y^2 = x^3 + a*x + b`.
    pub fn new(x: T, y: T, a: T, b: T) -> Result<Self, Error> {
        Self::on_curve(Curve::new(a, b), x, y)
    }

    /// Point at infinity of `y^2 = x^3 + a*x + b`.
    pub fn infinity(a: T, b: T) -> Self {
        Self::identity(Curve::new(a, b))
    }

    pub(crate) fn on_curve(curve: Curve<T>, x: T, y: T) -> Result<Self, Error> {
        if !curve.contains(&x, &y)? {
            debug!(%x, %y, %curve, "rejected point off the curve");
            return Err(Error::PointNotOnCurve {
                x: x.to_string(),
                y: y.to_string(),
                curve: curve.to_string(),
            });
        }

        Ok(Self {
            coordinates: Coordinates::Finite { x, y },
            curve,
        })
    }

    pub(crate) fn identity(curve: Curve<T>) -> Self {
        Self {
            coordinates: Coordinates::Infinity,
            curve,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.coordinates == Coordinates::Infinity
    }

    pub fn x(&self) -> Option<&T> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&T> {
        self.coordinates().map(|(_, y)| y)
    }

    pub fn coordinates(&self) -> Option<(&T, &T)> {
        match &self.coordinates {
            Coordinates::Finite { x, y } => Some((x, y)),
            Coordinates::Infinity => None,
        }
    }

    pub fn curve(&self) -> &Curve<T> {
        &self.curve
    }

    /// The elliptic curve group law.
    ///
    /// The line through both points (the tangent if they coincide) meets the
    /// curve in a third point, and the sum is that point reflected over the
    /// x-axis. Vertical lines meet the curve "at infinity".
    pub fn geometric_add(&self, rhs: &Self) -> Result<Self, Error> {
        if self.curve != rhs.curve {
            return Err(Error::CurveMismatch(self.to_string(), rhs.to_string()));
        }

        let ((x1, y1), (x2, y2)) = match (&self.coordinates, &rhs.coordinates) {
            (Coordinates::Infinity, _) => {
                trace!("lhs is the identity");
                return Ok(rhs.clone());
            }
            (_, Coordinates::Infinity) => {
                trace!("rhs is the identity");
                return Ok(self.clone());
            }
            (Coordinates::Finite { x: x1, y: y1 }, Coordinates::Finite { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        match (x1 == x2, y1 == y2) {
            (true, false) => {
                trace!("vertical line through additive inverses");
                Ok(Self::identity(self.curve.clone()))
            }
            (false, _) => {
                trace!("secant line");
                let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
                // Vieta: x1 + x2 + x3 = s^2
                let x3 = slope.square()?.sub(x1)?.sub(x2)?;
                self.reflected_intersection(&slope, x1, y1, x3)
            }
            (true, true) if y1.is_zero() => {
                trace!("vertical tangent");
                Ok(Self::identity(self.curve.clone()))
            }
            (true, true) => {
                trace!("tangent line");
                // implicit derivative of the curve equation: 2y dy = (3x^2 + a) dx
                let slope = x1
                    .square()?
                    .scale(3)
                    .add(self.curve.a())?
                    .div(&y1.scale(2))?;
                let x3 = slope.square()?.sub(&x1.scale(2))?;
                self.reflected_intersection(&slope, x1, y1, x3)
            }
        }
    }

    // Third intersection of the line with slope `slope` through `(x1, y1)`,
    // mirrored over the x-axis.
    fn reflected_intersection(&self, slope: &T, x1: &T, y1: &T, x3: T) -> Result<Self, Error> {
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Self::on_curve(self.curve.clone(), x3, y3)
    }
}

impl<T: Coordinate> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.coordinates {
            Coordinates::Finite { x, y } => {
                write!(f, "Point({},{})_{}_{}", x, y, self.curve.a(), self.curve.b())
            }
            Coordinates::Infinity => write!(f, "Point(infinity)"),
        }
    }
}

impl<'a, 'b, T: Coordinate> std::ops::Add<&'b Point<T>> for &'a Point<T> {
    type Output = Result<Point<T>, Error>;
    fn add(self, rhs: &'b Point<T>) -> Self::Output {
        self.geometric_add(rhs)
    }
}

impl<T: Coordinate> std::ops::Add for Point<T> {
    type Output = Result<Point<T>, Error>;
    fn add(self, rhs: Self) -> Self::Output {
        self.geometric_add(&rhs)
    }
}

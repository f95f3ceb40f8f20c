#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
pub mod batch;
pub mod curve;

pub use arithmetic::{Coordinate, FieldElement, Point};
pub use batch::validate_points;
pub use curve::Curve;
pub use num_bigint::{BigInt, BigUint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{value} not in field range 0 to {prime} - 1")]
    OutOfRangeValue { value: BigInt, prime: BigInt },
    #[error("field modulus must be at least 2, got {0}")]
    InvalidModulus(BigInt),
    #[error("cannot combine elements of different fields: F_{0} and F_{1}")]
    FieldMismatch(BigUint, BigUint),
    #[error("attempted to divide by zero")]
    DivisionByZero,
    #[error("{0} is not divisible by {1}")]
    InexactDivision(BigInt, BigInt),
    #[error("({x}, {y}) is not on the curve {curve}")]
    PointNotOnCurve {
        x: String,
        y: String,
        curve: String,
    },
    #[error("points {0} and {1} are not on the same curve")]
    CurveMismatch(String, String),
}

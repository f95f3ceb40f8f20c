use crate::arithmetic::{Coordinate, Point};
use crate::curve::Curve;
use crate::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Checks every `(x, y)` candidate against `curve`, returning one result per
/// input in input order.
pub fn validate_points<T>(
    curve: &Curve<T>,
    candidates: &[(T, T)],
) -> Vec<Result<Point<T>, Error>>
where
    T: Coordinate + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = candidates.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = candidates.iter();

    iter.map(|(x, y)| curve.point(x.clone(), y.clone())).collect()
}

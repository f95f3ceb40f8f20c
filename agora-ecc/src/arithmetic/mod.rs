mod coordinate;
mod field;
mod point;

pub use coordinate::Coordinate;
pub use field::FieldElement;
pub use point::Point;

use super::Coordinate;
use crate::Error;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// Element of the prime field `F_p`, stored as its canonical representative
/// in `[0, p)` together with the modulus.
///
/// Primality of the modulus is not checked. Every operation returns a new,
/// fully reduced element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    prime: BigUint,
}

impl FieldElement {
    pub fn new(value: impl Into<BigInt>, prime: impl Into<BigInt>) -> Result<Self, Error> {
        let value: BigInt = value.into();
        let prime: BigInt = prime.into();
        if prime < BigInt::from(2u8) {
            return Err(Error::InvalidModulus(prime));
        }
        if value.sign() == Sign::Minus || value >= prime {
            return Err(Error::OutOfRangeValue { value, prime });
        }

        let (_, value) = value.into_parts();
        let (_, prime) = prime.into_parts();
        Ok(Self { value, prime })
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Raises the element to an arbitrary (possibly negative) power.
    ///
    /// The exponent is first brought into `[0, p - 1)` with a Euclidean
    /// remainder, which is sound because `a^(p-1) = 1` for every nonzero `a`.
    pub fn pow(&self, exponent: impl Into<BigInt>) -> Self {
        let order = BigInt::from(&self.prime - 1u32);
        let exponent: BigInt = exponent.into();
        // mod_floor with a positive divisor is never negative
        let (_, exponent) = exponent.mod_floor(&order).into_parts();
        Self {
            value: self.value.modpow(&exponent, &self.prime),
            prime: self.prime.clone(),
        }
    }

    /// Multiplicative inverse via Fermat's little theorem, `a^(p-2)`.
    pub fn inverse(&self) -> Result<Self, Error> {
        if self.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.pow(-1))
    }

    fn reduced(&self, value: BigUint) -> Self {
        Self {
            value: value % &self.prime,
            prime: self.prime.clone(),
        }
    }

    fn check_field(&self, other: &Self) -> Result<(), Error> {
        if self.prime != other.prime {
            return Err(Error::FieldMismatch(
                self.prime.clone(),
                other.prime.clone(),
            ));
        }
        Ok(())
    }
}

impl Coordinate for FieldElement {
    fn add(&self, other: &Self) -> Result<Self, Error> {
        self.check_field(other)?;
        Ok(self.reduced(&self.value + &other.value))
    }

    fn sub(&self, other: &Self) -> Result<Self, Error> {
        self.check_field(other)?;
        // other.value < prime, so this never underflows
        Ok(self.reduced(&self.value + &self.prime - &other.value))
    }

    fn mul(&self, other: &Self) -> Result<Self, Error> {
        self.check_field(other)?;
        Ok(self.reduced(&self.value * &other.value))
    }

    fn div(&self, other: &Self) -> Result<Self, Error> {
        self.check_field(other)?;
        let inverse = other.inverse()?;
        Coordinate::mul(self, &inverse)
    }

    fn scale(&self, k: u32) -> Self {
        self.reduced(&self.value * k)
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.value)
    }
}

impl std::ops::Neg for &FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        self.reduced(&self.prime - &self.value)
    }
}

impl std::ops::Neg for FieldElement {
    type Output = FieldElement;
    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_field_op {
    ($op_trait:ident, $op:ident) => {
        impl<'a, 'b> std::ops::$op_trait<&'b FieldElement> for &'a FieldElement {
            type Output = Result<FieldElement, Error>;
            fn $op(self, rhs: &'b FieldElement) -> Self::Output {
                Coordinate::$op(self, rhs)
            }
        }

        impl std::ops::$op_trait for FieldElement {
            type Output = Result<FieldElement, Error>;
            fn $op(self, rhs: Self) -> Self::Output {
                Coordinate::$op(&self, &rhs)
            }
        }
    };
}

impl_field_op!(Add, add);
impl_field_op!(Sub, sub);
impl_field_op!(Mul, mul);
impl_field_op!(Div, div);

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn fe(value: u64, prime: u64) -> FieldElement {
        FieldElement::new(value, prime).unwrap()
    }

    #[test]
    fn construction_range() {
        assert!(FieldElement::new(0, 13).is_ok());
        assert!(FieldElement::new(12, 13).is_ok());
        assert_eq!(
            FieldElement::new(13, 13),
            Err(Error::OutOfRangeValue {
                value: BigInt::from(13),
                prime: BigInt::from(13),
            })
        );
        assert_eq!(
            FieldElement::new(-1, 13),
            Err(Error::OutOfRangeValue {
                value: BigInt::from(-1),
                prime: BigInt::from(13),
            })
        );
        assert_eq!(
            FieldElement::new(0, 1),
            Err(Error::InvalidModulus(BigInt::from(1)))
        );
        assert_eq!(
            FieldElement::new(0, -7),
            Err(Error::InvalidModulus(BigInt::from(-7)))
        );
    }

    #[test]
    fn equality() {
        assert_eq!(fe(7, 13), fe(7, 13));
        assert_ne!(fe(7, 13), fe(6, 13));
        assert_ne!(fe(7, 13), fe(7, 19));
    }

    #[test]
    fn operations_with_small_modulus() {
        let a = fe(7, 13);
        let b = fe(12, 13);
        assert_eq!((&a + &b).unwrap(), fe(6, 13));
        assert_eq!((&a - &b).unwrap(), fe(8, 13));
        assert_eq!((&b - &a).unwrap(), fe(5, 13));
        assert_eq!((&fe(3, 13) * &b).unwrap(), fe(10, 13));
        assert_eq!(fe(3, 13).pow(3), fe(1, 13));
        assert_eq!(a.pow(-3), fe(8, 13));
        assert_eq!(-&a, fe(6, 13));
        assert_eq!(-fe(0, 13), fe(0, 13));
        assert_eq!(fe(9, 19).scale(3), fe(8, 19));

        let a = fe(3, 31);
        let b = fe(24, 31);
        assert_eq!((&a / &b).unwrap(), fe(4, 31));
        assert_eq!(fe(17, 31).pow(-3), fe(29, 31));
        assert_eq!((fe(4, 31).pow(-4) * fe(11, 31)).unwrap(), fe(13, 31));
    }

    #[test]
    fn operations_with_large_modulus() {
        // secp256k1 base field
        let prime = BigUint::parse_bytes(
            b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .unwrap();
        let gx = BigUint::parse_bytes(
            b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            16,
        )
        .unwrap();
        let gy = BigUint::parse_bytes(
            b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            16,
        )
        .unwrap();
        let x = FieldElement::new(gx, prime.clone()).unwrap();
        let y = FieldElement::new(gy, prime.clone()).unwrap();
        let seven = FieldElement::new(7, prime.clone()).unwrap();

        let lhs = y.pow(2);
        let rhs = (x.pow(3) + seven).unwrap();
        assert_eq!(lhs, rhs);

        let x_min_y = (&x - &y).unwrap();
        let y_min_x = (&y - &x).unwrap();
        assert_eq!(x_min_y, -y_min_x);

        let one = FieldElement::new(1, prime).unwrap();
        assert_eq!((&x * &x.inverse().unwrap()).unwrap(), one);
    }

    #[test]
    fn mismatched_fields() {
        let a = fe(7, 13);
        let b = fe(7, 19);
        let mismatch = Error::FieldMismatch(BigUint::from(13u32), BigUint::from(19u32));
        assert_eq!(&a + &b, Err(mismatch.clone()));
        assert_eq!(&a - &b, Err(mismatch.clone()));
        assert_eq!(&a * &b, Err(mismatch.clone()));
        assert_eq!(&a / &b, Err(mismatch));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(&fe(5, 13) / &fe(0, 13), Err(Error::DivisionByZero));
        assert_eq!(fe(0, 13).inverse(), Err(Error::DivisionByZero));
    }

    #[test]
    fn smallest_field() {
        let zero = fe(0, 2);
        let one = fe(1, 2);
        assert_eq!((&one + &one).unwrap(), zero);
        assert_eq!(one.inverse().unwrap(), one);
        assert_eq!(one.pow(-5), one);
    }

    #[test]
    fn display() {
        assert_eq!(fe(192, 223).to_string(), "FieldElement_223(192)");
    }

    const PRIMES: &[u64] = &[
        3,
        13,
        31,
        223,
        65_537,
        4_294_967_291,
        18_446_744_073_709_551_557,
    ];

    fn elements(n: usize) -> impl Strategy<Value = Vec<FieldElement>> {
        prop::sample::select(PRIMES).prop_flat_map(move |p| {
            prop::collection::vec((0..p).prop_map(move |v| fe(v, p)), n)
        })
    }

    fn nonzero_element() -> impl Strategy<Value = FieldElement> {
        prop::sample::select(PRIMES).prop_flat_map(|p| (1..p).prop_map(move |v| fe(v, p)))
    }

    proptest! {
        #[test]
        fn addition_laws(v in elements(3)) {
            let (a, b, c) = (&v[0], &v[1], &v[2]);
            let zero = FieldElement::new(0, a.prime().clone()).unwrap();
            prop_assert_eq!((a + b).unwrap(), (b + a).unwrap());
            prop_assert_eq!(
                ((a + b).unwrap() + c.clone()).unwrap(),
                (a.clone() + (b + c).unwrap()).unwrap()
            );
            prop_assert_eq!(&(a + &zero).unwrap(), a);
            prop_assert_eq!(((a - b).unwrap() + b.clone()).unwrap(), a.clone());
            prop_assert!((a + &(-a)).unwrap().is_zero());
        }

        #[test]
        fn multiplication_distributes(v in elements(3)) {
            let (a, b, c) = (&v[0], &v[1], &v[2]);
            prop_assert_eq!((a * b).unwrap(), (b * a).unwrap());
            prop_assert_eq!(
                (a * &(b + c).unwrap()).unwrap(),
                ((a * b).unwrap() + (a * c).unwrap()).unwrap()
            );
            prop_assert_eq!(a.scale(3), (&(a + a).unwrap() + a).unwrap());
        }

        #[test]
        fn fermat_inverse(a in nonzero_element()) {
            let one = FieldElement::new(1, a.prime().clone()).unwrap();
            let p_minus_two = BigInt::from(a.prime().clone()) - 2;
            prop_assert_eq!((&a * &a.pow(p_minus_two)).unwrap(), one.clone());
            prop_assert_eq!((&a / &a).unwrap(), one.clone());
            prop_assert_eq!((&a * &a.inverse().unwrap()).unwrap(), one);
        }

        #[test]
        fn exponent_normalization(v in elements(1), e in any::<i64>()) {
            let a = &v[0];
            let order = BigInt::from(a.prime().clone()) - 1;
            let normalized = BigInt::from(e).mod_floor(&order);
            prop_assert_eq!(a.pow(e), a.pow(normalized));
            prop_assert!(a.pow(e).value() < a.prime());
        }
    }
}

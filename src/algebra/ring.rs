use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// Implemented by the scalar `Zp<P>` and by `Polynomial<P>`, so both share
/// one exponentiation routine.
///
/// Laws (you should test these for concrete types):
/// - (R, +) is an abelian group with identity `zero()`
/// - (R, ·) is a commutative monoid with identity `one()`
/// - multiplication distributes over addition
pub trait Ring:
    Sized
    + Clone
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    /// Exponentiation by a non-negative integer using square-and-multiply.
    ///
    /// Squares of the base are reused across set bits of `exp`.
    fn pow(&self, exp: u64) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base.clone();
            }
            e >>= 1;
            if e > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::ring::Ring;
use crate::utils::{extended_gcd, is_prime, modulo};

/// Residue class modulo `P`: an integer kept fully reduced in `[0, P)`.
///
/// `P` is expected to be prime for field behaviour, but only `P > 1` is
/// required; over a composite modulus [`Zp::solve`] and [`Zp::inverse`]
/// simply return `None` for non-units. Use [`Zp::validate_prime`] when the
/// distinction matters.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Zp<const P: u64> {
    value: u64,
}

impl<const P: u64> Zp<P> {
    pub const ZERO: Self = Self { value: 0 };
    pub const ONE: Self = Self { value: 1 % P };

    /// Create a residue from an unsigned integer, reducing it modulo `P`.
    pub const fn new(value: u64) -> Self {
        Self { value: value % P }
    }

    /// Create a residue from a signed integer.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Zp;
    ///
    /// assert_eq!(Zp::<5>::from_i64(-1).value(), 4);
    /// assert_eq!(Zp::<5>::from_i64(7).value(), 2);
    /// ```
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value: modulo(value, P),
        }
    }

    /// Get the representative in `[0, P-1]`.
    pub const fn value(self) -> u64 {
        self.value
    }

    /// The modulus `P`.
    pub const fn modulus() -> u64 {
        P
    }

    /// Validate that the modulus `P` is prime.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Zp;
    ///
    /// assert!(Zp::<2>::validate_prime().is_ok());
    /// assert!(Zp::<15>::validate_prime().is_err());
    /// ```
    pub const fn validate_prime() -> Result<(), &'static str> {
        if !is_prime(P) {
            return Err("modulus P is not prime");
        }
        Ok(())
    }

    /// Solve `self * x = rhs` for `x`.
    ///
    /// Returns `None` when no solution exists (never for prime `P` and
    /// non-zero `self`).
    pub fn solve(self, rhs: Self) -> Option<Self> {
        extended_gcd(self.value, rhs.value, P).map(Self::new)
    }

    /// Multiplicative inverse, if `self` is a unit.
    pub fn inverse(self) -> Option<Self> {
        if self.value == 0 {
            return None;
        }
        self.solve(Self::ONE)
    }
}

impl<const P: u64> fmt::Debug for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zp<{}>({})", P, self.value)
    }
}

impl<const P: u64> fmt::Display for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const P: u64> From<u64> for Zp<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for Zp<P> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<const P: u64> From<i32> for Zp<P> {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl<const P: u64> From<Zp<P>> for u64 {
    fn from(z: Zp<P>) -> Self {
        z.value
    }
}

/* ---- arithmetic ---- */

impl<const P: u64> Add for Zp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let sum = self.value as u128 + rhs.value as u128;
        Self {
            value: (sum % P as u128) as u64,
        }
    }
}

impl<const P: u64> Sub for Zp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for Zp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let prod = self.value as u128 * rhs.value as u128;
        Self {
            value: (prod % P as u128) as u64,
        }
    }
}

impl<const P: u64> Neg for Zp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.value == 0 {
            self
        } else {
            Self {
                value: P - self.value,
            }
        }
    }
}

impl<const P: u64> Ring for Zp<P> {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

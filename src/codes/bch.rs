use log::debug;

use crate::algebra::code::Code;
use crate::error::AlgebraError;
use crate::structures::field::GaloisFieldExtension;
use crate::structures::poly::Polynomial;
use crate::structures::zp::Zp;

#[cfg(feature = "rand")]
use crate::structures::generator::RandomPolynomialGenerator;

/// BCH code over `GF(Q)` with symbols located in `GF(Q^M)`, designed to
/// correct `T` errors.
///
/// Only the generator polynomial is constructed; [`Code::encode`],
/// [`Code::decode`] and [`Code::errors`] report
/// [`AlgebraError::NotImplemented`].
///
/// # Example
///
/// ```
/// use galois_bch::{BchCode, Code, FieldChecks, GaloisFieldExtension, Polynomial};
///
/// let factor = Polynomial::<2>::from_coeffs(&[1, 1, 0, 0, 1]);
/// let field = GaloisFieldExtension::<2, 4>::build_with(
///     factor,
///     Polynomial::x(),
///     FieldChecks::default(),
/// )
/// .unwrap();
///
/// let code = BchCode::<2, 4, 2>::new(&field).unwrap();
/// assert_eq!(code.block_size(), 15);
/// assert_eq!(code.distance(), 4);
/// assert_eq!(code.generator().degree(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct BchCode<const Q: u64, const M: usize, const T: usize> {
    generator: Polynomial<Q>,
}

impl<const Q: u64, const M: usize, const T: usize> BchCode<Q, M, T> {
    /// Build the code's generator from an existing field.
    ///
    /// Fails unless `T < (Q^M - 1) / 2`.
    pub fn new(field: &GaloisFieldExtension<Q, M>) -> Result<Self, AlgebraError> {
        let n = GaloisFieldExtension::<Q, M>::group_order()?;
        if T as u64 >= n / 2 {
            return Err(AlgebraError::InvalidArgument(format!(
                "cannot correct {} errors with block size {}",
                T, n
            )));
        }
        let generator = Self::make_generator(field)?;
        Ok(Self { generator })
    }

    /// Build the code over a freshly searched field.
    #[cfg(feature = "rand")]
    pub fn random() -> Result<Self, AlgebraError> {
        let mut gen = RandomPolynomialGenerator::<Q, M>::new();
        let field = GaloisFieldExtension::<Q, M>::build(&mut gen)?;
        Self::new(&field)
    }

    /// Least common multiple of the minimal polynomials of
    /// `alpha^0 .. alpha^(2T - 1)`.
    pub fn make_generator(
        field: &GaloisFieldExtension<Q, M>,
    ) -> Result<Polynomial<Q>, AlgebraError> {
        let mut generator = Polynomial::one();
        for i in 0..2 * T {
            let minimal = field.minimal_polynomial(i)?;
            let common = Polynomial::gcd(&minimal, &generator)?;
            generator = generator * minimal.quotient(&common)?;
        }
        debug!(
            "BCH({}, {}, {}) generator {} of degree {}",
            Q,
            M,
            T,
            generator,
            generator.degree()
        );
        Ok(generator)
    }

    pub fn generator(&self) -> &Polynomial<Q> {
        &self.generator
    }

    /// `(x^n - 1) / g`, the check polynomial.
    pub fn check_polynomial(&self) -> Result<Polynomial<Q>, AlgebraError> {
        let mut cyclic = Polynomial::monomial(Zp::ONE, self.block_size());
        cyclic.set(0, -1);
        let (h, r) = cyclic.div_rem(&self.generator)?;
        if !r.is_zero() {
            return Err(AlgebraError::InvariantViolation(format!(
                "generator {} does not divide x^{} - 1",
                self.generator,
                self.block_size()
            )));
        }
        Ok(h)
    }
}

impl<const Q: u64, const M: usize, const T: usize> Code for BchCode<Q, M, T> {
    fn block_size(&self) -> usize {
        (Q as usize).pow(M as u32) - 1
    }

    fn info_size(&self) -> usize {
        self.block_size() - self.generator.degree()
    }

    fn distance(&self) -> usize {
        2 * T
    }

    fn encode(&self, _message: &[u64]) -> Result<Vec<u64>, AlgebraError> {
        Err(AlgebraError::NotImplemented("BCH encode"))
    }

    fn decode(&self, _codeword: &[u64]) -> Result<Vec<u64>, AlgebraError> {
        Err(AlgebraError::NotImplemented("BCH decode"))
    }

    fn errors(&self, _codeword: &[u64]) -> Result<Vec<usize>, AlgebraError> {
        Err(AlgebraError::NotImplemented("BCH error location"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::field::FieldChecks;

    fn gf16() -> GaloisFieldExtension<2, 4> {
        let factor = Polynomial::from_coeffs(&[1, 1, 0, 0, 1]);
        GaloisFieldExtension::build_with(factor, Polynomial::x(), FieldChecks::default()).unwrap()
    }

    #[test]
    fn bch_2_4_2() {
        let code = BchCode::<2, 4, 2>::new(&gf16()).unwrap();
        assert_eq!(code.distance(), 4);
        assert_eq!(code.block_size(), 15);
        assert_eq!(
            *code.generator(),
            Polynomial::from_coeffs(&[1, 1, 0, 0, 1, 1, 1, 0, 0, 1])
        );
        assert_eq!(code.info_size(), 6);
    }

    #[test]
    fn repeated_conjugates_are_not_multiplied_twice() {
        // indices 0..6 cover the orbits of 1, alpha, alpha^3 and alpha^5
        let code = BchCode::<2, 4, 3>::new(&gf16()).unwrap();
        assert_eq!(
            *code.generator(),
            Polynomial::from_coeffs(&[1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1])
        );
        assert_eq!(code.distance(), 6);
    }

    #[test]
    fn check_polynomial_is_exact() {
        let code = BchCode::<2, 4, 2>::new(&gf16()).unwrap();
        let h = code.check_polynomial().unwrap();
        assert_eq!(h, Polynomial::from_coeffs(&[1, 1, 1, 1, 0, 0, 1]));

        let mut cyclic = Polynomial::monomial(Zp::ONE, 15);
        cyclic.set(0, -1);
        assert_eq!(&h * code.generator(), cyclic);
    }

    #[test]
    fn rejects_too_many_errors() {
        assert!(matches!(
            BchCode::<2, 4, 7>::new(&gf16()),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn data_operations_are_not_implemented() {
        let code = BchCode::<2, 4, 2>::new(&gf16()).unwrap();
        assert_eq!(
            code.encode(&[1, 0, 1, 1, 0, 0]),
            Err(AlgebraError::NotImplemented("BCH encode"))
        );
        assert!(matches!(
            code.decode(&[0; 15]),
            Err(AlgebraError::NotImplemented(_))
        ));
        assert!(matches!(
            code.errors(&[0; 15]),
            Err(AlgebraError::NotImplemented(_))
        ));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_field_code() {
        let code = BchCode::<2, 4, 2>::random().unwrap();
        assert_eq!(code.distance(), 4);
        assert_eq!(code.generator().degree(), 9);
        assert!(code.check_polynomial().is_ok());
    }
}
